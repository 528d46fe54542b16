//! Client repository for database operations.

use std::sync::Arc;

use hipoteca_core::identity::Dni;
use hipoteca_shared::AppError;
use hipoteca_shared::types::{MAX_STORED_AMOUNT, round_currency};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::{debug, info};

use crate::entities::clients;

/// Error types for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No client with this DNI.
    #[error("Client not found: {0}")]
    NotFound(String),

    /// DNI is already registered.
    #[error("A client with DNI '{0}' already exists")]
    DuplicateDni(String),

    /// Email is already registered to another client.
    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    /// Requested capital is below zero.
    #[error("Requested capital cannot be negative")]
    NegativeCapital,

    /// Requested capital does not fit the storage column.
    #[error("Requested capital cannot exceed 99999999.99")]
    CapitalOutOfRange,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => Self::NotFound(err.to_string()),
            ClientError::DuplicateDni(_)
            | ClientError::DuplicateEmail(_)
            | ClientError::NegativeCapital
            | ClientError::CapitalOutOfRange => Self::Validation(err.to_string()),
            ClientError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClientInput {
    /// Validated DNI.
    pub dni: Dni,
    /// Display name.
    pub name: String,
    /// Contact email (unique).
    pub email: String,
    /// Capital the client wants to borrow.
    pub requested_capital: Decimal,
}

/// Input for a partial client update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientInput {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New requested capital.
    pub requested_capital: Option<Decimal>,
}

impl UpdateClientInput {
    /// Returns true if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.requested_capital.is_none()
    }
}

/// Client repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: Arc<DatabaseConnection>,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists all clients ordered by DNI.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_clients(&self) -> Result<Vec<clients::Model>, DbErr> {
        clients::Entity::find()
            .order_by_asc(clients::Column::Dni)
            .all(self.db.as_ref())
            .await
    }

    /// Finds a client by DNI.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_dni(&self, dni: &Dni) -> Result<Option<clients::Model>, DbErr> {
        clients::Entity::find_by_id(dni.as_str())
            .one(self.db.as_ref())
            .await
    }

    /// Gets a client by DNI, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no client has this DNI.
    pub async fn get_by_dni(&self, dni: &Dni) -> Result<clients::Model, ClientError> {
        self.find_by_dni(dni)
            .await?
            .ok_or_else(|| ClientError::NotFound(dni.to_string()))
    }

    /// Finds a client by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<clients::Model>, DbErr> {
        clients::Entity::find()
            .filter(clients::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
    }

    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The DNI or email is already registered
    /// - The requested capital is negative or too large
    pub async fn create_client(
        &self,
        input: CreateClientInput,
    ) -> Result<clients::Model, ClientError> {
        let requested_capital = normalize_capital(input.requested_capital)?;

        if self.find_by_dni(&input.dni).await?.is_some() {
            return Err(ClientError::DuplicateDni(input.dni.into_inner()));
        }

        if self.find_by_email(&input.email).await?.is_some() {
            return Err(ClientError::DuplicateEmail(input.email));
        }

        let dni = input.dni.into_inner();
        let email = input.email;
        let client = clients::ActiveModel {
            dni: Set(dni.clone()),
            name: Set(input.name),
            email: Set(email.clone()),
            requested_capital: Set(requested_capital),
        };

        let created = client
            .insert(self.db.as_ref())
            .await
            .map_err(|e| map_unique_violation(e, &dni, &email))?;

        info!(dni = %created.dni, "Client created");
        Ok(created)
    }

    /// Applies a partial update to a client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client does not exist
    /// - The new email belongs to another client
    /// - The new requested capital is negative or too large
    pub async fn update_client(
        &self,
        dni: &Dni,
        input: UpdateClientInput,
    ) -> Result<clients::Model, ClientError> {
        let existing = self.get_by_dni(dni).await?;

        if input.is_empty() {
            debug!(dni = %dni, "Empty client update, nothing to do");
            return Ok(existing);
        }

        let requested_capital = input
            .requested_capital
            .map(normalize_capital)
            .transpose()?;

        if let Some(email) = input.email.as_deref()
            && email != existing.email
            && let Some(other) = self.find_by_email(email).await?
            && other.dni != existing.dni
        {
            return Err(ClientError::DuplicateEmail(email.to_string()));
        }

        let email_for_error = input.email.clone().unwrap_or_default();
        let mut client = existing.into_active_model();
        if let Some(name) = input.name {
            client.name = Set(name);
        }
        if let Some(email) = input.email {
            client.email = Set(email);
        }
        if let Some(capital) = requested_capital {
            client.requested_capital = Set(capital);
        }

        let updated = client
            .update(self.db.as_ref())
            .await
            .map_err(|e| map_unique_violation(e, dni.as_str(), &email_for_error))?;

        info!(dni = %updated.dni, "Client updated");
        Ok(updated)
    }

    /// Deletes a client. Its mortgages are removed by the foreign key cascade.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no client has this DNI.
    pub async fn delete_client(&self, dni: &Dni) -> Result<(), ClientError> {
        let result = clients::Entity::delete_by_id(dni.as_str())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(ClientError::NotFound(dni.to_string()));
        }

        info!(dni = %dni, "Client deleted");
        Ok(())
    }
}

/// Rejects negative or oversized capital and rounds to currency precision.
fn normalize_capital(capital: Decimal) -> Result<Decimal, ClientError> {
    if capital.is_sign_negative() && !capital.is_zero() {
        return Err(ClientError::NegativeCapital);
    }
    let rounded = round_currency(capital);
    if rounded > MAX_STORED_AMOUNT {
        return Err(ClientError::CapitalOutOfRange);
    }
    Ok(rounded)
}

/// Turns a unique-constraint failure into the matching duplicate error.
fn map_unique_violation(err: DbErr, dni: &str, email: &str) -> ClientError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            ClientError::DuplicateEmail(email.to_string())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => ClientError::DuplicateDni(dni.to_string()),
        _ => ClientError::Database(err),
    }
}
