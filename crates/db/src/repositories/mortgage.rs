//! Mortgage repository for database operations.
//!
//! Mortgages are never written directly: each row is the persisted result
//! of an amortization quote for an existing client.

use std::sync::Arc;

use hipoteca_core::identity::Dni;
use hipoteca_core::mortgage::{CalculationError, MortgageCalculator, MortgageQuote, MortgageTerms};
use hipoteca_shared::AppError;
use hipoteca_shared::types::is_storable_amount;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tracing::{info, warn};

use crate::entities::{clients, mortgages};

/// Error types for mortgage operations.
#[derive(Debug, thiserror::Error)]
pub enum MortgageError {
    /// The owning client does not exist.
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// No mortgage with this ID.
    #[error("Mortgage not found: {0}")]
    NotFound(i32),

    /// The quote could not be computed.
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// The quote does not fit the storage columns.
    #[error("Mortgage amounts exceed the storable range")]
    AmountOutOfRange,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<MortgageError> for AppError {
    fn from(err: MortgageError) -> Self {
        match err {
            MortgageError::ClientNotFound(_) | MortgageError::NotFound(_) => {
                Self::NotFound(err.to_string())
            }
            MortgageError::Calculation(e) => e.into(),
            MortgageError::AmountOutOfRange => Self::Validation(err.to_string()),
            MortgageError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a mortgage.
#[derive(Debug, Clone)]
pub struct CreateMortgageInput {
    /// DNI of the owning client.
    pub dni: Dni,
    /// Annual nominal rate as a percentage (TAE).
    pub annual_rate_percent: Decimal,
    /// Repayment term in years.
    pub term_years: Decimal,
}

/// Mortgage repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct MortgageRepository {
    db: Arc<DatabaseConnection>,
}

impl MortgageRepository {
    /// Creates a new mortgage repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists all mortgages ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_mortgages(&self) -> Result<Vec<mortgages::Model>, DbErr> {
        mortgages::Entity::find()
            .order_by_asc(mortgages::Column::Id)
            .all(self.db.as_ref())
            .await
    }

    /// Finds a mortgage by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<mortgages::Model>, DbErr> {
        mortgages::Entity::find_by_id(id).one(self.db.as_ref()).await
    }

    /// Gets a mortgage by ID, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `MortgageError::NotFound` if no mortgage has this ID.
    pub async fn get_by_id(&self, id: i32) -> Result<mortgages::Model, MortgageError> {
        self.find_by_id(id)
            .await?
            .ok_or(MortgageError::NotFound(id))
    }

    /// Lists the mortgages owned by a client.
    ///
    /// # Errors
    ///
    /// Returns `MortgageError::ClientNotFound` if the client does not exist.
    pub async fn list_for_client(&self, dni: &Dni) -> Result<Vec<mortgages::Model>, MortgageError> {
        let client = self.find_client(dni).await?;

        let rows = mortgages::Entity::find()
            .filter(mortgages::Column::ClientId.eq(client.dni))
            .order_by_asc(mortgages::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(rows)
    }

    /// Quotes a mortgage for the client's requested capital and stores it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client does not exist
    /// - The rate, term, or client capital violate the calculator's preconditions
    /// - The resulting amounts do not fit the storage columns
    pub async fn create_mortgage(
        &self,
        input: CreateMortgageInput,
    ) -> Result<mortgages::Model, MortgageError> {
        let client = self.find_client(&input.dni).await?;
        let capital = client.requested_capital;

        let quote = quote_for(
            capital,
            input.annual_rate_percent,
            input.term_years,
        )?;

        let mortgage = mortgages::ActiveModel {
            id: NotSet,
            monthly_payment: Set(quote.monthly_payment),
            total_amount: Set(quote.total_amount),
            client_id: Set(client.dni),
        };

        let created = mortgage.insert(self.db.as_ref()).await?;

        info!(
            mortgage_id = created.id,
            dni = %created.client_id,
            monthly_payment = %created.monthly_payment,
            total_amount = %created.total_amount,
            total_interest = %quote.total_interest(capital),
            "Mortgage created"
        );
        Ok(created)
    }

    async fn find_client(&self, dni: &Dni) -> Result<clients::Model, MortgageError> {
        clients::Entity::find_by_id(dni.as_str())
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| MortgageError::ClientNotFound(dni.to_string()))
    }
}

/// Runs the calculator and checks the result fits `NUMERIC(10,2)`.
fn quote_for(
    requested_capital: Decimal,
    annual_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<MortgageQuote, MortgageError> {
    let terms = MortgageTerms::new(requested_capital, annual_rate_percent, term_years);
    let quote = MortgageCalculator::compute(&terms)?;

    if !is_storable_amount(quote.monthly_payment) || !is_storable_amount(quote.total_amount) {
        warn!(
            monthly_payment = %quote.monthly_payment,
            total_amount = %quote.total_amount,
            "Mortgage quote out of storable range"
        );
        return Err(MortgageError::AmountOutOfRange);
    }

    Ok(quote)
}
