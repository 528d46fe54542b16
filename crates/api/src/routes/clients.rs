//! Client management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use hipoteca_core::identity::Dni;
use hipoteca_db::entities::clients;
use hipoteca_db::repositories::{
    ClientRepository, CreateClientInput, MortgageRepository, UpdateClientInput,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use validator::Validate;

use super::mortgages::MortgageResponse;
use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/client",
            get(list_clients).post(create_client).put(update_client),
        )
        .route("/client/{dni}", get(get_client).delete(delete_client))
        .route("/client/{dni}/mortgages", get(list_client_mortgages))
}

/// Request body for creating a client.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    /// National identity code.
    #[serde(rename = "DNI")]
    pub dni: String,
    /// Display name.
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    /// Contact email.
    #[validate(email, length(max = 60))]
    pub email: String,
    /// Capital the client wants to borrow.
    #[serde(rename = "requestedCapital")]
    pub requested_capital: Decimal,
}

/// Request body for a partial client update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    /// Identity code of the client to update.
    #[serde(rename = "DNI")]
    pub dni: String,
    /// New display name.
    #[validate(length(min = 1, max = 60))]
    pub name: Option<String>,
    /// New email.
    #[validate(email, length(max = 60))]
    pub email: Option<String>,
    /// New requested capital.
    #[serde(rename = "requestedCapital")]
    pub requested_capital: Option<Decimal>,
}

/// Response for a client.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientResponse {
    /// National identity code.
    #[serde(rename = "DNI")]
    pub dni: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Requested capital.
    #[serde(rename = "requestedCapital")]
    pub requested_capital: Decimal,
}

impl From<clients::Model> for ClientResponse {
    fn from(model: clients::Model) -> Self {
        Self {
            dni: model.dni,
            name: model.name,
            email: model.email,
            requested_capital: model.requested_capital,
        }
    }
}

/// GET `/client` - List all clients.
async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let repo = ClientRepository::new(state.db.clone());
    let rows = repo.list_clients().await?;

    Ok(Json(rows.into_iter().map(ClientResponse::from).collect()))
}

/// POST `/client` - Register a client.
async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dni = Dni::parse(&payload.dni)?;
    let repo = ClientRepository::new(state.db.clone());

    let created = repo
        .create_client(CreateClientInput {
            dni,
            name: payload.name,
            email: payload.email,
            requested_capital: payload.requested_capital,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(created))))
}

/// GET `/client/{dni}` - Fetch one client.
async fn get_client(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let dni = Dni::parse(&dni)?;
    let repo = ClientRepository::new(state.db.clone());

    let client = repo.get_by_dni(&dni).await?;
    Ok(Json(client.into()))
}

/// PUT `/client` - Update the fields present in the body.
async fn update_client(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    let dni = Dni::parse(&payload.dni)?;
    let repo = ClientRepository::new(state.db.clone());

    let updated = repo
        .update_client(
            &dni,
            UpdateClientInput {
                name: payload.name,
                email: payload.email,
                requested_capital: payload.requested_capital,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE `/client/{dni}` - Remove a client and its mortgages.
async fn delete_client(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let dni = Dni::parse(&dni)?;
    let repo = ClientRepository::new(state.db.clone());

    repo.delete_client(&dni).await?;
    info!(dni = %dni, "Client removed via API");

    Ok(Json(json!({ "message": "Client deleted successfully" })))
}

/// GET `/client/{dni}/mortgages` - Mortgages owned by a client.
async fn list_client_mortgages(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<Vec<MortgageResponse>>, ApiError> {
    let dni = Dni::parse(&dni)?;
    let repo = MortgageRepository::new(state.db.clone());

    let rows = repo.list_for_client(&dni).await?;
    Ok(Json(rows.into_iter().map(MortgageResponse::from).collect()))
}
