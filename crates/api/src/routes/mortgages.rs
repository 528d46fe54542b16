//! Mortgage routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use hipoteca_core::identity::Dni;
use hipoteca_db::entities::mortgages;
use hipoteca_db::repositories::{CreateMortgageInput, MortgageRepository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the mortgage routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mortgage", get(list_mortgages).post(create_mortgage))
        .route("/mortgage/{id}", get(get_mortgage))
}

/// Request body for quoting and storing a mortgage.
///
/// The principal is the client's stored requested capital.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMortgageRequest {
    /// Identity code of the borrowing client.
    #[serde(rename = "DNI")]
    pub dni: String,
    /// Annual nominal rate as a percentage.
    #[serde(rename = "TAE")]
    pub tae: Decimal,
    /// Term in years.
    #[serde(rename = "repaymentTerm")]
    pub repayment_term: Decimal,
}

/// Response for a mortgage.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MortgageResponse {
    /// Mortgage ID.
    pub id: i32,
    /// Fixed monthly installment.
    #[serde(rename = "monthlyPayment")]
    pub monthly_payment: Decimal,
    /// Total repaid over the term.
    #[serde(rename = "totalAmount")]
    pub total_amount: Decimal,
    /// Owning client's DNI.
    pub client_id: String,
}

impl From<mortgages::Model> for MortgageResponse {
    fn from(model: mortgages::Model) -> Self {
        Self {
            id: model.id,
            monthly_payment: model.monthly_payment,
            total_amount: model.total_amount,
            client_id: model.client_id,
        }
    }
}

/// GET `/mortgage` - List all mortgages.
async fn list_mortgages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MortgageResponse>>, ApiError> {
    let repo = MortgageRepository::new(state.db.clone());
    let rows = repo.list_mortgages().await?;

    Ok(Json(rows.into_iter().map(MortgageResponse::from).collect()))
}

/// POST `/mortgage` - Quote a mortgage for a client and store it.
async fn create_mortgage(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMortgageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dni = Dni::parse(&payload.dni)?;
    let repo = MortgageRepository::new(state.db.clone());

    let created = repo
        .create_mortgage(CreateMortgageInput {
            dni,
            annual_rate_percent: payload.tae,
            term_years: payload.repayment_term,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MortgageResponse::from(created))))
}

/// GET `/mortgage/{id}` - Fetch one mortgage.
async fn get_mortgage(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MortgageResponse>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let repo = MortgageRepository::new(state.db.clone());
    let mortgage = repo.get_by_id(id).await?;

    Ok(Json(mortgage.into()))
}
