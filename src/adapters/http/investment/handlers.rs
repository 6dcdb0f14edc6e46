//! HTTP handlers for investment endpoints.

use std::str::FromStr;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CreateInvestmentCommand, GetInvestmentSummaryQuery, UpdateInvestmentStatusCommand,
};
use crate::domain::foundation::{ClientId, InvestmentId, Timestamp, ValidationError};
use crate::domain::investment::InvestmentStatus;

use super::dto::{
    CreateInvestmentRequest, InvestmentResponse, InvestmentSummaryResponse,
    StatusChangeResponse, StatusUpdatedResponse, UpdateStatusRequest,
};
use crate::adapters::http::error::InvestmentApiError;
use crate::adapters::http::state::AppState;

/// POST /api/clients/:client_id/investments - Open a new investment
pub async fn create_investment(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<CreateInvestmentRequest>,
) -> Result<impl IntoResponse, InvestmentApiError> {
    let cmd = CreateInvestmentCommand {
        client_id: ClientId::new(client_id)?,
        investment_type: request.investment_type,
        amount: request.amount,
        start_date: request.start_date.map(Timestamp::from_datetime),
        source: request.source,
        returns: request.returns,
    };

    let result = state.create_investment_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(InvestmentResponse::from(&result.investment)),
    ))
}

/// GET /api/clients/:client_id/investments/summary - Portfolio summary
pub async fn get_investment_summary(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, InvestmentApiError> {
    let query = GetInvestmentSummaryQuery {
        client_id: ClientId::new(client_id)?,
    };

    let result = state.investment_summary_handler().handle(query).await?;

    Ok(Json(InvestmentSummaryResponse::new(
        &result.summary,
        &result.investments,
    )))
}

/// PATCH /api/investments/:investment_id/status - Move an investment to a new status
pub async fn update_investment_status(
    State(state): State<AppState>,
    Path(investment_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, InvestmentApiError> {
    let investment_id = InvestmentId::from_str(&investment_id).map_err(|e| {
        ValidationError::invalid_format("investment_id", e.to_string())
    })?;
    let cmd = UpdateInvestmentStatusCommand {
        investment_id,
        expected: InvestmentStatus::from_str(&request.expected_status)?,
        target: InvestmentStatus::from_str(&request.new_status)?,
        remarks: request.remarks,
        returns: request.returns,
    };

    let result = state.update_investment_status_handler().handle(cmd).await?;

    Ok(Json(StatusUpdatedResponse {
        investment: InvestmentResponse::from(&result.investment),
        change: StatusChangeResponse::from(&result.change),
    }))
}
