//! Data Transfer Objects for investment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::investment::{InvestmentRecord, InvestmentSummary, StatusChange};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/clients/:client_id/investments
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateInvestmentRequest {
    pub investment_type: String,
    /// Principal in major currency units.
    pub amount: f64,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub returns: Option<f64>,
}

/// Request body for PATCH /api/investments/:investment_id/status
///
/// Statuses are plain strings so unknown values surface as validation
/// errors rather than body rejections.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateStatusRequest {
    pub new_status: String,
    /// Status the caller last observed; a stale value is a conflict.
    pub expected_status: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub returns: Option<f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeResponse {
    pub from: String,
    pub to: String,
    pub remarks: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl From<&StatusChange> for StatusChangeResponse {
    fn from(change: &StatusChange) -> Self {
        Self {
            from: change.from.to_string(),
            to: change.to.to_string(),
            remarks: change.remarks.clone(),
            changed_at: *change.changed_at.as_datetime(),
        }
    }
}

/// Investment record view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentResponse {
    pub id: String,
    pub client_id: String,
    pub investment_type: String,
    pub amount: f64,
    pub start_date: DateTime<Utc>,
    pub status: String,
    pub returns: Option<f64>,
    pub source: String,
    pub history: Vec<StatusChangeResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&InvestmentRecord> for InvestmentResponse {
    fn from(record: &InvestmentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            client_id: record.client_id.to_string(),
            investment_type: record.investment_type.to_string(),
            amount: record.amount.as_major(),
            start_date: *record.start_date.as_datetime(),
            status: record.status.to_string(),
            returns: record.returns.map(|r| r.as_major()),
            source: record.source.clone(),
            history: record.history.iter().map(StatusChangeResponse::from).collect(),
            created_at: *record.created_at.as_datetime(),
            updated_at: *record.updated_at.as_datetime(),
        }
    }
}

/// Response for PATCH /api/investments/:investment_id/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdatedResponse {
    pub investment: InvestmentResponse,
    pub change: StatusChangeResponse,
}

/// Response for GET /api/clients/:client_id/investments/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentSummaryResponse {
    pub active: u32,
    pub matured: u32,
    pub withdrawn: u32,
    pub total_invested: f64,
    pub total_returns: f64,
    pub average_return_rate: f64,
    pub investments: Vec<InvestmentResponse>,
}

impl InvestmentSummaryResponse {
    pub fn new(summary: &InvestmentSummary, investments: &[InvestmentRecord]) -> Self {
        Self {
            active: summary.active,
            matured: summary.matured,
            withdrawn: summary.withdrawn,
            total_invested: summary.total_invested.as_major(),
            total_returns: summary.total_returns.as_major(),
            average_return_rate: summary.average_return_rate,
            investments: investments.iter().map(InvestmentResponse::from).collect(),
        }
    }
}
