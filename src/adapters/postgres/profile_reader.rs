//! PostgreSQL implementation of ProfileReader.
//!
//! Profiles are owned by the onboarding service; this adapter only reads the
//! `clients` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, Timestamp, TopicTag};
use crate::domain::profile::{ClientProfile, RiskClassification};
use crate::ports::ProfileReader;

/// PostgreSQL implementation of the ProfileReader port.
pub struct PostgresProfileReader {
    pool: PgPool,
}

impl PostgresProfileReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a client profile.
#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: String,
    name: String,
    phone: String,
    language: String,
    age: Option<i32>,
    gender: Option<String>,
    income: Option<f64>,
    goals: Vec<String>,
    risk_tolerance: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for ClientProfile {
    type Error = DomainError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let id = ClientId::new(row.id).map_err(corrupt)?;
        let goals = TopicTag::parse_all(row.goals.iter()).map_err(corrupt)?;
        let risk_tolerance = row.risk_tolerance.as_deref().map(parse_risk).transpose()?;

        Ok(ClientProfile {
            id,
            name: row.name,
            phone: row.phone,
            language: row.language,
            age: row.age.and_then(|a| u32::try_from(a).ok()),
            gender: row.gender,
            income: row.income,
            goals,
            risk_tolerance,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_risk(s: &str) -> Result<RiskClassification, DomainError> {
    match s.to_lowercase().as_str() {
        "risk_seeking" => Ok(RiskClassification::RiskSeeking),
        "risk_neutral" => Ok(RiskClassification::RiskNeutral),
        "risk_averse" => Ok(RiskClassification::RiskAverse),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid risk_tolerance value: {}", s),
        )),
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Invalid client row: {}", err))
}

#[async_trait]
impl ProfileReader for PostgresProfileReader {
    async fn find_by_id(&self, client_id: &ClientId) -> Result<Option<ClientProfile>, DomainError> {
        let row: Option<ClientRow> = sqlx::query_as(
            r#"
            SELECT id, name, phone, language, age, gender, income, goals,
                   risk_tolerance, created_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(client_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch client: {}", e)))?;

        row.map(ClientProfile::try_from).transpose()
    }
}
