//! PostgreSQL implementation of InvestmentLedger.
//!
//! Status changes use a conditional `UPDATE ... WHERE status = $expected`
//! inside a transaction; the audit row is written in the same transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::foundation::{
    ClientId, DomainError, ErrorCode, InvestmentId, Money, Timestamp, TopicTag,
};
use crate::domain::investment::{InvestmentRecord, InvestmentStatus, StatusChange};
use crate::ports::{status_conflict, InvestmentLedger};

pub struct PostgresInvestmentLedger {
    pool: PgPool,
}

impl PostgresInvestmentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_history(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<StatusChange>>, DomainError> {
        let rows: Vec<StatusChangeRow> = sqlx::query_as(
            r#"
            SELECT investment_id, from_status, to_status, remarks, changed_at
            FROM investment_status_changes
            WHERE investment_id = ANY($1)
            ORDER BY changed_at, id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load status history: {}", e)))?;

        let mut history: HashMap<Uuid, Vec<StatusChange>> = HashMap::new();
        for row in rows {
            let investment_id = row.investment_id;
            history
                .entry(investment_id)
                .or_default()
                .push(StatusChange::try_from(row)?);
        }
        Ok(history)
    }
}

/// Database row representation of an investment.
#[derive(Debug, sqlx::FromRow)]
struct InvestmentRow {
    id: Uuid,
    client_id: String,
    investment_type: String,
    amount_minor: i64,
    start_date: DateTime<Utc>,
    status: String,
    returns_minor: Option<i64>,
    source: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InvestmentRow {
    fn into_record(self, history: Vec<StatusChange>) -> Result<InvestmentRecord, DomainError> {
        Ok(InvestmentRecord {
            id: InvestmentId::from_uuid(self.id),
            client_id: ClientId::new(self.client_id).map_err(corrupt)?,
            investment_type: TopicTag::new(&self.investment_type).map_err(corrupt)?,
            amount: Money::from_minor(self.amount_minor),
            start_date: Timestamp::from_datetime(self.start_date),
            status: parse_status(&self.status)?,
            returns: self.returns_minor.map(Money::from_minor),
            source: self.source,
            history,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatusChangeRow {
    investment_id: Uuid,
    from_status: String,
    to_status: String,
    remarks: Option<String>,
    changed_at: DateTime<Utc>,
}

impl TryFrom<StatusChangeRow> for StatusChange {
    type Error = DomainError;

    fn try_from(row: StatusChangeRow) -> Result<Self, Self::Error> {
        Ok(StatusChange {
            from: parse_status(&row.from_status)?,
            to: parse_status(&row.to_status)?,
            remarks: row.remarks,
            changed_at: Timestamp::from_datetime(row.changed_at),
        })
    }
}

fn parse_status(s: &str) -> Result<InvestmentStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "active" => Ok(InvestmentStatus::Active),
        "matured" => Ok(InvestmentStatus::Matured),
        "withdrawn" => Ok(InvestmentStatus::Withdrawn),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Invalid investment row: {}", err))
}

fn not_found(id: &InvestmentId) -> DomainError {
    DomainError::new(
        ErrorCode::InvestmentNotFound,
        format!("Investment not found: {}", id),
    )
}

async fn insert_change(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    id: &InvestmentId,
    change: &StatusChange,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO investment_status_changes (investment_id, from_status, to_status, remarks, changed_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id.as_uuid())
    .bind(change.from.as_str())
    .bind(change.to.as_str())
    .bind(&change.remarks)
    .bind(change.changed_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::database(format!("Failed to record status change: {}", e)))?;

    Ok(())
}

const SELECT_INVESTMENT: &str = r#"
    SELECT id, client_id, investment_type, amount_minor, start_date, status,
           returns_minor, source, created_at, updated_at
    FROM investments
"#;

#[async_trait]
impl InvestmentLedger for PostgresInvestmentLedger {
    async fn insert(&self, record: &InvestmentRecord) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO investments (
                id, client_id, investment_type, amount_minor, start_date, status,
                returns_minor, source, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.client_id.as_str())
        .bind(record.investment_type.as_str())
        .bind(record.amount.minor())
        .bind(record.start_date.as_datetime())
        .bind(record.status.as_str())
        .bind(record.returns.map(|r| r.minor()))
        .bind(&record.source)
        .bind(record.created_at.as_datetime())
        .bind(record.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("investments_pkey") {
                    return DomainError::new(
                        ErrorCode::ValidationFailed,
                        format!("Investment {} already exists", record.id),
                    );
                }
            }
            DomainError::database(format!("Failed to insert investment: {}", e))
        })?;

        for change in &record.history {
            insert_change(&mut tx, &record.id, change).await?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &InvestmentId) -> Result<Option<InvestmentRecord>, DomainError> {
        let row: Option<InvestmentRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_INVESTMENT))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to fetch investment: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut history = self.load_history(&[row.id]).await?;
        let changes = history.remove(&row.id).unwrap_or_default();
        row.into_record(changes).map(Some)
    }

    async fn list_for_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<InvestmentRecord>, DomainError> {
        let rows: Vec<InvestmentRow> = sqlx::query_as(&format!(
            "{} WHERE client_id = $1 ORDER BY created_at, id",
            SELECT_INVESTMENT
        ))
        .bind(client_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list investments: {}", e)))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut history = self.load_history(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let changes = history.remove(&row.id).unwrap_or_default();
                row.into_record(changes)
            })
            .collect()
    }

    async fn compare_and_set_status(
        &self,
        record: &InvestmentRecord,
        expected: InvestmentStatus,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            UPDATE investments SET
                status = $2,
                returns_minor = $3,
                updated_at = $4
            WHERE id = $1 AND status = $5
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.status.as_str())
        .bind(record.returns.map(|r| r.minor()))
        .bind(record.updated_at.as_datetime())
        .bind(expected.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update investment status: {}", e)))?;

        if result.rows_affected() == 0 {
            let actual: Option<(String,)> =
                sqlx::query_as("SELECT status FROM investments WHERE id = $1")
                    .bind(record.id.as_uuid())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| {
                        DomainError::database(format!("Failed to read investment status: {}", e))
                    })?;

            return match actual {
                None => Err(not_found(&record.id)),
                Some((status,)) => Err(status_conflict(&record.id, expected, parse_status(&status)?)),
            };
        }

        if let Some(change) = record.history.last() {
            insert_change(&mut tx, &record.id, change).await?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}
