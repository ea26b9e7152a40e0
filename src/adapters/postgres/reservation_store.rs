//! PostgreSQL implementation of ReservationStore.
//!
//! The atomic insert runs the overlap check and the INSERT inside one
//! SERIALIZABLE transaction, so the database is the final arbiter of the
//! no-overlap invariant. A serialization failure on commit (SQLSTATE 40001)
//! means a competing reservation won the race and is reported as a
//! conflict, not as an infrastructure error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, ReservationId, ResourceId, TenantId, TimeRange, Timestamp,
};
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::ports::{InsertOutcome, ReservationStore};

/// SQLSTATE raised when a serializable transaction loses a race.
const SERIALIZATION_FAILURE: &str = "40001";

/// PostgreSQL implementation of the ReservationStore port.
pub struct PostgresReservationStore {
    pool: PgPool,
}

impl PostgresReservationStore {
    /// Creates a new store backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for reservation queries.
#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    id: Uuid,
    resource_id: Uuid,
    tenant_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReservationRow {
    fn into_domain(self) -> Result<Reservation, DomainError> {
        let status = ReservationStatus::parse(&self.status).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid status value: {}", self.status),
            )
        })?;
        let time_range = TimeRange::new(
            Timestamp::from_datetime(self.start_time),
            Timestamp::from_datetime(self.end_time),
        )
        .map_err(DomainError::from)?;

        Ok(Reservation {
            id: ReservationId::from_uuid(self.id),
            resource_id: ResourceId::from_uuid(self.resource_id),
            tenant_id: TenantId::from_uuid(self.tenant_id),
            time_range,
            status,
            note: self.note,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

fn db_error(err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, err.to_string())
}

fn is_serialization_failure(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(SERIALIZATION_FAILURE)
    )
}

#[async_trait]
impl ReservationStore for PostgresReservationStore {
    async fn insert_if_no_overlap(
        &self,
        reservation: Reservation,
    ) -> Result<InsertOutcome, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        // Re-check immediately before insert, inside the transaction.
        // Overlap predicate: existing.start < new.end AND new.start < existing.end.
        let existing: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM reservations
            WHERE resource_id = $1
              AND status <> 'cancelled'
              AND start_time < $3
              AND $2 < end_time
            LIMIT 1
            "#,
        )
        .bind(reservation.resource_id.as_uuid())
        .bind(reservation.time_range.start().as_datetime())
        .bind(reservation.time_range.end().as_datetime())
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error)?;

        if existing.is_some() {
            return Ok(InsertOutcome::Conflict);
        }

        let insert = sqlx::query(
            r#"
            INSERT INTO reservations
              (id, resource_id, tenant_id, start_time, end_time, status, note,
               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reservation.id.as_uuid())
        .bind(reservation.resource_id.as_uuid())
        .bind(reservation.tenant_id.as_uuid())
        .bind(reservation.time_range.start().as_datetime())
        .bind(reservation.time_range.end().as_datetime())
        .bind(reservation.status.as_str())
        .bind(&reservation.note)
        .bind(reservation.created_at.as_datetime())
        .bind(reservation.updated_at.as_datetime())
        .execute(&mut *tx)
        .await;

        if let Err(err) = insert {
            if is_serialization_failure(&err) {
                return Ok(InsertOutcome::Conflict);
            }
            return Err(db_error(err));
        }

        if let Err(err) = tx.commit().await {
            // The competing writer committed first.
            if is_serialization_failure(&err) {
                return Ok(InsertOutcome::Conflict);
            }
            return Err(db_error(err));
        }

        tracing::debug!(
            reservation_id = %reservation.id,
            resource_id = %reservation.resource_id,
            "reservation persisted"
        );
        Ok(InsertOutcome::Inserted(reservation))
    }

    async fn query_active_overlaps(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>, DomainError> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, resource_id, tenant_id, start_time, end_time, status,
                   note, created_at, updated_at
            FROM reservations
            WHERE resource_id = $1
              AND status <> 'cancelled'
              AND start_time < $3
              AND $2 < end_time
              AND ($4::uuid IS NULL OR id <> $4)
            ORDER BY start_time
            "#,
        )
        .bind(resource_id.as_uuid())
        .bind(range.start().as_datetime())
        .bind(range.end().as_datetime())
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(ReservationRow::into_domain).collect()
    }
}
