use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::rules::CreatePayoutScheduleRequest;
use crate::error::{Result, StorageError};
use crate::models::PayoutSchedule;

const PAYOUT_COLUMNS: &str = "payout_schedule_id, year, club, place_1, place_2, place_3, \
     charity, big_bass, paid_places, created_at";

/// Repository for per-year payout schedule operations
pub struct PayoutScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PayoutScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<PayoutSchedule>> {
        let schedules = sqlx::query_as::<_, PayoutSchedule>(&format!(
            "SELECT {PAYOUT_COLUMNS}
             FROM payout_schedules
             ORDER BY year DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(schedules)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<PayoutSchedule> {
        let schedule = sqlx::query_as::<_, PayoutSchedule>(&format!(
            "SELECT {PAYOUT_COLUMNS}
             FROM payout_schedules
             WHERE payout_schedule_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(schedule)
    }

    pub async fn find_by_year(&self, year: i32) -> Result<PayoutSchedule> {
        let schedule = sqlx::query_as::<_, PayoutSchedule>(&format!(
            "SELECT {PAYOUT_COLUMNS}
             FROM payout_schedules
             WHERE year = $1"
        ))
        .bind(year)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(schedule)
    }

    pub async fn create(&self, req: &CreatePayoutScheduleRequest) -> Result<PayoutSchedule> {
        let schedule = sqlx::query_as::<_, PayoutSchedule>(&format!(
            "INSERT INTO payout_schedules (payout_schedule_id, year, club, place_1,
                 place_2, place_3, charity, big_bass, paid_places)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PAYOUT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.year)
        .bind(req.club)
        .bind(req.place_1)
        .bind(req.place_2)
        .bind(req.place_3)
        .bind(req.charity)
        .bind(req.big_bass)
        .bind(req.paid_places)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(format!(
                        "payout schedule for {} already exists",
                        req.year
                    ));
                }
            }
            StorageError::from(e)
        })?;

        Ok(schedule)
    }
}
