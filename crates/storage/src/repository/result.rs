use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::result::UpdateResultRequest;
use crate::dto::standings::ResultLine;
use crate::error::{Result, StorageError};
use crate::models::AnglerResult;
use crate::services::weigh_in::CatchFigures;

const RESULT_COLUMNS: &str = "result_id, tournament_id, angler_id, num_fish, num_fish_dead, \
     num_fish_alive, total_weight, penalty_weight, big_bass_weight, buy_in, disqualified, \
     locked, place_finish, points, created_at";

/// Repository for individual result database operations
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<AnglerResult> {
        let result = sqlx::query_as::<_, AnglerResult>(&format!(
            "SELECT {RESULT_COLUMNS}
             FROM results
             WHERE result_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    pub async fn exists_for_angler(&self, tournament_id: Uuid, angler_id: Uuid) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM results WHERE tournament_id = $1 AND angler_id = $2",
        )
        .bind(tournament_id)
        .bind(angler_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Insert a result with its figures already derived. The unique index
    /// on (tournament_id, angler_id) backstops the duplicate check.
    pub async fn create(
        &self,
        tournament_id: Uuid,
        angler_id: Uuid,
        figures: &CatchFigures,
        buy_in: bool,
        disqualified: bool,
    ) -> Result<AnglerResult> {
        let result = sqlx::query_as::<_, AnglerResult>(&format!(
            "INSERT INTO results (result_id, tournament_id, angler_id, num_fish,
                 num_fish_dead, num_fish_alive, total_weight, penalty_weight,
                 big_bass_weight, buy_in, disqualified, locked)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, FALSE)
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(tournament_id)
        .bind(angler_id)
        .bind(figures.num_fish)
        .bind(figures.num_fish_dead)
        .bind(figures.num_fish_alive)
        .bind(figures.total_weight)
        .bind(figures.penalty_weight)
        .bind(figures.big_bass_weight)
        .bind(buy_in)
        .bind(disqualified)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::DuplicateResult
            } else {
                err
            }
        })?;

        Ok(result)
    }

    /// Write corrected fields back verbatim. The stored total weight is
    /// whatever the caller supplies; the dead-fish penalty is not
    /// re-derived here.
    pub async fn update(&self, id: Uuid, req: &UpdateResultRequest) -> Result<AnglerResult> {
        let result = sqlx::query_as::<_, AnglerResult>(&format!(
            "UPDATE results
             SET num_fish = $2, num_fish_dead = $3, total_weight = $4,
                 big_bass_weight = $5, buy_in = $6, disqualified = $7, locked = $8
             WHERE result_id = $1
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(id)
        .bind(req.num_fish)
        .bind(req.num_fish_dead)
        .bind(req.total_weight)
        .bind(req.big_bass_weight)
        .bind(req.buy_in)
        .bind(req.disqualified)
        .bind(req.locked)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE result_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Everyone who paid an entry, buy-ins included.
    pub async fn count_for_tournament(&self, tournament_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results WHERE tournament_id = $1")
            .bind(tournament_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Best single fish weighed by a member in this tournament, if any.
    pub async fn best_member_big_bass(&self, tournament_id: Uuid) -> Result<Option<Decimal>> {
        let best: Option<Decimal> = sqlx::query_scalar(
            "SELECT MAX(r.big_bass_weight)
             FROM results r
             INNER JOIN anglers a ON r.angler_id = a.angler_id
             WHERE r.tournament_id = $1 AND a.member AND NOT r.disqualified",
        )
        .bind(tournament_id)
        .fetch_one(self.pool)
        .await?;

        Ok(best)
    }

    /// Stored standings lines for display, best place first.
    pub async fn list_lines(&self, tournament_id: Uuid) -> Result<Vec<ResultLine>> {
        #[derive(sqlx::FromRow)]
        struct Row {
            result_id: Uuid,
            angler_id: Uuid,
            first_name: String,
            last_name: String,
            member: bool,
            num_fish: i16,
            total_weight: Decimal,
            big_bass_weight: Decimal,
            buy_in: bool,
            disqualified: bool,
            place_finish: Option<i32>,
            points: Option<i32>,
        }

        let rows = sqlx::query_as::<_, Row>(
            "SELECT r.result_id, r.angler_id, a.first_name, a.last_name, a.member,
                    r.num_fish, r.total_weight, r.big_bass_weight, r.buy_in,
                    r.disqualified, r.place_finish, r.points
             FROM results r
             INNER JOIN anglers a ON r.angler_id = a.angler_id
             WHERE r.tournament_id = $1
             ORDER BY r.place_finish NULLS LAST, r.total_weight DESC",
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ResultLine {
                result_id: row.result_id,
                angler_id: row.angler_id,
                angler_name: crate::models::AnglerName::new(&row.first_name, &row.last_name)
                    .display(),
                member: row.member,
                num_fish: row.num_fish,
                total_weight: row.total_weight,
                big_bass_weight: row.big_bass_weight,
                buy_in: row.buy_in,
                disqualified: row.disqualified,
                place_finish: row.place_finish,
                points: row.points,
            })
            .collect())
    }
}
