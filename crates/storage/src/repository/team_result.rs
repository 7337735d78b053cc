use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::standings::TeamLine;
use crate::error::{Result, StorageError};
use crate::models::TeamResult;
use crate::services::team::TeamFigures;

const TEAM_RESULT_COLUMNS: &str = "team_result_id, tournament_id, result_1_id, result_2_id, \
     team_name, num_fish, num_fish_dead, num_fish_alive, total_weight, penalty_weight, \
     big_bass_weight, buy_in, disqualified, place_finish, created_at";

/// Repository for team result database operations
pub struct TeamResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tournament_id: Uuid,
        result_1_id: Uuid,
        result_2_id: Option<Uuid>,
        team_name: &str,
        figures: &TeamFigures,
    ) -> Result<TeamResult> {
        let team = sqlx::query_as::<_, TeamResult>(&format!(
            "INSERT INTO team_results (team_result_id, tournament_id, result_1_id,
                 result_2_id, team_name, num_fish, num_fish_dead, num_fish_alive,
                 total_weight, penalty_weight, big_bass_weight, buy_in, disqualified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {TEAM_RESULT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(tournament_id)
        .bind(result_1_id)
        .bind(result_2_id)
        .bind(team_name)
        .bind(figures.num_fish)
        .bind(figures.num_fish_dead)
        .bind(figures.num_fish_alive)
        .bind(figures.total_weight)
        .bind(figures.penalty_weight)
        .bind(figures.big_bass_weight)
        .bind(figures.buy_in)
        .bind(figures.disqualified)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "result is already part of a team".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(team)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM team_results WHERE team_result_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Stored team standings lines for display, best place first.
    pub async fn list_lines(&self, tournament_id: Uuid) -> Result<Vec<TeamLine>> {
        let lines = sqlx::query_as::<_, TeamLine>(
            "SELECT team_result_id, team_name, num_fish, total_weight,
                    big_bass_weight, disqualified, place_finish
             FROM team_results
             WHERE tournament_id = $1
             ORDER BY place_finish NULLS LAST, total_weight DESC",
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }
}
