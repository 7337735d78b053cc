use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::error::{Result, StorageError};
use crate::models::Tournament;

const TOURNAMENT_COLUMNS: &str = "tournament_id, name, lake, date, team, points_count, paper, \
     complete, rule_set_id, payout_schedule_id, created_at";

/// Repository for tournament database operations
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tournaments, most recent first
    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS}
             FROM tournaments
             ORDER BY date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {TOURNAMENT_COLUMNS}
             FROM tournaments
             WHERE tournament_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Create a tournament against an already-resolved rule set and payout
    /// schedule; the caller resolves both from the event year first.
    pub async fn create(
        &self,
        req: &CreateTournamentRequest,
        rule_set_id: Uuid,
        payout_schedule_id: Uuid,
    ) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "INSERT INTO tournaments (tournament_id, name, lake, date, team,
                 points_count, paper, complete, rule_set_id, payout_schedule_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8, $9)
             RETURNING {TOURNAMENT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.lake)
        .bind(req.date)
        .bind(req.team)
        .bind(req.points_count)
        .bind(req.paper)
        .bind(rule_set_id)
        .bind(payout_schedule_id)
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateTournamentRequest) -> Result<Tournament> {
        let current = self.find_by_id(id).await?;

        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "UPDATE tournaments
             SET name = $2, lake = $3, date = $4, team = $5, points_count = $6,
                 paper = $7, complete = $8
             WHERE tournament_id = $1
             RETURNING {TOURNAMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name.as_ref().unwrap_or(&current.name))
        .bind(req.lake.as_ref().unwrap_or(&current.lake))
        .bind(req.date.unwrap_or(current.date))
        .bind(req.team.unwrap_or(current.team))
        .bind(req.points_count.unwrap_or(current.points_count))
        .bind(req.paper.unwrap_or(current.paper))
        .bind(req.complete.unwrap_or(current.complete))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Delete a tournament; its results and team results go with it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
