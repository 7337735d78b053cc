use chrono::Datelike;
use sqlx::PgPool;
use storage::{
    dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest},
    error::{Result, StorageError},
    models::Tournament,
    repository::payout_schedule::PayoutScheduleRepository,
    repository::rule_set::RuleSetRepository,
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

pub async fn list_tournaments(pool: &PgPool) -> Result<Vec<Tournament>> {
    TournamentRepository::new(pool).list().await
}

pub async fn get_tournament(pool: &PgPool, id: Uuid) -> Result<Tournament> {
    TournamentRepository::new(pool).find_by_id(id).await
}

/// Schedule a tournament. The event year's rule set and payout schedule
/// must already exist; nothing is conjured on the fly.
pub async fn create_tournament(pool: &PgPool, req: &CreateTournamentRequest) -> Result<Tournament> {
    let year = req.date.year();

    let rules = RuleSetRepository::new(pool)
        .find_by_year(year)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => StorageError::MissingConfiguration(format!(
                "no rule set configured for {year}"
            )),
            other => other,
        })?;

    let schedule = PayoutScheduleRepository::new(pool)
        .find_by_year(year)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => StorageError::MissingConfiguration(format!(
                "no payout schedule configured for {year}"
            )),
            other => other,
        })?;

    TournamentRepository::new(pool)
        .create(req, rules.rule_set_id, schedule.payout_schedule_id)
        .await
}

pub async fn update_tournament(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateTournamentRequest,
) -> Result<Tournament> {
    TournamentRepository::new(pool).update(id, req).await
}

pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> Result<()> {
    TournamentRepository::new(pool).delete(id).await
}
