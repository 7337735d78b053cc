use sqlx::PgPool;
use storage::{
    dto::standings::{
        AoyStanding, BigBassWinner, HeavyStringer, PayoutSummary, TournamentStandings,
    },
    error::Result,
    services::standings,
};
use uuid::Uuid;

/// Recompute placements and points for a tournament, then read back the
/// stored standings. This is the write path; viewing standings never
/// recomputes anything.
pub async fn recompute_standings(pool: &PgPool, tournament_id: Uuid) -> Result<TournamentStandings> {
    standings::compute_standings(pool, tournament_id).await?;
    standings::compute_points(pool, tournament_id).await?;
    standings::get_standings(pool, tournament_id).await
}

pub async fn get_standings(pool: &PgPool, tournament_id: Uuid) -> Result<TournamentStandings> {
    standings::get_standings(pool, tournament_id).await
}

pub async fn get_payouts(pool: &PgPool, tournament_id: Uuid) -> Result<PayoutSummary> {
    standings::get_payouts(pool, tournament_id).await
}

pub async fn get_angler_of_year(pool: &PgPool, year: i32) -> Result<Vec<AoyStanding>> {
    standings::get_angler_of_year(pool, year).await
}

pub async fn get_heavy_stringer(pool: &PgPool, year: i32) -> Result<Option<HeavyStringer>> {
    standings::get_heavy_stringer(pool, year).await
}

pub async fn get_big_bass(pool: &PgPool, year: i32) -> Result<Option<BigBassWinner>> {
    standings::get_big_bass(pool, year).await
}
