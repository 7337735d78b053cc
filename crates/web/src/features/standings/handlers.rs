use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{AoyStanding, PayoutSummary, TournamentStandings},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/standings",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Placements and points recomputed and stored", body = TournamentStandings),
        (status = 400, description = "Points requested before placement"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found"),
        (status = 422, description = "Rule set or payout schedule missing")
    ),
    tag = "standings"
)]
pub async fn recompute_standings(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let standings = services::recompute_standings(db.pool(), id).await?;

    tracing::info!(tournament_id = %id, "recomputed standings");

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/standings",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Stored standings as last computed", body = TournamentStandings),
        (status = 404, description = "Tournament not found")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let standings = services::get_standings(db.pool(), id).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/payouts",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Pot totals for the tournament", body = PayoutSummary),
        (status = 404, description = "Tournament not found"),
        (status = 422, description = "No payout schedule configured")
    ),
    tag = "standings"
)]
pub async fn get_payouts(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let payouts = services::get_payouts(db.pool(), id).await?;

    Ok(Json(payouts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/awards/{year}/aoy",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Angler of the Year standings", body = Vec<AoyStanding>)
    ),
    tag = "awards"
)]
pub async fn get_angler_of_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let standings = services::get_angler_of_year(db.pool(), year).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/awards/{year}/heavy-stringer",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Heaviest single-tournament stringer of the season, if anyone weighed fish")
    ),
    tag = "awards"
)]
pub async fn get_heavy_stringer(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let winner = services::get_heavy_stringer(db.pool(), year).await?;

    Ok(Json(winner).into_response())
}

#[utoipa::path(
    get,
    path = "/api/awards/{year}/big-bass",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Heaviest qualifying bass of the season, if any")
    ),
    tag = "awards"
)]
pub async fn get_big_bass(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let winner = services::get_big_bass(db.pool(), year).await?;

    Ok(Json(winner).into_response())
}
