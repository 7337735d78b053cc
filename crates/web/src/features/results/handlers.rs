use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::result::{
        CreateResultRequest, CreateTeamResultRequest, ResultResponse, TeamResultResponse,
        UpdateResultRequest,
    },
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/results",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = CreateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Weigh-in recorded", body = ResultResponse),
        (status = 400, description = "Weigh-in violates the tournament's rules"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Angler already has a result in this tournament"),
        (status = 422, description = "No rule set configured for the tournament")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    let result = services::enter_result(db.pool(), id, &req).await?;

    tracing::info!(
        tournament_id = %id,
        angler_id = %req.angler_id,
        "recorded weigh-in"
    );

    Ok((StatusCode::CREATED, Json(ResultResponse::from(result))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    request_body = UpdateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result corrected; stored weight is taken as supplied", body = ResultResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    let result = services::update_result(db.pool(), id, &req).await?;

    Ok(Json(ResultResponse::from(result)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/teams",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = CreateTeamResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team result created from the member results", body = TeamResultResponse),
        (status = 400, description = "Not a team tournament, or results belong elsewhere"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament or result not found"),
        (status = 409, description = "Result is already part of a team")
    ),
    tag = "results"
)]
pub async fn create_team_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateTeamResultRequest>,
) -> Result<Response, WebError> {
    let team = services::enter_team_result(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResultResponse::from(team))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team result ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team result deleted; member results are untouched"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team result not found")
    ),
    tag = "results"
)]
pub async fn delete_team_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_team_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
