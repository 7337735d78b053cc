use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::rules::{CreatePayoutScheduleRequest, CreateRuleSetRequest},
    models::{PayoutSchedule, RuleSet},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rules",
    responses(
        (status = 200, description = "List rule sets, newest season first", body = Vec<RuleSet>)
    ),
    tag = "rules"
)]
pub async fn list_rule_sets(State(db): State<Database>) -> Result<Json<Vec<RuleSet>>, WebError> {
    let rule_sets = services::list_rule_sets(db.pool()).await?;

    Ok(Json(rule_sets))
}

#[utoipa::path(
    get,
    path = "/api/rules/{year}",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Rule set for the season", body = RuleSet),
        (status = 404, description = "No rule set for this year")
    ),
    tag = "rules"
)]
pub async fn get_rule_set(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let rule_set = services::get_rule_set(db.pool(), year).await?;

    Ok(Json(rule_set).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rules",
    request_body = CreateRuleSetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Rule set created", body = RuleSet),
        (status = 400, description = "Offsets or limits out of range"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Rule set already exists for this year")
    ),
    tag = "rules"
)]
pub async fn create_rule_set(
    State(db): State<Database>,
    Json(req): Json<CreateRuleSetRequest>,
) -> Result<Response, WebError> {
    let rule_set = services::create_rule_set(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(rule_set)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/payout-schedules",
    responses(
        (status = 200, description = "List payout schedules, newest season first", body = Vec<PayoutSchedule>)
    ),
    tag = "rules"
)]
pub async fn list_payout_schedules(
    State(db): State<Database>,
) -> Result<Json<Vec<PayoutSchedule>>, WebError> {
    let schedules = services::list_payout_schedules(db.pool()).await?;

    Ok(Json(schedules))
}

#[utoipa::path(
    get,
    path = "/api/payout-schedules/{year}",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Payout schedule for the season", body = PayoutSchedule),
        (status = 404, description = "No payout schedule for this year")
    ),
    tag = "rules"
)]
pub async fn get_payout_schedule(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let schedule = services::get_payout_schedule(db.pool(), year).await?;

    Ok(Json(schedule).into_response())
}

#[utoipa::path(
    post,
    path = "/api/payout-schedules",
    request_body = CreatePayoutScheduleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Payout schedule created", body = PayoutSchedule),
        (status = 400, description = "Slices or paid places out of range"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Payout schedule already exists for this year")
    ),
    tag = "rules"
)]
pub async fn create_payout_schedule(
    State(db): State<Database>,
    Json(req): Json<CreatePayoutScheduleRequest>,
) -> Result<Response, WebError> {
    let schedule = services::create_payout_schedule(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(schedule)).into_response())
}
