use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::angler::{AnglerResponse, CreateAnglerRequest, UpdateAnglerRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/anglers",
    responses(
        (status = 200, description = "List the club roster", body = Vec<AnglerResponse>)
    ),
    tag = "anglers"
)]
pub async fn list_anglers(State(db): State<Database>) -> Result<Json<Vec<AnglerResponse>>, WebError> {
    let anglers = services::list_anglers(db.pool()).await?;

    let response: Vec<AnglerResponse> = anglers.into_iter().map(AnglerResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/anglers/{id}",
    params(
        ("id" = Uuid, Path, description = "Angler ID")
    ),
    responses(
        (status = 200, description = "Angler found", body = AnglerResponse),
        (status = 404, description = "Angler not found")
    ),
    tag = "anglers"
)]
pub async fn get_angler(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let angler = services::get_angler(db.pool(), id).await?;

    Ok(Json(AnglerResponse::from(angler)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/anglers",
    request_body = CreateAnglerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Angler created successfully", body = AnglerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "anglers"
)]
pub async fn create_angler(
    State(db): State<Database>,
    Json(req): Json<CreateAnglerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let angler = services::create_angler(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(AnglerResponse::from(angler))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/anglers/{id}",
    params(
        ("id" = Uuid, Path, description = "Angler ID")
    ),
    request_body = UpdateAnglerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Angler updated successfully", body = AnglerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Angler not found")
    ),
    tag = "anglers"
)]
pub async fn update_angler(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAnglerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let angler = services::update_angler(db.pool(), id, &req).await?;

    Ok(Json(AnglerResponse::from(angler)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/anglers/{id}",
    params(
        ("id" = Uuid, Path, description = "Angler ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Angler deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Angler not found")
    ),
    tag = "anglers"
)]
pub async fn delete_angler(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_angler(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
