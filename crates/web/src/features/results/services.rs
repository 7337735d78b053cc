use sqlx::PgPool;
use storage::{
    dto::result::{CreateResultRequest, CreateTeamResultRequest, UpdateResultRequest},
    error::Result,
    models::{AnglerResult, TeamResult},
    repository::result::ResultRepository,
    repository::team_result::TeamResultRepository,
    services::{team, weigh_in},
};
use uuid::Uuid;

pub async fn enter_result(
    pool: &PgPool,
    tournament_id: Uuid,
    req: &CreateResultRequest,
) -> Result<AnglerResult> {
    weigh_in::enter_result(pool, tournament_id, req.angler_id, &req.to_weigh_in()).await
}

pub async fn update_result(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateResultRequest,
) -> Result<AnglerResult> {
    ResultRepository::new(pool).update(id, req).await
}

pub async fn delete_result(pool: &PgPool, id: Uuid) -> Result<()> {
    ResultRepository::new(pool).delete(id).await
}

pub async fn enter_team_result(
    pool: &PgPool,
    tournament_id: Uuid,
    req: &CreateTeamResultRequest,
) -> Result<TeamResult> {
    team::enter_team_result(pool, tournament_id, req.result_1_id, req.result_2_id).await
}

pub async fn delete_team_result(pool: &PgPool, id: Uuid) -> Result<()> {
    TeamResultRepository::new(pool).delete(id).await
}
