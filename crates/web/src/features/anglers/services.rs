use sqlx::PgPool;
use storage::{
    dto::angler::{CreateAnglerRequest, UpdateAnglerRequest},
    error::Result,
    models::Angler,
    repository::angler::AnglerRepository,
};
use uuid::Uuid;

pub async fn list_anglers(pool: &PgPool) -> Result<Vec<Angler>> {
    AnglerRepository::new(pool).list().await
}

pub async fn get_angler(pool: &PgPool, id: Uuid) -> Result<Angler> {
    AnglerRepository::new(pool).find_by_id(id).await
}

pub async fn create_angler(pool: &PgPool, req: &CreateAnglerRequest) -> Result<Angler> {
    AnglerRepository::new(pool).create(req).await
}

pub async fn update_angler(pool: &PgPool, id: Uuid, req: &UpdateAnglerRequest) -> Result<Angler> {
    AnglerRepository::new(pool).update(id, req).await
}

pub async fn delete_angler(pool: &PgPool, id: Uuid) -> Result<()> {
    AnglerRepository::new(pool).delete(id).await
}
