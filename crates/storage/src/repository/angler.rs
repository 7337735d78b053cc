use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::angler::{CreateAnglerRequest, UpdateAnglerRequest};
use crate::error::{Result, StorageError};
use crate::models::Angler;

const ANGLER_COLUMNS: &str = "angler_id, first_name, last_name, member, email, created_at";

/// Repository for roster database operations
pub struct AnglerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnglerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full roster, members first, then by name
    pub async fn list(&self) -> Result<Vec<Angler>> {
        let anglers = sqlx::query_as::<_, Angler>(&format!(
            "SELECT {ANGLER_COLUMNS}
             FROM anglers
             ORDER BY member DESC, last_name, first_name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(anglers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Angler> {
        let angler = sqlx::query_as::<_, Angler>(&format!(
            "SELECT {ANGLER_COLUMNS}
             FROM anglers
             WHERE angler_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(angler)
    }

    pub async fn create(&self, req: &CreateAnglerRequest) -> Result<Angler> {
        let angler = sqlx::query_as::<_, Angler>(&format!(
            "INSERT INTO anglers (angler_id, first_name, last_name, member, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ANGLER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.member)
        .bind(&req.email)
        .fetch_one(self.pool)
        .await?;

        Ok(angler)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateAnglerRequest) -> Result<Angler> {
        let current = self.find_by_id(id).await?;

        let angler = sqlx::query_as::<_, Angler>(&format!(
            "UPDATE anglers
             SET first_name = $2, last_name = $3, member = $4, email = $5
             WHERE angler_id = $1
             RETURNING {ANGLER_COLUMNS}"
        ))
        .bind(id)
        .bind(req.first_name.as_ref().unwrap_or(&current.first_name))
        .bind(req.last_name.as_ref().unwrap_or(&current.last_name))
        .bind(req.member.unwrap_or(current.member))
        .bind(req.email.clone().or(current.email))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(angler)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM anglers WHERE angler_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
