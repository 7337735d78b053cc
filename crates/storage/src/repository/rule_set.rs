use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::rules::CreateRuleSetRequest;
use crate::error::{Result, StorageError};
use crate::models::RuleSet;

const RULE_SET_COLUMNS: &str = "rule_set_id, year, fish_limit, dead_fish_penalty, max_points, \
     zero_points_offset, buy_in_points_offset, disqualified_points_offset, created_at";

/// Repository for per-year rule set operations
pub struct RuleSetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RuleSetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RuleSet>> {
        let rule_sets = sqlx::query_as::<_, RuleSet>(&format!(
            "SELECT {RULE_SET_COLUMNS}
             FROM rule_sets
             ORDER BY year DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rule_sets)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<RuleSet> {
        let rule_set = sqlx::query_as::<_, RuleSet>(&format!(
            "SELECT {RULE_SET_COLUMNS}
             FROM rule_sets
             WHERE rule_set_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(rule_set)
    }

    pub async fn find_by_year(&self, year: i32) -> Result<RuleSet> {
        let rule_set = sqlx::query_as::<_, RuleSet>(&format!(
            "SELECT {RULE_SET_COLUMNS}
             FROM rule_sets
             WHERE year = $1"
        ))
        .bind(year)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(rule_set)
    }

    pub async fn create(&self, req: &CreateRuleSetRequest) -> Result<RuleSet> {
        let rule_set = sqlx::query_as::<_, RuleSet>(&format!(
            "INSERT INTO rule_sets (rule_set_id, year, fish_limit, dead_fish_penalty,
                 max_points, zero_points_offset, buy_in_points_offset,
                 disqualified_points_offset)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {RULE_SET_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.year)
        .bind(req.fish_limit)
        .bind(req.dead_fish_penalty)
        .bind(req.max_points)
        .bind(req.zero_points_offset)
        .bind(req.buy_in_points_offset)
        .bind(req.disqualified_points_offset)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(format!(
                        "rule set for {} already exists",
                        req.year
                    ));
                }
            }
            StorageError::from(e)
        })?;

        Ok(rule_set)
    }
}
