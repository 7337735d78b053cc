use sqlx::PgPool;

use crate::error::Result;
use crate::services::awards::SeasonResultRow;

/// Repository for season-wide award queries
pub struct SeasonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Member results from every complete, points-counting, on-the-books
    /// tournament of the year. Guests and paper events never feed the
    /// season awards.
    pub async fn member_results(&self, year: i32) -> Result<Vec<SeasonResultRow>> {
        let rows = sqlx::query_as::<_, SeasonResultRow>(
            "SELECT r.result_id, r.angler_id, a.first_name, a.last_name,
                    t.tournament_id, t.name AS tournament_name, t.date,
                    r.num_fish, r.total_weight, r.big_bass_weight, r.points
             FROM results r
             INNER JOIN anglers a ON r.angler_id = a.angler_id
             INNER JOIN tournaments t ON r.tournament_id = t.tournament_id
             WHERE a.member
               AND t.complete
               AND t.points_count
               AND NOT t.paper
               AND EXTRACT(YEAR FROM t.date) = $1
             ORDER BY t.date, r.created_at",
        )
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
