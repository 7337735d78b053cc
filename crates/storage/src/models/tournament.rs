use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub lake: String,
    pub date: NaiveDate,

    /// Team event: results are entered per angler and aggregated into
    /// two-angler (or solo) team results, which get their own placement.
    pub team: bool,
    /// Whether finishes here feed the season points race.
    pub points_count: bool,
    /// Off-the-books event; never feeds season awards.
    pub paper: bool,
    /// Closed for editing once the weigh-in is finalized.
    pub complete: bool,

    pub rule_set_id: Uuid,
    pub payout_schedule_id: Uuid,

    pub created_at: NaiveDateTime,
}
