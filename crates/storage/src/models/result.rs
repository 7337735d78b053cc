use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One angler's outcome in one tournament.
///
/// `total_weight` is the stored weight with the dead-fish penalty already
/// deducted; the deduction happens once, when the row is created, and is
/// never re-derived on update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AnglerResult {
    pub result_id: Uuid,
    pub tournament_id: Uuid,
    pub angler_id: Uuid,

    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub num_fish_alive: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,

    /// Paid the entry fee but did not fish or weigh.
    pub buy_in: bool,
    pub disqualified: bool,
    /// Locked rows keep their stored place and points through recomputes.
    pub locked: bool,

    pub place_finish: Option<i32>,
    pub points: Option<i32>,

    pub created_at: NaiveDateTime,
}

