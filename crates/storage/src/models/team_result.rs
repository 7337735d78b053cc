use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Combined outcome of a two-angler (or solo) team in a team tournament.
///
/// The catch figures are derived from the member results at creation time;
/// see `services::team` for the aggregation rules.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamResult {
    pub team_result_id: Uuid,
    pub tournament_id: Uuid,
    pub result_1_id: Uuid,
    pub result_2_id: Option<Uuid>,

    pub team_name: String,

    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub num_fish_alive: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,

    /// Both members excluded themselves (buy-in) from the weigh-in.
    pub buy_in: bool,
    pub disqualified: bool,

    pub place_finish: Option<i32>,

    pub created_at: NaiveDateTime,
}
