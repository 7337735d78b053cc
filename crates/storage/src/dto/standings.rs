use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Pot totals for one tournament.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutSummary {
    pub club: Decimal,
    pub total: Decimal,
    pub place_1: Decimal,
    pub place_2: Decimal,
    pub place_3: Decimal,
    pub charity: Decimal,
    pub big_bass: Decimal,
    /// Nobody's bass made the minimum; the pot rolls to the next event.
    pub big_bass_carry_over: bool,
}

/// One line of the Angler of the Year race.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AoyStanding {
    pub angler_id: Uuid,
    pub angler_name: String,
    pub total_points: i64,
    pub total_weight: Decimal,
    pub total_fish: i64,
    pub events: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeavyStringer {
    pub angler_id: Uuid,
    pub angler_name: String,
    pub weight: Decimal,
    pub num_fish: i16,
    pub tournament_id: Uuid,
    pub tournament_name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BigBassWinner {
    pub angler_id: Uuid,
    pub angler_name: String,
    pub weight: Decimal,
    pub tournament_id: Uuid,
    pub tournament_name: String,
    pub date: NaiveDate,
}

/// Stored placement and points for one tournament, as displayed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentStandings {
    pub tournament_id: Uuid,
    pub results: Vec<ResultLine>,
    pub teams: Vec<TeamLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultLine {
    pub result_id: Uuid,
    pub angler_id: Uuid,
    pub angler_name: String,
    pub member: bool,
    pub num_fish: i16,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
    pub place_finish: Option<i32>,
    pub points: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TeamLine {
    pub team_result_id: Uuid,
    pub team_name: String,
    pub num_fish: i16,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub disqualified: bool,
    pub place_finish: Option<i32>,
}
