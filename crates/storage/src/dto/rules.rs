use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a season's rule set.
///
/// Defaults mirror the club's standing rules; offsets and limits are
/// checked by `RuleSet::validate` before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRuleSetRequest {
    pub year: i32,

    #[serde(default = "default_fish_limit")]
    pub fish_limit: i16,

    #[serde(default = "default_dead_fish_penalty")]
    pub dead_fish_penalty: Decimal,

    #[serde(default = "default_max_points")]
    pub max_points: i32,

    #[serde(default = "default_zero_points_offset")]
    pub zero_points_offset: i32,

    #[serde(default = "default_buy_in_points_offset")]
    pub buy_in_points_offset: i32,

    #[serde(default = "default_disqualified_points_offset")]
    pub disqualified_points_offset: i32,
}

fn default_fish_limit() -> i16 {
    5
}

fn default_dead_fish_penalty() -> Decimal {
    dec!(0.25)
}

fn default_max_points() -> i32 {
    100
}

fn default_zero_points_offset() -> i32 {
    2
}

fn default_buy_in_points_offset() -> i32 {
    4
}

fn default_disqualified_points_offset() -> i32 {
    3
}

/// Request payload for creating a season's payout schedule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePayoutScheduleRequest {
    pub year: i32,

    pub club: Decimal,
    pub place_1: Decimal,
    pub place_2: Decimal,
    pub place_3: Decimal,
    pub charity: Decimal,
    pub big_bass: Decimal,

    #[serde(default = "default_paid_places")]
    pub paid_places: i16,
}

fn default_paid_places() -> i16 {
    3
}
