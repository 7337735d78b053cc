use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Club scoring rules for one calendar year.
///
/// Every tournament references the rule set of its year; rule sets are
/// shared, never owned. Editing a rule set that already has results behind
/// it changes historical points on the next recompute, so rule sets are
/// created once per season and left alone.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RuleSet {
    pub rule_set_id: Uuid,
    pub year: i32,

    /// Max fish counted per angler per tournament.
    pub fish_limit: i16,
    /// Weight deducted per fish that died before weigh-in, in pounds.
    pub dead_fish_penalty: Decimal,

    /// Points awarded to first place.
    pub max_points: i32,
    /// How far below the running points counter a zero-catch lands.
    pub zero_points_offset: i32,
    /// How far below the running points counter a buy-in lands.
    pub buy_in_points_offset: i32,
    /// How far below the running points counter a disqualification lands.
    pub disqualified_points_offset: i32,

    pub created_at: NaiveDateTime,
}

impl RuleSet {
    /// Standard club rules for a season: 5-fish limit, quarter-pound dead
    /// fish penalty, 100 points for first.
    pub fn with_defaults(year: i32) -> Self {
        Self {
            rule_set_id: Uuid::new_v4(),
            year,
            fish_limit: 5,
            dead_fish_penalty: dec!(0.25),
            max_points: 100,
            zero_points_offset: 2,
            buy_in_points_offset: 4,
            disqualified_points_offset: 3,
            created_at: NaiveDateTime::default(),
        }
    }

    /// Offsets and limits must be sane before a rule set is persisted.
    pub fn validate(&self) -> Result<(), String> {
        if self.fish_limit < 1 {
            return Err("fish_limit must be at least 1".to_string());
        }
        if self.dead_fish_penalty < Decimal::ZERO {
            return Err("dead_fish_penalty must not be negative".to_string());
        }
        if self.max_points < 1 {
            return Err("max_points must be at least 1".to_string());
        }
        if self.zero_points_offset < 0
            || self.buy_in_points_offset < 0
            || self.disqualified_points_offset < 0
        {
            return Err("points offsets must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RuleSet::with_defaults(2026).validate().is_ok());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let mut rules = RuleSet::with_defaults(2026);
        rules.zero_points_offset = -1;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_zero_fish_limit_rejected() {
        let mut rules = RuleSet::with_defaults(2026);
        rules.fish_limit = 0;
        assert!(rules.validate().is_err());
    }
}
