use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-angler dollar split of the entry fee for one calendar year.
///
/// Each field is the slice of a single entry fee that funds that pot; a
/// tournament's payout for a pot is `slice × participant count`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PayoutSchedule {
    pub payout_schedule_id: Uuid,
    pub year: i32,

    pub club: Decimal,
    pub place_1: Decimal,
    pub place_2: Decimal,
    pub place_3: Decimal,
    pub charity: Decimal,
    pub big_bass: Decimal,

    /// Top finishers who always receive distinct place numbers.
    pub paid_places: i16,

    pub created_at: NaiveDateTime,
}

impl PayoutSchedule {
    pub fn entry_fee(&self) -> Decimal {
        self.club + self.place_1 + self.place_2 + self.place_3 + self.charity + self.big_bass
    }

    pub fn validate(&self) -> Result<(), String> {
        let slices = [
            self.club,
            self.place_1,
            self.place_2,
            self.place_3,
            self.charity,
            self.big_bass,
        ];
        if slices.iter().any(|s| *s < Decimal::ZERO) {
            return Err("payout slices must not be negative".to_string());
        }
        if self.paid_places < 1 {
            return Err("paid_places must be at least 1".to_string());
        }
        Ok(())
    }
}
