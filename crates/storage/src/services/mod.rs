pub mod awards;
pub mod conversion;
pub mod payouts;
pub mod placement;
pub mod points;
pub mod standings;
pub mod team;
pub mod weigh_in;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// A single fish must weigh at least this much to count for the big-bass
/// pot, in a tournament or across the season.
pub const BIG_BASS_MINIMUM: Decimal = dec!(5.00);

/// Plain scoring record the placement and points engines run over.
///
/// Built from a stored result (or team result) plus the angler's
/// membership flag, so the engines stay testable without a database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResultCard {
    pub result_id: Uuid,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub num_fish: i16,
    pub buy_in: bool,
    pub disqualified: bool,
    pub member: bool,
    pub locked: bool,
    pub place_finish: Option<i32>,
    pub points: Option<i32>,
}

/// Finish categories, in the order they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Weighed,
    Zero,
    BuyIn,
    Disqualified,
}

impl ResultCard {
    pub fn category(&self) -> Category {
        if self.disqualified {
            Category::Disqualified
        } else if self.buy_in {
            Category::BuyIn
        } else if self.total_weight > Decimal::ZERO {
            Category::Weighed
        } else {
            Category::Zero
        }
    }
}
