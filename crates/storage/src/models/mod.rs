pub mod angler;
pub mod payout_schedule;
pub mod result;
pub mod rule_set;
pub mod team_result;
pub mod tournament;

pub use angler::{Angler, AnglerName};
pub use payout_schedule::PayoutSchedule;
pub use result::AnglerResult;
pub use rule_set::RuleSet;
pub use team_result::TeamResult;
pub use tournament::Tournament;
