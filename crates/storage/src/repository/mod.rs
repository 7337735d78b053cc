pub mod angler;
pub mod payout_schedule;
pub mod result;
pub mod rule_set;
pub mod season;
pub mod team_result;
pub mod tournament;
