pub mod anglers;
pub mod conversions;
pub mod results;
pub mod rules;
pub mod standings;
pub mod tournaments;
