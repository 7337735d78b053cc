pub mod angler;
pub mod conversion;
pub mod result;
pub mod rules;
pub mod standings;
pub mod tournament;
