use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Tournament;

/// Request payload for scheduling a tournament.
///
/// The rule set and payout schedule are resolved from the event's year at
/// creation time; if either is missing the request fails rather than
/// inventing defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Lake must be between 1 and 255 characters"
    ))]
    pub lake: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub team: bool,

    #[serde(default = "default_points_count")]
    pub points_count: bool,

    #[serde(default)]
    pub paper: bool,
}

fn default_points_count() -> bool {
    true
}

/// Request payload for updating a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub lake: Option<String>,

    pub date: Option<NaiveDate>,

    pub team: Option<bool>,

    pub points_count: Option<bool>,

    pub paper: Option<bool>,

    pub complete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub tournament_id: Uuid,
    pub name: String,
    pub lake: String,
    pub date: NaiveDate,
    pub team: bool,
    pub points_count: bool,
    pub paper: bool,
    pub complete: bool,
    pub rule_set_id: Uuid,
    pub payout_schedule_id: Uuid,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            tournament_id: t.tournament_id,
            name: t.name,
            lake: t.lake,
            date: t.date,
            team: t.team,
            points_count: t.points_count,
            paper: t.paper,
            complete: t.complete,
            rule_set_id: t.rule_set_id,
            payout_schedule_id: t.payout_schedule_id,
        }
    }
}
