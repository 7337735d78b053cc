use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{AnglerResult, TeamResult};
use crate::services::weigh_in::WeighIn;

/// Request payload for entering one angler's weigh-in.
///
/// Range rules (fish limit, weight sanity) are enforced by the engine
/// against the tournament's rule set, not here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateResultRequest {
    pub angler_id: Uuid,

    #[serde(default)]
    pub num_fish: i16,
    #[serde(default)]
    pub num_fish_dead: i16,
    /// Scale reading before the dead-fish penalty.
    #[serde(default)]
    pub total_weight: Decimal,
    #[serde(default)]
    pub big_bass_weight: Decimal,

    #[serde(default)]
    pub buy_in: bool,
    #[serde(default)]
    pub disqualified: bool,
}

impl CreateResultRequest {
    pub fn to_weigh_in(&self) -> WeighIn {
        WeighIn {
            num_fish: self.num_fish,
            num_fish_dead: self.num_fish_dead,
            total_weight: self.total_weight,
            big_bass_weight: self.big_bass_weight,
            buy_in: self.buy_in,
            disqualified: self.disqualified,
        }
    }
}

/// Request payload for correcting a stored result.
///
/// Fields are written back exactly as supplied; the stored total weight is
/// never re-derived from the dead-fish count after creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateResultRequest {
    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
    pub locked: bool,
}

/// Request payload for pairing two results into a team
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamResultRequest {
    pub result_1_id: Uuid,
    pub result_2_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub result_id: Uuid,
    pub tournament_id: Uuid,
    pub angler_id: Uuid,
    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub num_fish_alive: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
    pub locked: bool,
    pub place_finish: Option<i32>,
    pub points: Option<i32>,
}

impl From<AnglerResult> for ResultResponse {
    fn from(r: AnglerResult) -> Self {
        Self {
            result_id: r.result_id,
            tournament_id: r.tournament_id,
            angler_id: r.angler_id,
            num_fish: r.num_fish,
            num_fish_dead: r.num_fish_dead,
            num_fish_alive: r.num_fish_alive,
            total_weight: r.total_weight,
            penalty_weight: r.penalty_weight,
            big_bass_weight: r.big_bass_weight,
            buy_in: r.buy_in,
            disqualified: r.disqualified,
            locked: r.locked,
            place_finish: r.place_finish,
            points: r.points,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResultResponse {
    pub team_result_id: Uuid,
    pub tournament_id: Uuid,
    pub result_1_id: Uuid,
    pub result_2_id: Option<Uuid>,
    pub team_name: String,
    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
    pub place_finish: Option<i32>,
}

impl From<TeamResult> for TeamResultResponse {
    fn from(t: TeamResult) -> Self {
        Self {
            team_result_id: t.team_result_id,
            tournament_id: t.tournament_id,
            result_1_id: t.result_1_id,
            result_2_id: t.result_2_id,
            team_name: t.team_name,
            num_fish: t.num_fish,
            num_fish_dead: t.num_fish_dead,
            total_weight: t.total_weight,
            penalty_weight: t.penalty_weight,
            big_bass_weight: t.big_bass_weight,
            buy_in: t.buy_in,
            disqualified: t.disqualified,
            place_finish: t.place_finish,
        }
    }
}
