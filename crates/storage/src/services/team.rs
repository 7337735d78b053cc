use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{AnglerResult, TeamResult};
use crate::repository::angler::AnglerRepository;
use crate::repository::result::ResultRepository;
use crate::repository::team_result::TeamResultRepository;
use crate::repository::tournament::TournamentRepository;

/// Combined catch figures for a team, derived from its member results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFigures {
    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub num_fish_alive: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
}

fn excluded(result: &AnglerResult) -> bool {
    result.buy_in || result.disqualified
}

fn figures_of(result: &AnglerResult) -> TeamFigures {
    TeamFigures {
        num_fish: result.num_fish,
        num_fish_dead: result.num_fish_dead,
        num_fish_alive: result.num_fish_alive,
        total_weight: result.total_weight,
        penalty_weight: result.penalty_weight,
        big_bass_weight: result.big_bass_weight,
        buy_in: result.buy_in,
        disqualified: result.disqualified,
    }
}

/// Combine one or two member results into team figures.
///
/// A disqualified or bought-in member contributes nothing: the team adopts
/// the other member's figures, or zeros out if neither member counts. A
/// disqualification on either side disqualifies the team.
pub fn aggregate(result_1: &AnglerResult, result_2: Option<&AnglerResult>) -> TeamFigures {
    let Some(result_2) = result_2 else {
        return figures_of(result_1);
    };

    let team_disqualified = result_1.disqualified || result_2.disqualified;
    let team_buy_in = result_1.buy_in && result_2.buy_in;

    let mut figures = match (excluded(result_1), excluded(result_2)) {
        (false, false) => TeamFigures {
            num_fish: result_1.num_fish + result_2.num_fish,
            // Dead-fish tally matches the club's historical ledgers: angler
            // one's full catch plus the partner's dead fish. The penalty
            // weight is summed from the member rows and never re-derived
            // from this count.
            num_fish_dead: result_1.num_fish + result_2.num_fish_dead,
            num_fish_alive: result_1.num_fish_alive + result_2.num_fish_alive,
            total_weight: result_1.total_weight + result_2.total_weight,
            penalty_weight: result_1.penalty_weight + result_2.penalty_weight,
            big_bass_weight: result_1.big_bass_weight.max(result_2.big_bass_weight),
            buy_in: false,
            disqualified: false,
        },
        (true, false) => figures_of(result_2),
        (false, true) => figures_of(result_1),
        (true, true) => TeamFigures {
            num_fish: 0,
            num_fish_dead: 0,
            num_fish_alive: 0,
            total_weight: Decimal::ZERO,
            penalty_weight: Decimal::ZERO,
            big_bass_weight: Decimal::ZERO,
            buy_in: team_buy_in,
            disqualified: team_disqualified,
        },
    };

    figures.disqualified = team_disqualified;
    figures.buy_in = team_buy_in;
    figures
}

/// Pair two entered results into a team result for a team tournament.
pub async fn enter_team_result(
    pool: &PgPool,
    tournament_id: Uuid,
    result_1_id: Uuid,
    result_2_id: Option<Uuid>,
) -> Result<TeamResult> {
    let tournament = TournamentRepository::new(pool).find_by_id(tournament_id).await?;
    if !tournament.team {
        return Err(StorageError::Validation(
            "tournament is not a team event".to_string(),
        ));
    }

    let results = ResultRepository::new(pool);
    let result_1 = results.find_by_id(result_1_id).await?;
    if result_1.tournament_id != tournament_id {
        return Err(StorageError::Validation(
            "result does not belong to this tournament".to_string(),
        ));
    }

    let result_2 = match result_2_id {
        Some(id) => {
            let r = results.find_by_id(id).await?;
            if r.tournament_id != tournament_id {
                return Err(StorageError::Validation(
                    "result does not belong to this tournament".to_string(),
                ));
            }
            Some(r)
        }
        None => None,
    };

    let anglers = AnglerRepository::new(pool);
    let angler_1 = anglers.find_by_id(result_1.angler_id).await?;
    let partner_name = match &result_2 {
        Some(r) => Some(anglers.find_by_id(r.angler_id).await?.name()),
        None => None,
    };
    let team_name = angler_1.name().team_label(partner_name.as_ref());

    let figures = aggregate(&result_1, result_2.as_ref());

    TeamResultRepository::new(pool)
        .create(tournament_id, result_1_id, result_2_id, &team_name, &figures)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    fn result(
        num_fish: i16,
        dead: i16,
        weight: Decimal,
        big_bass: Decimal,
        buy_in: bool,
        disqualified: bool,
    ) -> AnglerResult {
        let penalty = Decimal::from(dead) * dec!(0.25);
        AnglerResult {
            result_id: Uuid::new_v4(),
            tournament_id: Uuid::new_v4(),
            angler_id: Uuid::new_v4(),
            num_fish,
            num_fish_dead: dead,
            num_fish_alive: num_fish - dead,
            total_weight: weight,
            penalty_weight: penalty,
            big_bass_weight: big_bass,
            buy_in,
            disqualified,
            locked: false,
            place_finish: None,
            points: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_two_countable_members_sum() {
        let a = result(5, 1, dec!(12.75), dec!(4.00), false, false);
        let b = result(4, 2, dec!(9.50), dec!(6.25), false, false);
        let team = aggregate(&a, Some(&b));

        assert_eq!(team.num_fish, 9);
        assert_eq!(team.total_weight, dec!(22.25));
        assert_eq!(team.penalty_weight, dec!(0.75));
        assert_eq!(team.num_fish_alive, 6);
        assert_eq!(team.big_bass_weight, dec!(6.25));
        assert!(!team.disqualified);
        assert!(!team.buy_in);
    }

    #[test]
    fn test_dead_count_keeps_ledger_arithmetic() {
        let a = result(5, 1, dec!(12.75), dec!(4.00), false, false);
        let b = result(4, 2, dec!(9.50), dec!(6.25), false, false);
        let team = aggregate(&a, Some(&b));

        // Angler one's full catch plus the partner's dead fish.
        assert_eq!(team.num_fish_dead, 7);
    }

    #[test]
    fn test_disqualified_member_contributes_nothing() {
        let a = result(5, 0, dec!(15.00), dec!(7.00), false, true);
        let b = result(3, 1, dec!(8.25), dec!(3.50), false, false);
        let team = aggregate(&a, Some(&b));

        assert_eq!(team.num_fish, b.num_fish);
        assert_eq!(team.total_weight, b.total_weight);
        assert_eq!(team.big_bass_weight, b.big_bass_weight);
        assert_eq!(team.penalty_weight, b.penalty_weight);
        assert!(team.disqualified);
        assert!(!team.buy_in);
    }

    #[test]
    fn test_bought_in_member_contributes_nothing() {
        let a = result(0, 0, dec!(0.00), dec!(0.00), true, false);
        let b = result(3, 0, dec!(8.25), dec!(3.50), false, false);
        let team = aggregate(&a, Some(&b));

        assert_eq!(team.total_weight, b.total_weight);
        assert!(!team.disqualified);
        assert!(!team.buy_in);
    }

    #[test]
    fn test_both_excluded_zeroes_team() {
        let a = result(0, 0, dec!(0.00), dec!(0.00), true, false);
        let b = result(5, 0, dec!(14.00), dec!(5.00), false, true);
        let team = aggregate(&a, Some(&b));

        assert_eq!(team.total_weight, Decimal::ZERO);
        assert_eq!(team.num_fish, 0);
        assert!(team.disqualified);
        assert!(!team.buy_in);
    }

    #[test]
    fn test_both_bought_in() {
        let a = result(0, 0, dec!(0.00), dec!(0.00), true, false);
        let b = result(0, 0, dec!(0.00), dec!(0.00), true, false);
        let team = aggregate(&a, Some(&b));

        assert!(team.buy_in);
        assert!(!team.disqualified);
    }

    #[test]
    fn test_solo_team_adopts_member_figures() {
        let a = result(4, 1, dec!(11.50), dec!(5.75), false, false);
        let team = aggregate(&a, None);

        assert_eq!(team.num_fish, 4);
        assert_eq!(team.num_fish_dead, 1);
        assert_eq!(team.total_weight, dec!(11.50));
        assert_eq!(team.big_bass_weight, dec!(5.75));
    }

    #[test]
    fn test_solo_disqualified_member_disqualifies_team() {
        let a = result(4, 0, dec!(11.50), dec!(0.00), false, true);
        let team = aggregate(&a, None);
        assert!(team.disqualified);
    }
}
