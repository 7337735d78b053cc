use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{AnglerResult, RuleSet};
use crate::repository::result::ResultRepository;
use crate::repository::rule_set::RuleSetRepository;
use crate::repository::tournament::TournamentRepository;

/// Raw weigh-in slip for one angler, exactly as called out at the scales.
#[derive(Debug, Clone)]
pub struct WeighIn {
    pub num_fish: i16,
    pub num_fish_dead: i16,
    /// Scale reading before any penalty.
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub buy_in: bool,
    pub disqualified: bool,
}

/// Catch figures as they will be stored: penalty deducted, alive count
/// derived. Computed exactly once, when the result row is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchFigures {
    pub num_fish: i16,
    pub num_fish_dead: i16,
    pub num_fish_alive: i16,
    pub total_weight: Decimal,
    pub penalty_weight: Decimal,
    pub big_bass_weight: Decimal,
}

impl CatchFigures {
    fn zeroed() -> Self {
        Self {
            num_fish: 0,
            num_fish_dead: 0,
            num_fish_alive: 0,
            total_weight: Decimal::ZERO,
            penalty_weight: Decimal::ZERO,
            big_bass_weight: Decimal::ZERO,
        }
    }
}

/// Validate a weigh-in against the year's rules and derive the stored
/// figures. Rejects bad slips outright; nothing is ever clamped.
pub fn derive_figures(weigh_in: &WeighIn, rules: &RuleSet) -> Result<CatchFigures> {
    // A buy-in forfeits all catch stats no matter what was written down.
    if weigh_in.buy_in {
        return Ok(CatchFigures::zeroed());
    }

    if weigh_in.num_fish < 0 {
        return Err(StorageError::Validation(
            "fish count must not be negative".to_string(),
        ));
    }
    if weigh_in.total_weight < Decimal::ZERO {
        return Err(StorageError::Validation(
            "total weight must not be negative".to_string(),
        ));
    }
    if weigh_in.big_bass_weight < Decimal::ZERO {
        return Err(StorageError::Validation(
            "big bass weight must not be negative".to_string(),
        ));
    }
    if weigh_in.num_fish == 0 && weigh_in.total_weight > Decimal::ZERO {
        return Err(StorageError::Validation(
            "cannot weigh in fish with a zero fish count".to_string(),
        ));
    }
    if weigh_in.num_fish > rules.fish_limit {
        return Err(StorageError::Validation(format!(
            "fish count {} exceeds the {}-fish limit",
            weigh_in.num_fish, rules.fish_limit
        )));
    }
    if weigh_in.big_bass_weight > weigh_in.total_weight {
        return Err(StorageError::Validation(
            "big bass weight cannot exceed total weight".to_string(),
        ));
    }
    if weigh_in.num_fish_dead < 0 || weigh_in.num_fish_dead > weigh_in.num_fish {
        return Err(StorageError::Validation(
            "dead fish count must be between zero and the fish count".to_string(),
        ));
    }

    let penalty_weight = Decimal::from(weigh_in.num_fish_dead) * rules.dead_fish_penalty;

    Ok(CatchFigures {
        num_fish: weigh_in.num_fish,
        num_fish_dead: weigh_in.num_fish_dead,
        num_fish_alive: weigh_in.num_fish - weigh_in.num_fish_dead,
        total_weight: weigh_in.total_weight - penalty_weight,
        penalty_weight,
        big_bass_weight: weigh_in.big_bass_weight,
    })
}

/// Record a weigh-in for an angler in a tournament.
///
/// Requires the tournament's rule set to resolve (no defaults are conjured)
/// and rejects a second result for the same angler.
pub async fn enter_result(
    pool: &PgPool,
    tournament_id: Uuid,
    angler_id: Uuid,
    weigh_in: &WeighIn,
) -> Result<AnglerResult> {
    let tournament = TournamentRepository::new(pool).find_by_id(tournament_id).await?;

    let rules = RuleSetRepository::new(pool)
        .find_by_id(tournament.rule_set_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => StorageError::MissingConfiguration(format!(
                "no rule set configured for tournament {}",
                tournament_id
            )),
            other => other,
        })?;

    let figures = derive_figures(weigh_in, &rules)?;

    let repo = ResultRepository::new(pool);
    if repo.exists_for_angler(tournament_id, angler_id).await? {
        return Err(StorageError::DuplicateResult);
    }

    repo.create(
        tournament_id,
        angler_id,
        &figures,
        weigh_in.buy_in,
        weigh_in.disqualified,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rules() -> RuleSet {
        RuleSet::with_defaults(2026)
    }

    fn slip(num_fish: i16, dead: i16, weight: Decimal, big_bass: Decimal) -> WeighIn {
        WeighIn {
            num_fish,
            num_fish_dead: dead,
            total_weight: weight,
            big_bass_weight: big_bass,
            buy_in: false,
            disqualified: false,
        }
    }

    #[test]
    fn test_penalty_deducted_once_at_derivation() {
        let figures = derive_figures(&slip(5, 2, dec!(14.50), dec!(4.25)), &rules()).unwrap();
        assert_eq!(figures.penalty_weight, dec!(0.50));
        assert_eq!(figures.total_weight, dec!(14.00));
        assert_eq!(figures.num_fish_alive, 3);
        assert_eq!(figures.big_bass_weight, dec!(4.25));
    }

    #[test]
    fn test_no_dead_fish_no_penalty() {
        let figures = derive_figures(&slip(3, 0, dec!(9.75), dec!(5.10)), &rules()).unwrap();
        assert_eq!(figures.penalty_weight, Decimal::ZERO);
        assert_eq!(figures.total_weight, dec!(9.75));
    }

    #[test]
    fn test_buy_in_forfeits_catch_stats() {
        let mut weigh_in = slip(5, 1, dec!(12.00), dec!(6.00));
        weigh_in.buy_in = true;
        let figures = derive_figures(&weigh_in, &rules()).unwrap();
        assert_eq!(figures, CatchFigures::zeroed());
    }

    #[test]
    fn test_negative_counts_and_weights_rejected() {
        assert!(derive_figures(&slip(-1, 0, dec!(1.00), dec!(0.00)), &rules()).is_err());
        assert!(derive_figures(&slip(2, 0, dec!(-1.00), dec!(0.00)), &rules()).is_err());
        assert!(derive_figures(&slip(2, 0, dec!(4.00), dec!(-0.50)), &rules()).is_err());
    }

    #[test]
    fn test_weight_without_fish_rejected() {
        assert!(derive_figures(&slip(0, 0, dec!(2.00), dec!(0.00)), &rules()).is_err());
    }

    #[test]
    fn test_over_limit_rejected() {
        assert!(derive_figures(&slip(6, 0, dec!(20.00), dec!(0.00)), &rules()).is_err());
    }

    #[test]
    fn test_big_bass_heavier_than_stringer_rejected() {
        assert!(derive_figures(&slip(1, 0, dec!(4.00), dec!(4.50)), &rules()).is_err());
    }

    #[test]
    fn test_dead_count_out_of_range_rejected() {
        assert!(derive_figures(&slip(2, 3, dec!(5.00), dec!(0.00)), &rules()).is_err());
        assert!(derive_figures(&slip(2, -1, dec!(5.00), dec!(0.00)), &rules()).is_err());
    }

    #[test]
    fn test_zero_catch_is_valid() {
        let figures = derive_figures(&slip(0, 0, dec!(0.00), dec!(0.00)), &rules()).unwrap();
        assert_eq!(figures.total_weight, Decimal::ZERO);
        assert_eq!(figures.num_fish, 0);
    }
}
