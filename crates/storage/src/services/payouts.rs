use rust_decimal::Decimal;

use crate::dto::standings::PayoutSummary;
use crate::models::PayoutSchedule;

use super::BIG_BASS_MINIMUM;

/// Pot totals for a tournament: every pot is its per-angler slice times
/// the number of entries. The big-bass pot still totals up when nobody
/// lands a qualifying fish; the carry-over flag tells the treasurer the
/// money rolls forward instead of paying out.
pub fn summarize(
    schedule: &PayoutSchedule,
    participant_count: i64,
    best_member_big_bass: Option<Decimal>,
) -> PayoutSummary {
    let count = Decimal::from(participant_count);

    let carry_over = !best_member_big_bass.is_some_and(|w| w >= BIG_BASS_MINIMUM);

    PayoutSummary {
        club: schedule.club * count,
        total: schedule.entry_fee() * count,
        place_1: schedule.place_1 * count,
        place_2: schedule.place_2 * count,
        place_3: schedule.place_3 * count,
        charity: schedule.charity * count,
        big_bass: schedule.big_bass * count,
        big_bass_carry_over: carry_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn schedule() -> PayoutSchedule {
        PayoutSchedule {
            payout_schedule_id: Uuid::new_v4(),
            year: 2026,
            club: dec!(3.00),
            place_1: dec!(7.00),
            place_2: dec!(5.00),
            place_3: dec!(4.00),
            charity: dec!(2.00),
            big_bass: dec!(4.00),
            paid_places: 3,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_pots_scale_with_entries() {
        let payouts = summarize(&schedule(), 20, Some(dec!(6.50)));

        assert_eq!(payouts.club, dec!(60.00));
        assert_eq!(payouts.place_1, dec!(140.00));
        assert_eq!(payouts.place_2, dec!(100.00));
        assert_eq!(payouts.place_3, dec!(80.00));
        assert_eq!(payouts.charity, dec!(40.00));
        assert_eq!(payouts.big_bass, dec!(80.00));
        assert_eq!(payouts.total, dec!(500.00));
        assert!(!payouts.big_bass_carry_over);
    }

    #[test]
    fn test_big_bass_carries_over_below_minimum() {
        let payouts = summarize(&schedule(), 12, Some(dec!(4.99)));
        assert!(payouts.big_bass_carry_over);
    }

    #[test]
    fn test_big_bass_carries_over_with_no_qualifier() {
        let payouts = summarize(&schedule(), 12, None);
        assert!(payouts.big_bass_carry_over);
    }

    #[test]
    fn test_exact_minimum_pays_out() {
        let payouts = summarize(&schedule(), 12, Some(dec!(5.00)));
        assert!(!payouts.big_bass_carry_over);
    }

    #[test]
    fn test_empty_tournament() {
        let payouts = summarize(&schedule(), 0, None);
        assert_eq!(payouts.total, dec!(0.00));
        assert!(payouts.big_bass_carry_over);
    }
}
