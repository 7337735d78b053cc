use crate::error::{Result, StorageError};
use crate::models::RuleSet;

use super::{Category, ResultCard};

/// Award season points across a placed tournament field.
///
/// Guests always score zero and are invisible to everyone else's points.
/// For members, a single counter runs down the field in place order: the
/// first weighed member gets `max_points`, each later distinct place one
/// less, and a result sharing a place repeats the previous award. Zeros,
/// buy-ins and disqualifications land a configured offset below the
/// counter wherever it stands when they come up.
pub fn award_points(cards: &mut [ResultCard], rules: &RuleSet) -> Result<()> {
    if cards.iter().any(|c| c.place_finish.is_none()) {
        return Err(StorageError::Validation(
            "cannot award points before places are assigned".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by_key(|&idx| cards[idx].place_finish);

    // Place and points of the last member awarded.
    let mut previous: Option<(i32, i32)> = None;

    for &idx in &order {
        if !cards[idx].member {
            cards[idx].points = Some(0);
            continue;
        }

        let place = cards[idx].place_finish.unwrap_or_default();
        let points = match previous {
            Some((prev_place, prev_points)) if prev_place == place => prev_points,
            _ => {
                let counter = previous.map(|(_, points)| points);
                match cards[idx].category() {
                    Category::Weighed => counter.map_or(rules.max_points, |c| c - 1),
                    Category::Zero => counter.map_or(0, |c| c - rules.zero_points_offset),
                    Category::BuyIn => counter.map_or(
                        rules.max_points - rules.buy_in_points_offset,
                        |c| c - rules.buy_in_points_offset,
                    ),
                    Category::Disqualified => {
                        counter.map_or(rules.max_points, |c| c - rules.disqualified_points_offset)
                    }
                }
            }
        };

        cards[idx].points = Some(points);
        previous = Some((place, points));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::placement::assign_places;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn rules() -> RuleSet {
        RuleSet::with_defaults(2026)
    }

    fn member(weight: Decimal, num_fish: i16) -> ResultCard {
        ResultCard {
            result_id: Uuid::new_v4(),
            total_weight: weight,
            big_bass_weight: Decimal::ZERO,
            num_fish,
            buy_in: false,
            disqualified: false,
            member: true,
            locked: false,
            place_finish: None,
            points: None,
        }
    }

    fn guest(weight: Decimal, num_fish: i16) -> ResultCard {
        let mut c = member(weight, num_fish);
        c.member = false;
        c
    }

    fn points(cards: &[ResultCard]) -> Vec<i32> {
        cards.iter().map(|c| c.points.unwrap()).collect()
    }

    #[test]
    fn test_points_require_placement() {
        let mut cards = vec![member(dec!(10.00), 3)];
        assert!(award_points(&mut cards, &rules()).is_err());
    }

    #[test]
    fn test_five_member_field() {
        let mut cards = vec![
            member(dec!(15.25), 5),
            member(dec!(12.75), 4),
            member(dec!(10.50), 3),
            member(dec!(8.25), 2),
            member(dec!(0.00), 0),
        ];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        assert_eq!(
            cards.iter().map(|c| c.place_finish.unwrap()).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        // The zero lands two below the last weighed award.
        assert_eq!(points(&cards), vec![100, 99, 98, 97, 95]);
    }

    #[test]
    fn test_guest_scores_zero_and_is_invisible() {
        let mut cards = vec![
            guest(dec!(18.00), 5),
            member(dec!(14.00), 5),
            member(dec!(11.00), 4),
        ];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        // Guest wins the tournament but the first member still gets the max.
        assert_eq!(points(&cards), vec![0, 100, 99]);
    }

    #[test]
    fn test_guest_zero_in_every_category() {
        let mut weighed = vec![guest(dec!(9.00), 3)];
        let mut zeroed = vec![guest(dec!(0.00), 0)];
        let mut bought_in = vec![{
            let mut c = guest(dec!(0.00), 0);
            c.buy_in = true;
            c
        }];
        let mut disqualified = vec![{
            let mut c = guest(dec!(9.00), 3);
            c.disqualified = true;
            c
        }];

        for cards in [&mut weighed, &mut zeroed, &mut bought_in, &mut disqualified] {
            assign_places(cards, 3);
            award_points(cards, &rules()).unwrap();
            assert_eq!(cards[0].points, Some(0));
        }
    }

    #[test]
    fn test_running_counter_through_all_categories() {
        let mut cards = vec![
            member(dec!(16.00), 5),
            {
                let mut c = member(dec!(14.00), 5);
                c.disqualified = true;
                c
            },
            member(dec!(12.00), 4),
            member(dec!(0.00), 0),
            {
                let mut c = member(dec!(0.00), 0);
                c.buy_in = true;
                c
            },
        ];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        // Weighed 100 and 99, zero 97, buy-in 93, disqualified 90 — one
        // counter walked down in place order.
        assert_eq!(points(&cards), vec![100, 90, 99, 97, 93]);
    }

    #[test]
    fn test_tied_places_repeat_points() {
        let mut cards = vec![
            member(dec!(16.00), 5),
            member(dec!(14.00), 5),
            member(dec!(12.00), 4),
            member(dec!(10.00), 4),
            member(dec!(10.00), 4),
            member(dec!(8.00), 2),
        ];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        assert_eq!(points(&cards), vec![100, 99, 98, 97, 97, 96]);
    }

    #[test]
    fn test_buy_in_only_field() {
        let mut cards = vec![{
            let mut c = member(dec!(0.00), 0);
            c.buy_in = true;
            c
        }];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        assert_eq!(points(&cards), vec![96]);
    }

    #[test]
    fn test_zero_only_field_scores_nothing() {
        let mut cards = vec![member(dec!(0.00), 0), member(dec!(0.00), 0)];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        assert_eq!(points(&cards), vec![0, 0]);
    }

    #[test]
    fn test_disqualified_only_field_gets_max() {
        let mut cards = vec![{
            let mut c = member(dec!(12.00), 4);
            c.disqualified = true;
            c
        }];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();

        assert_eq!(points(&cards), vec![100]);
    }

    #[test]
    fn test_points_monotone_non_increasing_in_place_order() {
        let mut cards = vec![
            member(dec!(16.00), 5),
            member(dec!(14.00), 4),
            member(dec!(14.00), 4),
            member(dec!(9.00), 3),
            member(dec!(0.00), 0),
            {
                let mut c = member(dec!(0.00), 0);
                c.buy_in = true;
                c
            },
        ];
        assign_places(&mut cards, 4);
        award_points(&mut cards, &rules()).unwrap();

        let mut ordered: Vec<(i32, i32)> = cards
            .iter()
            .map(|c| (c.place_finish.unwrap(), c.points.unwrap()))
            .collect();
        ordered.sort();
        for pair in ordered.windows(2) {
            assert!(pair[1].1 <= pair[0].1, "points increased down the field");
            if pair[1].0 == pair[0].0 {
                assert_eq!(pair[1].1, pair[0].1, "tied places must score alike");
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut cards = vec![
            member(dec!(15.25), 5),
            member(dec!(12.75), 4),
            member(dec!(0.00), 0),
            guest(dec!(10.00), 3),
        ];
        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();
        let first = points(&cards);

        assign_places(&mut cards, 3);
        award_points(&mut cards, &rules()).unwrap();
        assert_eq!(points(&cards), first);
    }
}
