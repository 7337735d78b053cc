use rust_decimal::Decimal;

use super::{Category, ResultCard};

fn sort_key(card: &ResultCard) -> (Decimal, Decimal, i16) {
    (card.total_weight, card.big_bass_weight, card.num_fish)
}

/// Assign place numbers across a tournament's results.
///
/// Categories finish in a strict order: weighed fish, then zeros, then
/// buy-ins, then disqualifications. Weighed results are ordered by total
/// weight with big bass and fish count breaking exact weight ties. The
/// first `paid_places` finishers always get distinct sequential places;
/// past the paid places, results with identical total weight share a place
/// and the next distinct weight resumes one below it (1, 2, 2, 3). Each of
/// the three trailing categories shares a single place number.
pub fn assign_places(cards: &mut [ResultCard], paid_places: usize) {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| {
        cards[a]
            .category()
            .cmp(&cards[b].category())
            .then_with(|| sort_key(&cards[b]).cmp(&sort_key(&cards[a])))
    });

    let mut last_place = 0;
    let mut weighed_seen = 0usize;
    // Weight and place of the previous weighed result.
    let mut prev_weighed: Option<(Decimal, i32)> = None;
    // Shared place of the trailing category currently being assigned.
    let mut shared: Option<(Category, i32)> = None;

    for &idx in &order {
        let category = cards[idx].category();
        let place = match category {
            Category::Weighed => {
                weighed_seen += 1;
                let place = match prev_weighed {
                    None => 1,
                    Some((weight, place))
                        if weighed_seen > paid_places && cards[idx].total_weight == weight =>
                    {
                        place
                    }
                    Some((_, place)) => place + 1,
                };
                prev_weighed = Some((cards[idx].total_weight, place));
                last_place = place;
                place
            }
            _ => match shared {
                Some((current, place)) if current == category => place,
                _ => {
                    let place = last_place + 1;
                    shared = Some((category, place));
                    last_place = place;
                    place
                }
            },
        };
        cards[idx].place_finish = Some(place);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn card(weight: Decimal, big_bass: Decimal, num_fish: i16) -> ResultCard {
        ResultCard {
            result_id: Uuid::new_v4(),
            total_weight: weight,
            big_bass_weight: big_bass,
            num_fish,
            buy_in: false,
            disqualified: false,
            member: true,
            locked: false,
            place_finish: None,
            points: None,
        }
    }

    fn zero_card() -> ResultCard {
        card(dec!(0.00), dec!(0.00), 0)
    }

    fn buy_in_card() -> ResultCard {
        let mut c = zero_card();
        c.buy_in = true;
        c
    }

    fn disqualified_card(weight: Decimal) -> ResultCard {
        let mut c = card(weight, dec!(0.00), 3);
        c.disqualified = true;
        c
    }

    fn places(cards: &[ResultCard]) -> Vec<i32> {
        cards.iter().map(|c| c.place_finish.unwrap()).collect()
    }

    #[test]
    fn test_distinct_weights_place_sequentially() {
        let mut cards = vec![
            card(dec!(8.25), dec!(0.00), 2),
            card(dec!(15.25), dec!(5.00), 5),
            card(dec!(10.50), dec!(0.00), 3),
            card(dec!(12.75), dec!(4.00), 4),
        ];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_big_bass_orders_equal_weights() {
        // Equal stringers inside the paid places: the bigger bass wins the
        // higher (distinct) place, regardless of entry order.
        let mut cards = vec![
            card(dec!(21.00), dec!(5.00), 5),
            card(dec!(21.00), dec!(7.00), 5),
        ];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![2, 1]);
    }

    #[test]
    fn test_fish_count_is_final_tiebreak() {
        let mut cards = vec![
            card(dec!(9.00), dec!(3.00), 3),
            card(dec!(9.00), dec!(3.00), 4),
        ];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![2, 1]);
    }

    #[test]
    fn test_ties_past_paid_places_share_a_place() {
        let mut cards = vec![
            card(dec!(16.00), dec!(0.00), 5),
            card(dec!(14.00), dec!(0.00), 5),
            card(dec!(12.00), dec!(0.00), 5),
            card(dec!(9.00), dec!(4.00), 4),
            card(dec!(9.00), dec!(2.00), 4),
            card(dec!(7.50), dec!(0.00), 3),
        ];
        assign_places(&mut cards, 3);
        // 1, 2, 3 paid; then 4, 4 tied; next distinct weight resumes at 5.
        assert_eq!(places(&cards), vec![1, 2, 3, 4, 4, 5]);
    }

    #[test]
    fn test_paid_places_never_share() {
        let mut cards = vec![
            card(dec!(16.00), dec!(6.00), 5),
            card(dec!(16.00), dec!(4.00), 5),
            card(dec!(12.00), dec!(0.00), 4),
        ];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![1, 2, 3]);
    }

    #[test]
    fn test_category_order_weighed_zero_buyin_disqualified() {
        let mut cards = vec![
            buy_in_card(),
            card(dec!(11.00), dec!(0.00), 4),
            zero_card(),
            disqualified_card(dec!(20.00)),
            card(dec!(9.50), dec!(0.00), 3),
            zero_card(),
        ];
        assign_places(&mut cards, 3);
        // Weighed take 1 and 2, all zeros share 3, buy-ins 4, disqualified 5.
        assert_eq!(places(&cards), vec![4, 1, 3, 5, 2, 3]);
    }

    #[test]
    fn test_heavy_disqualified_result_still_places_last() {
        let mut cards = vec![
            disqualified_card(dec!(25.00)),
            card(dec!(6.00), dec!(0.00), 2),
        ];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![2, 1]);
    }

    #[test]
    fn test_all_zero_field_shares_first_place() {
        let mut cards = vec![zero_card(), zero_card(), zero_card()];
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), vec![1, 1, 1]);
    }

    #[test]
    fn test_assignment_is_idempotent() {
        let mut cards = vec![
            card(dec!(15.25), dec!(5.00), 5),
            card(dec!(12.75), dec!(4.00), 4),
            zero_card(),
            buy_in_card(),
        ];
        assign_places(&mut cards, 3);
        let first = places(&cards);
        assign_places(&mut cards, 3);
        assert_eq!(places(&cards), first);
    }
}
