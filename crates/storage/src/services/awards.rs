use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::standings::{AoyStanding, BigBassWinner, HeavyStringer};
use crate::models::AnglerName;

use super::BIG_BASS_MINIMUM;

/// One member result from the season, joined with its angler and
/// tournament. Only complete, points-counting, on-the-books tournaments
/// feed these rows (see `repository::season`).
#[derive(Debug, Clone, FromRow)]
pub struct SeasonResultRow {
    pub result_id: Uuid,
    pub angler_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub tournament_id: Uuid,
    pub tournament_name: String,
    pub date: NaiveDate,
    pub num_fish: i16,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub points: Option<i32>,
}

impl SeasonResultRow {
    fn angler_name(&self) -> String {
        AnglerName::new(&self.first_name, &self.last_name).display()
    }
}

/// Season-long cumulative standings: points, then weight, break the ties.
pub fn angler_of_year(rows: &[SeasonResultRow]) -> Vec<AoyStanding> {
    let mut totals: HashMap<Uuid, AoyStanding> = HashMap::new();

    for row in rows {
        let entry = totals.entry(row.angler_id).or_insert_with(|| AoyStanding {
            angler_id: row.angler_id,
            angler_name: row.angler_name(),
            total_points: 0,
            total_weight: Decimal::ZERO,
            total_fish: 0,
            events: 0,
        });
        entry.total_points += i64::from(row.points.unwrap_or(0));
        entry.total_weight += row.total_weight;
        entry.total_fish += i64::from(row.num_fish);
        entry.events += 1;
    }

    let mut standings: Vec<AoyStanding> = totals.into_values().collect();
    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.total_weight.cmp(&a.total_weight))
            .then_with(|| a.angler_name.cmp(&b.angler_name))
    });
    standings
}

// Heaviest first; among equals the earlier event wins, then the earlier
// row, so reruns over the same season always name the same winner.
fn heavier_and_earlier(
    a: &SeasonResultRow,
    b: &SeasonResultRow,
    weight_a: Decimal,
    weight_b: Decimal,
) -> Ordering {
    weight_b
        .cmp(&weight_a)
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.result_id.cmp(&b.result_id))
}

/// Heaviest single-tournament stringer of the season.
pub fn heavy_stringer(rows: &[SeasonResultRow]) -> Option<HeavyStringer> {
    rows.iter()
        .filter(|r| r.total_weight > Decimal::ZERO)
        .min_by(|a, b| heavier_and_earlier(a, b, a.total_weight, b.total_weight))
        .map(|row| HeavyStringer {
            angler_id: row.angler_id,
            angler_name: row.angler_name(),
            weight: row.total_weight,
            num_fish: row.num_fish,
            tournament_id: row.tournament_id,
            tournament_name: row.tournament_name.clone(),
            date: row.date,
        })
}

/// Heaviest qualifying single fish of the season.
pub fn big_bass(rows: &[SeasonResultRow]) -> Option<BigBassWinner> {
    rows.iter()
        .filter(|r| r.big_bass_weight >= BIG_BASS_MINIMUM)
        .min_by(|a, b| heavier_and_earlier(a, b, a.big_bass_weight, b.big_bass_weight))
        .map(|row| BigBassWinner {
            angler_id: row.angler_id,
            angler_name: row.angler_name(),
            weight: row.big_bass_weight,
            tournament_id: row.tournament_id,
            tournament_name: row.tournament_name.clone(),
            date: row.date,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(
        angler: Uuid,
        name: &str,
        date: NaiveDate,
        num_fish: i16,
        weight: Decimal,
        big_bass: Decimal,
        points: Option<i32>,
    ) -> SeasonResultRow {
        SeasonResultRow {
            result_id: Uuid::new_v4(),
            angler_id: angler,
            first_name: name.to_string(),
            last_name: "Angler".to_string(),
            tournament_id: Uuid::new_v4(),
            tournament_name: "Monthly".to_string(),
            date,
            num_fish,
            total_weight: weight,
            big_bass_weight: big_bass,
            points,
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    #[test]
    fn test_aoy_totals_per_angler() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, "Al", date(3, 14), 5, dec!(15.25), dec!(4.00), Some(100)),
            row(a, "Al", date(4, 11), 3, dec!(8.00), dec!(0.00), Some(98)),
            row(b, "Bo", date(3, 14), 4, dec!(12.00), dec!(5.50), Some(99)),
        ];

        let standings = angler_of_year(&rows);
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].angler_id, a);
        assert_eq!(standings[0].total_points, 198);
        assert_eq!(standings[0].total_weight, dec!(23.25));
        assert_eq!(standings[0].total_fish, 8);
        assert_eq!(standings[0].events, 2);
        assert_eq!(standings[1].total_points, 99);
    }

    #[test]
    fn test_aoy_points_tie_breaks_on_weight() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, "Al", date(3, 14), 5, dec!(15.25), dec!(0.00), Some(100)),
            row(b, "Bo", date(3, 14), 5, dec!(18.00), dec!(0.00), Some(100)),
        ];

        let standings = angler_of_year(&rows);
        assert_eq!(standings[0].angler_id, b);
    }

    #[test]
    fn test_aoy_missing_points_count_as_zero() {
        let a = Uuid::new_v4();
        let rows = vec![row(a, "Al", date(3, 14), 5, dec!(15.25), dec!(0.00), None)];
        let standings = angler_of_year(&rows);
        assert_eq!(standings[0].total_points, 0);
        assert_eq!(standings[0].events, 1);
    }

    #[test]
    fn test_heavy_stringer_picks_heaviest() {
        let rows = vec![
            row(Uuid::new_v4(), "Al", date(3, 14), 5, dec!(15.25), dec!(0.00), Some(100)),
            row(Uuid::new_v4(), "Bo", date(4, 11), 5, dec!(21.50), dec!(0.00), Some(100)),
            row(Uuid::new_v4(), "Cy", date(5, 9), 0, dec!(0.00), dec!(0.00), Some(95)),
        ];

        let winner = heavy_stringer(&rows).unwrap();
        assert_eq!(winner.weight, dec!(21.50));
        assert_eq!(winner.angler_name, "Bo Angler");
    }

    #[test]
    fn test_heavy_stringer_tie_goes_to_earlier_event() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, "Al", date(6, 13), 5, dec!(21.50), dec!(0.00), Some(100)),
            row(b, "Bo", date(4, 11), 5, dec!(21.50), dec!(0.00), Some(100)),
        ];

        let winner = heavy_stringer(&rows).unwrap();
        assert_eq!(winner.angler_id, b);
    }

    #[test]
    fn test_heavy_stringer_none_when_season_empty() {
        assert!(heavy_stringer(&[]).is_none());

        let zeros = vec![row(Uuid::new_v4(), "Al", date(3, 14), 0, dec!(0.00), dec!(0.00), Some(95))];
        assert!(heavy_stringer(&zeros).is_none());
    }

    #[test]
    fn test_big_bass_requires_minimum() {
        let rows = vec![
            row(Uuid::new_v4(), "Al", date(3, 14), 5, dec!(15.25), dec!(4.99), Some(100)),
            row(Uuid::new_v4(), "Bo", date(4, 11), 5, dec!(12.00), dec!(0.00), Some(99)),
        ];
        assert!(big_bass(&rows).is_none());
    }

    #[test]
    fn test_big_bass_picks_heaviest_qualifier() {
        let rows = vec![
            row(Uuid::new_v4(), "Al", date(3, 14), 5, dec!(15.25), dec!(5.00), Some(100)),
            row(Uuid::new_v4(), "Bo", date(4, 11), 5, dec!(12.00), dec!(7.25), Some(99)),
        ];

        let winner = big_bass(&rows).unwrap();
        assert_eq!(winner.weight, dec!(7.25));
        assert_eq!(winner.angler_name, "Bo Angler");
    }
}
