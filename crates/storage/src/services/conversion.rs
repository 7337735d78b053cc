use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Shortest length with a table row, in whole inches.
pub const MIN_LENGTH_IN: i32 = 12;
/// Longest length with a table row, in whole inches.
pub const MAX_LENGTH_IN: i32 = 29;

/// Weight reported for any fish longer than the table covers.
pub const SATURATION_WEIGHT: Decimal = dec!(18.00);
/// Heaviest tabulated weight; anything above maps to `SATURATION_LENGTH`.
pub const MAX_TABLE_WEIGHT: Decimal = dec!(17.50);
pub const SATURATION_LENGTH: Decimal = dec!(30.00);

/// Largemouth length-to-weight conversion chart used at club weigh-ins
/// when a fish is measured instead of weighed. One row per whole inch
/// from 12" to 29", eight slots per row, one per eighth inch.
///
/// The values are the club's published chart carried over verbatim; they
/// are looked up, never computed.
static WEIGHT_BY_LENGTH: [[Decimal; 8]; 18] = [
    // 12"
    [dec!(1.08), dec!(1.11), dec!(1.15), dec!(1.18), dec!(1.22), dec!(1.26), dec!(1.30), dec!(1.33)],
    // 13"
    [dec!(1.37), dec!(1.41), dec!(1.45), dec!(1.50), dec!(1.54), dec!(1.58), dec!(1.62), dec!(1.67)],
    // 14"
    [dec!(1.72), dec!(1.76), dec!(1.81), dec!(1.86), dec!(1.91), dec!(1.96), dec!(2.01), dec!(2.06)],
    // 15"
    [dec!(2.11), dec!(2.16), dec!(2.22), dec!(2.27), dec!(2.33), dec!(2.38), dec!(2.44), dec!(2.50)],
    // 16"
    [dec!(2.56), dec!(2.62), dec!(2.68), dec!(2.74), dec!(2.81), dec!(2.87), dec!(2.94), dec!(3.00)],
    // 17"
    [dec!(3.07), dec!(3.14), dec!(3.21), dec!(3.28), dec!(3.35), dec!(3.42), dec!(3.50), dec!(3.57)],
    // 18"
    [dec!(3.65), dec!(3.72), dec!(3.80), dec!(3.88), dec!(3.96), dec!(4.04), dec!(4.12), dec!(4.20)],
    // 19"
    [dec!(4.29), dec!(4.37), dec!(4.46), dec!(4.55), dec!(4.63), dec!(4.72), dec!(4.81), dec!(4.91)],
    // 20"
    [dec!(5.00), dec!(5.09), dec!(5.19), dec!(5.29), dec!(5.38), dec!(5.48), dec!(5.58), dec!(5.69)],
    // 21"
    [dec!(5.79), dec!(5.89), dec!(6.00), dec!(6.10), dec!(6.21), dec!(6.32), dec!(6.43), dec!(6.54)],
    // 22"
    [dec!(6.66), dec!(6.77), dec!(6.88), dec!(7.00), dec!(7.12), dec!(7.24), dec!(7.36), dec!(7.48)],
    // 23"
    [dec!(7.60), dec!(7.73), dec!(7.86), dec!(7.98), dec!(8.11), dec!(8.24), dec!(8.37), dec!(8.51)],
    // 24"
    [dec!(8.64), dec!(8.78), dec!(8.91), dec!(9.05), dec!(9.19), dec!(9.33), dec!(9.48), dec!(9.62)],
    // 25"
    [dec!(9.77), dec!(9.91), dec!(10.06), dec!(10.21), dec!(10.36), dec!(10.52), dec!(10.67), dec!(10.83)],
    // 26"
    [dec!(10.98), dec!(11.14), dec!(11.30), dec!(11.47), dec!(11.63), dec!(11.80), dec!(11.96), dec!(12.13)],
    // 27"
    [dec!(12.30), dec!(12.47), dec!(12.65), dec!(12.82), dec!(13.00), dec!(13.18), dec!(13.36), dec!(13.54)],
    // 28"
    [dec!(13.72), dec!(13.90), dec!(14.09), dec!(14.28), dec!(14.47), dec!(14.66), dec!(14.85), dec!(15.05)],
    // 29"
    [dec!(15.24), dec!(15.56), dec!(15.89), dec!(16.21), dec!(16.53), dec!(16.85), dec!(17.18), dec!(17.50)],
];

/// Chart weight for a fish measured at `inches` plus `eighths` eighths.
///
/// Eighths beyond 7 carry into whole inches. Below the chart a fish weighs
/// nothing; past the 29" row the weight saturates.
pub fn weight_for_length(inches: i32, eighths: i32) -> Decimal {
    let inches = inches + eighths.div_euclid(8);
    let eighths = eighths.rem_euclid(8);

    if inches < MIN_LENGTH_IN {
        return Decimal::ZERO;
    }
    if inches > MAX_LENGTH_IN {
        return SATURATION_WEIGHT;
    }

    WEIGHT_BY_LENGTH[(inches - MIN_LENGTH_IN) as usize][eighths as usize]
}

/// Inverse chart lookup: the tabulated length whose weight is closest to
/// `weight`, in decimal inches (eighth-inch resolution).
///
/// Weights beyond the chart map to `SATURATION_LENGTH`; anything at or
/// below zero maps to zero length.
pub fn length_for_weight(weight: Decimal) -> Decimal {
    if weight <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if weight > MAX_TABLE_WEIGHT {
        return SATURATION_LENGTH;
    }

    let mut best = (MIN_LENGTH_IN, 0);
    let mut best_diff: Option<Decimal> = None;

    for (row, slots) in WEIGHT_BY_LENGTH.iter().enumerate() {
        for (slot, entry) in slots.iter().enumerate() {
            let diff = (weight - entry).abs();
            if best_diff.map_or(true, |d| diff < d) {
                best_diff = Some(diff);
                best = (MIN_LENGTH_IN + row as i32, slot as i32);
            }
        }
    }

    Decimal::from(best.0) + Decimal::new(best.1 as i64 * 125, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_row_lookups() {
        assert_eq!(weight_for_length(12, 0), dec!(1.08));
        assert_eq!(weight_for_length(21, 3), dec!(6.10));
        assert_eq!(weight_for_length(29, 7), dec!(17.50));
    }

    #[test]
    fn test_eighths_carry_into_inches() {
        assert_eq!(weight_for_length(20, 8), weight_for_length(21, 0));
        assert_eq!(weight_for_length(20, 11), weight_for_length(21, 3));
    }

    #[test]
    fn test_below_chart_is_zero() {
        assert_eq!(weight_for_length(11, 7), Decimal::ZERO);
        assert_eq!(weight_for_length(8, 0), Decimal::ZERO);
    }

    #[test]
    fn test_above_chart_saturates() {
        assert_eq!(weight_for_length(30, 0), SATURATION_WEIGHT);
        assert_eq!(weight_for_length(29, 8), SATURATION_WEIGHT);
    }

    #[test]
    fn test_chart_is_strictly_increasing() {
        let mut prev: Option<Decimal> = None;
        for row in WEIGHT_BY_LENGTH.iter() {
            for entry in row.iter() {
                if let Some(p) = prev {
                    assert!(*entry > p, "chart not increasing at {entry}");
                }
                prev = Some(*entry);
            }
        }
    }

    #[test]
    fn test_inverse_of_exact_entry() {
        assert_eq!(length_for_weight(dec!(6.10)), dec!(21.375));
        assert_eq!(length_for_weight(dec!(1.08)), dec!(12));
        assert_eq!(length_for_weight(dec!(17.50)), dec!(29.875));
    }

    #[test]
    fn test_inverse_picks_nearest_entry() {
        // 5.03 sits between 5.00 (20") and 5.09 (20 1/8"), closer to 5.00.
        assert_eq!(length_for_weight(dec!(5.03)), dec!(20));
        // 5.06 is closer to 5.09.
        assert_eq!(length_for_weight(dec!(5.06)), dec!(20.125));
    }

    #[test]
    fn test_inverse_saturation() {
        assert_eq!(length_for_weight(dec!(17.51)), SATURATION_LENGTH);
        assert_eq!(length_for_weight(dec!(25.00)), SATURATION_LENGTH);
    }

    #[test]
    fn test_inverse_below_chart() {
        assert_eq!(length_for_weight(dec!(0.00)), Decimal::ZERO);
        // Tiny but positive weights snap to the shortest tabulated length.
        assert_eq!(length_for_weight(dec!(0.20)), dec!(12));
    }
}
