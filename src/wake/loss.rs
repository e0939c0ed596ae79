//! Local wake-loss percentage from paired energy tables.

use super::tables::EnergyTable;

/// Computes the local wake loss at one (direction, speed) bin:
/// `|with - without| / without × 100`, rounded to two decimals.
///
/// Both tables are selected by exact axis-value equality; a requested
/// direction or speed that is not on the axes yields `None`. A zero
/// without-wake value is not guarded: the division produces IEEE
/// inf/NaN, an inherited upstream limitation this layer does not correct.
pub fn local_wake_loss_pct(
    with_wake: &EnergyTable,
    without_wake: &EnergyTable,
    wd_deg: f32,
    ws_ms: f32,
) -> Option<f32> {
    let with = with_wake.select(wd_deg, ws_ms)?;
    let without = without_wake.select(wd_deg, ws_ms)?;
    Some(round2((with - without).abs() / without * 100.0))
}

/// Rounds to two decimal places.
fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paired_tables(without: f32, with: f32) -> (EnergyTable, EnergyTable) {
        let mut without_wake = EnergyTable::new(vec![0.0, 90.0], vec![8.0, 11.0]);
        let mut with_wake = EnergyTable::new(vec![0.0, 90.0], vec![8.0, 11.0]);
        without_wake.set(0, 1, without);
        with_wake.set(0, 1, with);
        (with_wake, without_wake)
    }

    #[test]
    fn five_percent_loss_rounds_to_two_decimals() {
        let (with_wake, without_wake) = paired_tables(100.0, 95.0);
        assert_eq!(
            local_wake_loss_pct(&with_wake, &without_wake, 0.0, 11.0),
            Some(5.00)
        );
    }

    #[test]
    fn loss_is_non_negative_by_construction() {
        // A with-wake value above without-wake still yields a positive loss
        // because of the absolute value.
        let (with_wake, without_wake) = paired_tables(95.0, 100.0);
        assert_eq!(
            local_wake_loss_pct(&with_wake, &without_wake, 0.0, 11.0),
            Some(5.26)
        );
    }

    #[test]
    fn rounding_is_to_two_decimals() {
        let (with_wake, without_wake) = paired_tables(3.0, 2.9);
        // 0.1/3 * 100 = 3.3333... → 3.33
        assert_eq!(
            local_wake_loss_pct(&with_wake, &without_wake, 0.0, 11.0),
            Some(3.33)
        );
    }

    #[test]
    fn off_axis_selection_yields_none() {
        let (with_wake, without_wake) = paired_tables(100.0, 95.0);
        assert_eq!(local_wake_loss_pct(&with_wake, &without_wake, 45.0, 11.0), None);
        assert_eq!(local_wake_loss_pct(&with_wake, &without_wake, 0.0, 9.5), None);
    }

    #[test]
    fn zero_denominator_is_not_guarded() {
        // Documented division-by-zero gap: the result is non-finite rather
        // than an error.
        let (with_wake, without_wake) = paired_tables(0.0, 5.0);
        let loss = local_wake_loss_pct(&with_wake, &without_wake, 0.0, 11.0);
        assert!(loss.is_some_and(|v| !v.is_finite()));
    }

    #[test]
    fn identical_tables_report_zero_loss() {
        let (_, without_wake) = paired_tables(100.0, 100.0);
        let with_wake = without_wake.clone();
        assert_eq!(
            local_wake_loss_pct(&with_wake, &without_wake, 0.0, 11.0),
            Some(0.0)
        );
    }
}
