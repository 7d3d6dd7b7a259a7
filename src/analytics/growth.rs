//! Month-over-month revenue growth.

use crate::agg::monthly_totals;
use crate::domain::{Dataset, RevenueGrowth};

/// Compute total and average monthly revenue growth, both as percentages.
///
/// - Total growth compares the last monthly total against the first; a zero
///   first month yields a 0 rate instead of a non-finite ratio.
/// - Average monthly growth is the arithmetic mean of consecutive
///   month-over-month rates. Pairs with a zero baseline have no defined rate
///   and contribute no term to the mean.
/// - Fewer than two months of history yields the zero-valued result.
pub fn revenue_growth(ds: &Dataset) -> RevenueGrowth {
    let monthly = monthly_totals(ds);
    if monthly.len() < 2 {
        return RevenueGrowth {
            monthly,
            ..RevenueGrowth::empty()
        };
    }

    let first = monthly.first().map(|p| p.total).unwrap_or(0.0);
    let last = monthly.last().map(|p| p.total).unwrap_or(0.0);
    let total_growth_pct = growth_rate(first, last).unwrap_or(0.0);

    let rates: Vec<f64> = monthly
        .windows(2)
        .filter_map(|pair| growth_rate(pair[0].total, pair[1].total))
        .collect();
    let avg_monthly_growth_pct = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    RevenueGrowth {
        total_growth_pct,
        avg_monthly_growth_pct,
        monthly,
    }
}

/// Percentage change from `base` to `next`; undefined for a zero baseline.
fn growth_rate(base: f64, next: f64) -> Option<f64> {
    if base == 0.0 {
        None
    } else {
        Some((next - base) / base * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnSet, Record};
    use chrono::NaiveDate;

    fn monthly_dataset(totals: &[f64]) -> Dataset {
        let records = totals
            .iter()
            .enumerate()
            .map(|(i, &total)| {
                let mut r = Record::from_sales(total);
                r.date = NaiveDate::from_ymd_opt(2024, i as u32 + 1, 15);
                r
            })
            .collect();
        Dataset {
            columns: ColumnSet {
                date: true,
                sales: true,
                ..ColumnSet::default()
            },
            records,
        }
    }

    #[test]
    fn growth_over_doubling_revenue() {
        // 100 → 150 → 200: total +100%, monthly rates +50% and +33.33…%.
        let g = revenue_growth(&monthly_dataset(&[100.0, 150.0, 200.0]));
        assert!((g.total_growth_pct - 100.0).abs() < 1e-9);
        let expected_avg = (50.0 + 100.0 / 3.0) / 2.0;
        assert!((g.avg_monthly_growth_pct - expected_avg).abs() < 1e-9);
        assert_eq!(g.monthly.len(), 3);
    }

    #[test]
    fn zero_baseline_yields_zero_rate() {
        let g = revenue_growth(&monthly_dataset(&[0.0, 500.0]));
        assert_eq!(g.total_growth_pct, 0.0);
        assert_eq!(g.avg_monthly_growth_pct, 0.0);
    }

    #[test]
    fn zero_baseline_pairs_contribute_no_average_term() {
        // 0 → 100 has no defined rate; only 100 → 200 (+100%) counts.
        let g = revenue_growth(&monthly_dataset(&[0.0, 100.0, 200.0]));
        assert_eq!(g.total_growth_pct, 0.0);
        assert!((g.avg_monthly_growth_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_month_is_degenerate() {
        let g = revenue_growth(&monthly_dataset(&[800.0]));
        assert_eq!(g.total_growth_pct, 0.0);
        assert_eq!(g.avg_monthly_growth_pct, 0.0);
        assert_eq!(g.monthly.len(), 1);
    }

    #[test]
    fn empty_dataset_is_degenerate() {
        let g = revenue_growth(&Dataset::default());
        assert_eq!(g, RevenueGrowth::empty());
    }

    #[test]
    fn declining_revenue_is_negative() {
        let g = revenue_growth(&monthly_dataset(&[200.0, 100.0]));
        assert!((g.total_growth_pct - -50.0).abs() < 1e-9);
        assert!((g.avg_monthly_growth_pct - -50.0).abs() < 1e-9);
    }
}
