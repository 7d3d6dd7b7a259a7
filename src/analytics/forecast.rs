//! Linear-trend sales forecast.

use crate::agg::monthly_totals;
use crate::domain::{Dataset, SalesForecast};
use crate::math::fit_trend_line;

/// Minimum number of distinct months required to fit a trend.
pub const MIN_HISTORY_MONTHS: usize = 3;

/// Fit a straight line to the monthly sales history and extrapolate it
/// `periods` months forward.
///
/// Months are indexed sequentially from 0 in chronological order; the
/// forecast continues that indexing (`future_index`). With fewer than
/// [`MIN_HISTORY_MONTHS`] distinct months, or a zero `periods`, the result
/// is [`SalesForecast::empty`].
pub fn sales_forecast(ds: &Dataset, periods: usize) -> SalesForecast {
    let history = monthly_totals(ds);
    if history.len() < MIN_HISTORY_MONTHS || periods == 0 {
        return SalesForecast {
            history,
            ..SalesForecast::empty()
        };
    }

    let ys: Vec<f64> = history.iter().map(|p| p.total).collect();
    let Some(line) = fit_trend_line(&ys) else {
        return SalesForecast {
            history,
            ..SalesForecast::empty()
        };
    };

    let start = history.len();
    let future_index: Vec<usize> = (start..start + periods).collect();
    let forecast: Vec<f64> = future_index.iter().map(|&i| line.value_at(i)).collect();

    SalesForecast {
        history,
        forecast,
        future_index,
        slope: line.slope,
        intercept: line.intercept,
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
                r.date = NaiveDate::from_ymd_opt(2024, i as u32 + 1, 10);
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
    fn extrapolates_an_exact_linear_history() {
        // Monthly totals 100, 110, …, 210 (12 months, slope 10).
        let totals: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
        let f = sales_forecast(&monthly_dataset(&totals), 3);

        assert!((f.slope - 10.0).abs() < 1e-6);
        assert!((f.intercept - 100.0).abs() < 1e-6);
        assert_eq!(f.future_index, vec![12, 13, 14]);
        let expected = [220.0, 230.0, 240.0];
        for (got, want) in f.forecast.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn short_history_yields_empty_forecast() {
        let f = sales_forecast(&monthly_dataset(&[100.0, 200.0]), 6);
        assert!(f.is_empty());
        assert_eq!(f.history.len(), 2);
    }

    #[test]
    fn zero_periods_yields_empty_forecast() {
        let f = sales_forecast(&monthly_dataset(&[100.0, 200.0, 300.0, 400.0]), 0);
        assert!(f.is_empty());
        assert_eq!(f.history.len(), 4);
    }

    #[test]
    fn forecast_length_matches_periods() {
        let f = sales_forecast(&monthly_dataset(&[10.0, 20.0, 15.0, 30.0]), 6);
        assert_eq!(f.forecast.len(), 6);
        assert_eq!(f.future_index.len(), 6);
        assert_eq!(f.future_index[0], 4);
    }
}
