//! Synthetic sample dataset.
//!
//! One row per day of 2024: a date, a normally distributed sales figure, a
//! region, a category and a product. The profit column is deliberately left
//! out so the normalizer's estimation path is exercised on every sample run.

use chrono::{Days, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::domain::{ColumnSet, Dataset, Record};
use crate::error::AppError;
use crate::normalize::BACKFILL_REGIONS;

/// Categories used by the sample generator.
pub const SAMPLE_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Food", "Books"];

/// Products used by the sample generator.
pub const SAMPLE_PRODUCTS: [&str; 5] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
];

const SALES_MEAN: f64 = 1000.0;
const SALES_STD_DEV: f64 = 300.0;

/// Generate the deterministic sample dataset for `seed`.
///
/// Sales amounts are drawn from `Normal(1000, 300)`, clamped at 0 and
/// rounded to cents. The same seed always produces the same dataset.
pub fn generate_sample(seed: u64) -> Result<Dataset, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(SALES_MEAN, SALES_STD_DEV)
        .map_err(|e| AppError::internal(format!("Sales distribution error: {e}")))?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .ok_or_else(|| AppError::internal("Invalid sample start date".to_string()))?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 31)
        .ok_or_else(|| AppError::internal("Invalid sample end date".to_string()))?;

    let mut records = Vec::new();
    let mut date = start;
    while date <= end {
        let raw: f64 = normal.sample(&mut rng);
        let sales = (raw.max(0.0) * 100.0).round() / 100.0;
        records.push(Record {
            date: Some(date),
            sales,
            region: BACKFILL_REGIONS.choose(&mut rng).map(|r| r.to_string()),
            category: SAMPLE_CATEGORIES.choose(&mut rng).map(|c| c.to_string()),
            product: SAMPLE_PRODUCTS.choose(&mut rng).map(|p| p.to_string()),
            profit: None,
            extras: Vec::new(),
        });
        date = match date.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(Dataset {
        columns: ColumnSet {
            date: true,
            sales: true,
            region: true,
            category: true,
            product: true,
            profit: false,
            extras: Vec::new(),
        },
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_day_of_2024() {
        let ds = generate_sample(42).unwrap();
        // 2024 is a leap year.
        assert_eq!(ds.len(), 366);
        assert_eq!(ds.records[0].date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(ds.records[365].date, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate_sample(42).unwrap(), generate_sample(42).unwrap());
        assert_ne!(generate_sample(42).unwrap(), generate_sample(43).unwrap());
    }

    #[test]
    fn values_stay_in_expected_domains() {
        let ds = generate_sample(7).unwrap();
        for r in &ds.records {
            assert!(r.sales >= 0.0);
            assert!(SAMPLE_CATEGORIES.contains(&r.category.as_deref().unwrap()));
            assert!(SAMPLE_PRODUCTS.contains(&r.product.as_deref().unwrap()));
            assert!(r.profit.is_none());
        }
    }
}
