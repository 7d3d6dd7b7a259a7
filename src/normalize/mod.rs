//! Schema validation and canonical-column backfill.
//!
//! This module turns an arbitrarily-shaped tabular load into the canonical
//! schema the analytics expect:
//!
//! - **Fatal checks**: a dataset without Date, without Sales, or without both
//!   Category and Product cannot be analyzed and is rejected up front.
//! - **Backfills**: absent Region and Profit columns are synthesized (with a
//!   warning) instead of rejected, so partially-shaped exports still work.
//!
//! All randomness flows through an injected, seeded generator: backfills are
//! generated once per load and reproducible in tests.

use rand::Rng;
use rand::rngs::StdRng;

use crate::domain::Dataset;

/// Region values used when backfilling an absent Region column.
pub const BACKFILL_REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Profit-margin range for the Profit backfill (`Profit = Sales × margin`).
pub const PROFIT_MARGIN_RANGE: (f64, f64) = (0.15, 0.25);

/// Outcome of schema validation.
#[derive(Debug, Clone)]
pub struct SchemaReport {
    /// False when a fatal column is missing; the dataset must be rejected.
    pub ok: bool,
    /// Missing columns that make the dataset unusable.
    pub missing: Vec<String>,
    /// Non-fatal gaps that the normalizer will backfill.
    pub warnings: Vec<String>,
}

/// Validate column presence against the canonical schema.
///
/// Fatal: no Date, no Sales, or neither Category nor Product. Warnings:
/// absent Region or Profit (backfilled by [`normalize`], not rejected).
pub fn validate(ds: &Dataset) -> SchemaReport {
    let cols = &ds.columns;
    let mut missing = Vec::new();
    let mut warnings = Vec::new();

    if !cols.date {
        missing.push("Date".to_string());
    }
    if !cols.sales {
        missing.push("Sales".to_string());
    }
    if !cols.category && !cols.product {
        missing.push("Category/Product".to_string());
    }

    if !cols.region {
        warnings.push("Region column absent; backfilling with random regions.".to_string());
    }
    if !cols.profit && cols.sales {
        warnings.push("Profit column absent; estimating from Sales.".to_string());
    }

    SchemaReport {
        ok: missing.is_empty(),
        missing,
        warnings,
    }
}

/// Backfill the canonical schema.
///
/// - Category and Product alias each other: whichever is missing is
///   synthesized from the one present.
/// - An absent Region column is filled with a uniform draw from
///   [`BACKFILL_REGIONS`] per record.
/// - An absent Profit column is filled with `round(Sales × margin, 2)` where
///   the margin is drawn per record from [`PROFIT_MARGIN_RANGE`].
///
/// Idempotent: once every canonical column is present, a second pass changes
/// nothing (and draws nothing from the generator).
pub fn normalize(mut ds: Dataset, rng: &mut StdRng) -> Dataset {
    alias_category_product(&mut ds);

    if !ds.columns.region {
        for record in &mut ds.records {
            let idx = rng.gen_range(0..BACKFILL_REGIONS.len());
            record.region = Some(BACKFILL_REGIONS[idx].to_string());
        }
        ds.columns.region = true;
    }

    if !ds.columns.profit && ds.columns.sales {
        let (lo, hi) = PROFIT_MARGIN_RANGE;
        for record in &mut ds.records {
            let margin = rng.gen_range(lo..=hi);
            record.profit = Some(round2(record.sales * margin));
        }
        ds.columns.profit = true;
    }

    ds
}

fn alias_category_product(ds: &mut Dataset) {
    let cols = ds.columns.clone();
    if cols.category && !cols.product {
        for record in &mut ds.records {
            record.product = record.category.clone();
        }
        ds.columns.product = true;
    } else if cols.product && !cols.category {
        for record in &mut ds.records {
            record.category = record.product.clone();
        }
        ds.columns.category = true;
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
