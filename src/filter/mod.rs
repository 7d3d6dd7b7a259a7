//! Row filtering: date window plus category/region allowlists.
//!
//! Semantics:
//!
//! - all active criteria are combined with AND
//! - an [`Allowlist::All`] criterion and a criterion on an absent column are
//!   both no-ops
//! - rows with an unparseable date are dropped only when a date bound is
//!   active; an unbounded window keeps them
//! - an empty result is a valid outcome, not an error

use crate::domain::{Dataset, FilterParams};

/// A filtered view plus the row counts the run summary reports.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub dataset: Dataset,
    pub rows_before: usize,
    pub rows_after: usize,
}

/// Apply `params` to `ds`, producing a filtered copy.
///
/// The input dataset is left untouched so the caller can report both the
/// pre- and post-filter views.
pub fn apply_filters(ds: &Dataset, params: &FilterParams) -> FilterOutcome {
    let date_bounded = params.date_bounded();
    let category_active = ds.columns.category;
    let region_active = ds.columns.region;

    let records = ds
        .records
        .iter()
        .filter(|record| {
            if date_bounded {
                let Some(date) = record.date else {
                    return false;
                };
                if let Some(from) = params.date_from {
                    if date < from {
                        return false;
                    }
                }
                if let Some(to) = params.date_to {
                    if date > to {
                        return false;
                    }
                }
            }
            if category_active && !params.categories.permits(record.category.as_deref()) {
                return false;
            }
            if region_active && !params.regions.permits(record.region.as_deref()) {
                return false;
            }
            true
        })
        .cloned()
        .collect::<Vec<_>>();

    FilterOutcome {
        rows_before: ds.len(),
        rows_after: records.len(),
        dataset: Dataset {
            columns: ds.columns.clone(),
            records,
        },
    }
}
