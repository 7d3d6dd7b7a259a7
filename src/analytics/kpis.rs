//! Strategic KPI summary.

use crate::agg::{distinct_categories, distinct_dates, distinct_regions};
use crate::domain::{Dataset, StrategicKpis};

/// Compute the executive summary metrics.
///
/// Always-present metrics come from the Sales column; the optional ones
/// follow column presence (`revenue_per_day` needs Date, `market_penetration`
/// needs Region, `product_diversity` needs Category). An empty dataset yields
/// zeros, not an error.
pub fn strategic_kpis(ds: &Dataset) -> StrategicKpis {
    let orders = ds.len();
    let total_revenue: f64 = ds.records.iter().map(|r| r.sales).sum();
    let avg_transaction = if orders == 0 {
        0.0
    } else {
        total_revenue / orders as f64
    };

    let revenue_per_day = if ds.columns.date {
        // The max(1, ..) guard keeps the rate defined when no row has a
        // valid date.
        let days = distinct_dates(ds).max(1);
        Some(total_revenue / days as f64)
    } else {
        None
    };

    let market_penetration = ds.columns.region.then(|| distinct_regions(ds));
    let product_diversity = ds.columns.category.then(|| distinct_categories(ds));

    StrategicKpis {
        total_revenue,
        avg_transaction,
        orders,
        revenue_per_day,
        market_penetration,
        product_diversity,
    }
}
