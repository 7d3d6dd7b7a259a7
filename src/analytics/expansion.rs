//! Market-expansion rankings.

use crate::agg::group_by;
use crate::domain::{Dataset, GroupKey, GroupRow, MarketExpansion, Metric};

/// Number of groups each ranking keeps.
pub const RANK_N: usize = 3;

/// Rank regions and categories by total and average sales.
///
/// Each ranking is present only when the dataset carries the column it needs;
/// the result degrades to partial (or fully empty) rather than failing.
/// Rankings keep at most [`RANK_N`] groups; ties preserve the aggregation's
/// lexicographic group order.
pub fn market_expansion(ds: &Dataset) -> MarketExpansion {
    let mut out = MarketExpansion::default();

    if ds.columns.region {
        let rows = group_by(ds, GroupKey::Region, Metric::Sales);
        out.top_regions = Some(top_by_sum(&rows));
        out.growth_opportunities = Some(bottom_by_mean(&rows));
    }
    if ds.columns.category {
        let rows = group_by(ds, GroupKey::Category, Metric::Sales);
        out.top_categories = Some(top_by_sum(&rows));
        out.underperforming_categories = Some(bottom_by_mean(&rows));
    }

    out
}

/// Highest total sales first. Stable sort: equal sums keep their
/// lexicographic order.
fn top_by_sum(rows: &[GroupRow]) -> Vec<GroupRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.stats.sum.total_cmp(&a.stats.sum));
    ranked.truncate(RANK_N);
    ranked
}

/// Lowest average transaction first. Stable sort, same tie rule.
fn bottom_by_mean(rows: &[GroupRow]) -> Vec<GroupRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| a.stats.mean.total_cmp(&b.stats.mean));
    ranked.truncate(RANK_N);
    ranked
}
