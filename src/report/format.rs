//! Formatted terminal output for the run summary and each analytics block.

use crate::domain::{MarketExpansion, RevenueGrowth, SalesForecast, StrategicKpis};
use crate::io::RowError;

/// Format the run header: source, data quality, and filter effect.
pub fn format_run_summary(
    source: &str,
    rows_loaded: usize,
    row_errors: &[RowError],
    warnings: &[String],
    rows_after_filter: usize,
) -> String {
    let mut out = String::new();

    out.push_str("=== insights - Sales Performance Report ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Rows: {rows_loaded} loaded | {rows_after_filter} after filters\n"
    ));

    if !row_errors.is_empty() {
        out.push_str(&format!("Data quality: {} bad cell(s)\n", row_errors.len()));
        for err in row_errors.iter().take(5) {
            out.push_str(&format!("  line {}: {}\n", err.line, err.message));
        }
        if row_errors.len() > 5 {
            out.push_str(&format!("  ... and {} more\n", row_errors.len() - 5));
        }
    }
    for warning in warnings {
        out.push_str(&format!("Note: {warning}\n"));
    }
    out.push('\n');

    out
}

/// Format the strategic KPI block.
pub fn format_kpis(kpis: &StrategicKpis) -> String {
    let mut out = String::new();

    out.push_str("Strategic KPIs:\n");
    out.push_str(&format!("- Total revenue   : {}\n", fmt_money(kpis.total_revenue)));
    out.push_str(&format!("- Avg transaction : {}\n", fmt_money(kpis.avg_transaction)));
    out.push_str(&format!("- Orders          : {}\n", kpis.orders));
    if let Some(rate) = kpis.revenue_per_day {
        out.push_str(&format!("- Revenue per day : {}\n", fmt_money(rate)));
    }
    if let Some(regions) = kpis.market_penetration {
        out.push_str(&format!("- Regions served  : {regions}\n"));
    }
    if let Some(categories) = kpis.product_diversity {
        out.push_str(&format!("- Categories sold : {categories}\n"));
    }
    out.push('\n');

    out
}

/// Format the revenue-growth block.
pub fn format_growth(growth: &RevenueGrowth) -> String {
    let mut out = String::new();

    out.push_str("Revenue growth:\n");
    if growth.monthly.len() < 2 {
        out.push_str("- Not enough monthly history to measure growth.\n\n");
        return out;
    }

    out.push_str(&format!("- Total growth      : {:+.1}%\n", growth.total_growth_pct));
    out.push_str(&format!(
        "- Avg monthly growth: {:+.1}%\n",
        growth.avg_monthly_growth_pct
    ));
    out.push_str(&format!(
        "- Months            : {} ({} .. {})\n",
        growth.monthly.len(),
        growth.monthly[0].label(),
        growth.monthly[growth.monthly.len() - 1].label(),
    ));
    out.push('\n');

    out
}

/// Format the market-expansion rankings.
pub fn format_expansion(expansion: &MarketExpansion) -> String {
    let mut out = String::new();

    out.push_str("Market expansion:\n");
    if expansion.is_empty() {
        out.push_str("- No region or category data available.\n\n");
        return out;
    }

    if let Some(rows) = &expansion.top_regions {
        out.push_str("Top regions by revenue:\n");
        out.push_str(&format_group_table(rows));
    }
    if let Some(rows) = &expansion.growth_opportunities {
        out.push_str("Growth opportunities (lowest avg transaction):\n");
        out.push_str(&format_group_table(rows));
    }
    if let Some(rows) = &expansion.top_categories {
        out.push_str("Top categories by revenue:\n");
        out.push_str(&format_group_table(rows));
    }
    if let Some(rows) = &expansion.underperforming_categories {
        out.push_str("Underperforming categories (lowest avg transaction):\n");
        out.push_str(&format_group_table(rows));
    }

    out
}

/// Format the forecast block.
pub fn format_forecast(forecast: &SalesForecast) -> String {
    let mut out = String::new();

    out.push_str("Sales forecast:\n");
    if forecast.is_empty() {
        out.push_str("- Need at least 3 months of history to forecast.\n\n");
        return out;
    }

    out.push_str(&format!(
        "- Trend: {} per month (intercept {})\n",
        fmt_money(forecast.slope),
        fmt_money(forecast.intercept),
    ));
    for (idx, value) in forecast.future_index.iter().zip(&forecast.forecast) {
        out.push_str(&format!("- Month +{:<2}: {}\n", idx + 1 - forecast.history.len(), fmt_money(*value)));
    }
    out.push('\n');

    out
}

fn format_group_table(rows: &[crate::domain::GroupRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>14} {:>14} {:>8}\n",
        "group", "total", "avg", "rows"
    ));
    out.push_str(&format!("{:-<20} {:-<14} {:-<14} {:-<8}\n", "", "", "", ""));
    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>14} {:>14} {:>8}\n",
            truncate(&row.key, 20),
            fmt_money(row.stats.sum),
            fmt_money(row.stats.mean),
            row.stats.count,
        ));
    }
    out.push('\n');
    out
}

fn fmt_money(v: f64) -> String {
    format!("${v:.2}")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
