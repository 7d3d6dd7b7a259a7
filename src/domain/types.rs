//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during filtering and aggregation
//! - exported to JSON/CSV
//! - consumed directly by a presentation layer (tables, chart-ready arrays)

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

/// One row of tabular sales data after load-time parsing.
///
/// Every canonical field except `sales` is optional: presence is tracked at
/// dataset level by [`ColumnSet`], and per-record absence (an empty cell, an
/// unparseable date) is a missing value, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Calendar date; `None` when the cell was empty or failed to parse.
    pub date: Option<NaiveDate>,
    /// Sales amount. Non-numeric input is coerced to 0 at load time.
    pub sales: f64,
    pub region: Option<String>,
    pub category: Option<String>,
    pub product: Option<String>,
    pub profit: Option<f64>,
    /// Values for unrecognized columns, aligned with [`ColumnSet::extras`].
    pub extras: Vec<String>,
}

impl Record {
    /// A record with only a sales figure; convenient for tests and builders.
    pub fn from_sales(sales: f64) -> Self {
        Record {
            date: None,
            sales,
            region: None,
            category: None,
            product: None,
            profit: None,
            extras: Vec::new(),
        }
    }
}

/// Capability descriptor: which canonical columns the dataset carries.
///
/// Produced once at load time and updated by the normalizer; downstream code
/// consults these flags instead of probing individual records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSet {
    pub date: bool,
    pub sales: bool,
    pub region: bool,
    pub category: bool,
    pub product: bool,
    pub profit: bool,
    /// Original header names of passthrough columns, in input order.
    pub extras: Vec<String>,
}

/// An ordered collection of records sharing one column set.
///
/// Treated as immutable after normalization; filtering produces a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: ColumnSet,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Categorical include-list for one filter dimension.
///
/// `All` is the "match all" sentinel: it behaves exactly like no filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Allowlist {
    All,
    Only(BTreeSet<String>),
}

impl Allowlist {
    /// Build an allowlist from user-supplied values.
    ///
    /// An empty list, or any value equal to `all` (case-insensitive), yields
    /// the match-all sentinel — mirroring the `['All']` default of the
    /// dashboard multi-selects this replaces.
    pub fn from_values(values: &[String]) -> Self {
        if values.is_empty() || values.iter().any(|v| v.trim().eq_ignore_ascii_case("all")) {
            return Allowlist::All;
        }
        Allowlist::Only(values.iter().map(|v| v.trim().to_string()).collect())
    }

    /// Whether a record's value passes this allowlist.
    ///
    /// A missing value only passes the match-all sentinel.
    pub fn permits(&self, value: Option<&str>) -> bool {
        match self {
            Allowlist::All => true,
            Allowlist::Only(set) => value.is_some_and(|v| set.contains(v.trim())),
        }
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Allowlist::All
    }
}

/// Immutable filter configuration: inclusive date bounds plus categorical
/// allowlists. Absent bounds mean unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub categories: Allowlist,
    pub regions: Allowlist,
}

impl FilterParams {
    /// True when either date bound is set; records with a missing date are
    /// dropped only in that case.
    pub fn date_bounded(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }
}

/// Grouping dimension used to bucket rows before summarizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// Calendar month (`YYYY-MM`), chronological order.
    Month,
    /// Calendar day, chronological order.
    Day,
    /// Region value, lexicographic order.
    Region,
    /// Category value, lexicographic order.
    Category,
    /// (Region, Category) pair, lexicographic order.
    RegionCategory,
    /// Day-of-week name, fixed Monday→Sunday order.
    Weekday,
    /// Month name, fixed January→December order.
    MonthName,
}

/// Which numeric column an aggregation summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sales,
    Profit,
}

/// Per-group summary over the chosen metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub sum: f64,
    pub mean: f64,
    pub count: usize,
}

/// One group of an aggregation, in the key's defined order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: String,
    pub stats: GroupStats,
}

/// One month of aggregated sales, used by the growth and forecast analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

impl MonthlyPoint {
    /// `YYYY-MM` display label.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Output of the revenue-growth calculator.
///
/// Both rates are percentages. A zero-valued first month yields a total
/// growth of 0 rather than a non-finite ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueGrowth {
    pub total_growth_pct: f64,
    pub avg_monthly_growth_pct: f64,
    pub monthly: Vec<MonthlyPoint>,
}

impl RevenueGrowth {
    pub fn empty() -> Self {
        RevenueGrowth {
            total_growth_pct: 0.0,
            avg_monthly_growth_pct: 0.0,
            monthly: Vec::new(),
        }
    }
}

/// Output of the linear-trend forecaster.
///
/// `future_index` holds the 0-based sequential month indices the forecast
/// values correspond to (continuing the history's indexing). All series are
/// empty when the history has fewer than three distinct months.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesForecast {
    pub history: Vec<MonthlyPoint>,
    pub forecast: Vec<f64>,
    pub future_index: Vec<usize>,
    pub slope: f64,
    pub intercept: f64,
}

impl SalesForecast {
    pub fn empty() -> Self {
        SalesForecast {
            history: Vec::new(),
            forecast: Vec::new(),
            future_index: Vec::new(),
            slope: 0.0,
            intercept: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}

/// Output of the market-expansion ranker.
///
/// Each field is present only when the dataset carries the columns needed to
/// compute it; absence is a partial result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketExpansion {
    /// Top regions by total sales, descending.
    pub top_regions: Option<Vec<GroupRow>>,
    /// Regions with the lowest average transaction value, ascending.
    pub growth_opportunities: Option<Vec<GroupRow>>,
    /// Top categories by total sales, descending.
    pub top_categories: Option<Vec<GroupRow>>,
    /// Categories with the lowest average transaction value, ascending.
    pub underperforming_categories: Option<Vec<GroupRow>>,
}

impl MarketExpansion {
    pub fn is_empty(&self) -> bool {
        self.top_regions.is_none() && self.top_categories.is_none()
    }
}

/// Executive summary metrics.
///
/// Optional fields follow column presence: `revenue_per_day` needs Date,
/// `market_penetration` needs Region, `product_diversity` needs Category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategicKpis {
    pub total_revenue: f64,
    pub avg_transaction: f64,
    /// Number of rows contributing to the KPIs.
    pub orders: usize,
    pub revenue_per_day: Option<f64>,
    /// Count of distinct regions served.
    pub market_penetration: Option<usize>,
    /// Count of distinct categories sold.
    pub product_diversity: Option<usize>,
}

/// Where the raw dataset comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local CSV file.
    Csv(PathBuf),
    /// Raw CSV fetched over HTTP (e.g. a GitHub raw link).
    Url(String),
    /// Built-in synthetic dataset (one row per day of 2024).
    Sample,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct InsightsConfig {
    pub source: DataSource,
    /// Seed for all randomness: sample generation and normalizer backfills.
    pub seed: u64,
    pub filters: FilterParams,
    /// Forecast horizon in months.
    pub periods: usize,
    /// Export the filtered rows to CSV.
    pub export_csv: Option<PathBuf>,
    /// Export the computed analytics to JSON.
    pub export_insights: Option<PathBuf>,
}

/// Portable serialization of one run's computed analytics (JSON export).
#[derive(Debug, Clone, Serialize)]
pub struct InsightsFile {
    pub tool: String,
    pub rows_loaded: usize,
    pub rows_after_filter: usize,
    pub kpis: StrategicKpis,
    pub growth: RevenueGrowth,
    pub expansion: MarketExpansion,
    pub forecast: SalesForecast,
}
