//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the canonical dataset model (`Record`, `ColumnSet`, `Dataset`)
//! - filter configuration (`FilterParams`, `Allowlist`)
//! - aggregation keys and summaries (`GroupKey`, `GroupStats`)
//! - analytics outputs (`RevenueGrowth`, `SalesForecast`, `MarketExpansion`,
//!   `StrategicKpis`)

pub mod types;

pub use types::*;
