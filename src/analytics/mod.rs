//! Pure analytics over a filtered dataset.
//!
//! Four calculators, each a total function: degenerate input (empty dataset,
//! too-short history, missing columns) produces an explicit empty or partial
//! result, never an error.

pub mod expansion;
pub mod forecast;
pub mod growth;
pub mod kpis;

pub use expansion::market_expansion;
pub use forecast::sales_forecast;
pub use growth::revenue_growth;
pub use kpis::strategic_kpis;
