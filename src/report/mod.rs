//! Terminal report formatting.
//!
//! We keep formatting code in one place so:
//! - the analytics stay clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::{
    format_expansion, format_forecast, format_growth, format_kpis, format_run_summary,
};
