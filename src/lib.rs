//! `sales-insights` library crate.
//!
//! The binary (`insights`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., a future web dashboard, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod agg;
pub mod analytics;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod filter;
pub mod io;
pub mod math;
pub mod normalize;
pub mod report;
