//! Command-line parsing for the sales insights tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the analytics code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "insights", version, about = "Sales performance analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full report: KPIs, growth, expansion rankings, and forecast.
    Report(ReportArgs),
    /// Print the strategic KPI block only (useful for scripting).
    Kpis(ReportArgs),
    /// Print the sales forecast only.
    Forecast(ReportArgs),
    /// Print the market-expansion rankings only.
    Expansion(ReportArgs),
}

/// Common options shared by every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Load the dataset from a local CSV file.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Fetch the dataset from a raw CSV URL.
    #[arg(long, value_name = "URL", conflicts_with = "csv")]
    pub url: Option<String>,

    /// Random seed for sample generation and column backfills.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Keep rows on or after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Keep rows on or before this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Keep only these categories (repeatable; 'All' disables the filter).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Keep only these regions (repeatable; 'All' disables the filter).
    #[arg(long = "region", value_name = "NAME")]
    pub regions: Vec<String>,

    /// Forecast horizon in months.
    #[arg(long, default_value_t = 6)]
    pub periods: usize,

    /// Export the filtered rows to CSV.
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export the computed analytics to JSON.
    #[arg(long = "export-insights", value_name = "FILE")]
    pub export_insights: Option<PathBuf>,
}
