//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the dataset (file, URL, or built-in sample)
//! - validates, normalizes, and filters it
//! - computes the analytics
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ReportArgs};
use crate::domain::{Allowlist, DataSource, FilterParams, InsightsConfig, InsightsFile};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `insights` binary.
pub fn run() -> Result<(), AppError> {
    // We want `insights` and `insights --csv data.csv` to behave like
    // `insights report ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args, OutputMode::Full),
        Command::Kpis(args) => handle_report(args, OutputMode::KpisOnly),
        Command::Forecast(args) => handle_report(args, OutputMode::ForecastOnly),
        Command::Expansion(args) => handle_report(args, OutputMode::ExpansionOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    KpisOnly,
    ForecastOnly,
    ExpansionOnly,
}

fn handle_report(args: ReportArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = config_from_args(&args);
    let run = pipeline::run_insights(&config)?;

    if mode == OutputMode::Full {
        println!(
            "{}",
            crate::report::format_run_summary(
                &source_label(&config.source),
                run.rows_loaded,
                &run.row_errors,
                &run.schema.warnings,
                run.view.len(),
            )
        );
    }

    match mode {
        OutputMode::Full => {
            print!("{}", crate::report::format_kpis(&run.kpis));
            print!("{}", crate::report::format_growth(&run.growth));
            print!("{}", crate::report::format_expansion(&run.expansion));
            print!("{}", crate::report::format_forecast(&run.forecast));
        }
        OutputMode::KpisOnly => print!("{}", crate::report::format_kpis(&run.kpis)),
        OutputMode::ForecastOnly => print!("{}", crate::report::format_forecast(&run.forecast)),
        OutputMode::ExpansionOnly => print!("{}", crate::report::format_expansion(&run.expansion)),
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_dataset_csv(&run.view, path)?;
    }
    if let Some(path) = &config.export_insights {
        let insights = InsightsFile {
            tool: format!("insights {}", env!("CARGO_PKG_VERSION")),
            rows_loaded: run.rows_loaded,
            rows_after_filter: run.view.len(),
            kpis: run.kpis.clone(),
            growth: run.growth.clone(),
            expansion: run.expansion.clone(),
            forecast: run.forecast.clone(),
        };
        crate::io::write_insights_json(&insights, path)?;
    }

    Ok(())
}

/// Build the pipeline configuration from parsed flags.
pub fn config_from_args(args: &ReportArgs) -> InsightsConfig {
    let source = match (&args.csv, &args.url) {
        (Some(path), _) => DataSource::Csv(path.clone()),
        (None, Some(url)) => DataSource::Url(url.clone()),
        (None, None) => DataSource::Sample,
    };

    InsightsConfig {
        source,
        seed: args.seed,
        filters: FilterParams {
            date_from: args.from,
            date_to: args.to,
            categories: Allowlist::from_values(&args.categories),
            regions: Allowlist::from_values(&args.regions),
        },
        periods: args.periods,
        export_csv: args.export.clone(),
        export_insights: args.export_insights.clone(),
    }
}

fn source_label(source: &DataSource) -> String {
    match source {
        DataSource::Csv(path) => path.display().to_string(),
        DataSource::Url(url) => url.clone(),
        DataSource::Sample => "built-in sample".to_string(),
    }
}

/// Rewrite argv so `insights` defaults to `insights report`.
///
/// Rules:
/// - `insights`                        -> `insights report`
/// - `insights --csv data.csv ...`     -> `insights report --csv data.csv ...`
/// - `insights --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "kpis" | "forecast" | "expansion");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
