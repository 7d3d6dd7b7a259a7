//! Shared analytics pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> validate -> normalize -> filter -> analytics
//!
//! The subcommands then focus on presentation (which blocks to print).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analytics::{market_expansion, revenue_growth, sales_forecast, strategic_kpis};
use crate::domain::{
    DataSource, Dataset, InsightsConfig, MarketExpansion, RevenueGrowth, SalesForecast,
    StrategicKpis,
};
use crate::error::AppError;
use crate::io::RowError;
use crate::normalize::SchemaReport;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub schema: SchemaReport,
    /// Data rows read from the source, before filtering.
    pub rows_loaded: usize,
    pub row_errors: Vec<RowError>,
    /// The normalized, filtered dataset the analytics were computed over.
    pub view: Dataset,
    pub kpis: StrategicKpis,
    pub growth: RevenueGrowth,
    pub expansion: MarketExpansion,
    pub forecast: SalesForecast,
}

/// Execute the full analytics pipeline and return the computed outputs.
pub fn run_insights(config: &InsightsConfig) -> Result<RunOutput, AppError> {
    // 1) Load the raw dataset.
    let (dataset, rows_loaded, row_errors) = match &config.source {
        DataSource::Csv(path) => {
            let ingested = crate::io::load_csv(path)?;
            (ingested.dataset, ingested.rows_read, ingested.row_errors)
        }
        DataSource::Url(url) => {
            let ingested = crate::data::fetch_csv(url)?;
            (ingested.dataset, ingested.rows_read, ingested.row_errors)
        }
        DataSource::Sample => {
            let dataset = crate::data::generate_sample(config.seed)?;
            let rows = dataset.len();
            (dataset, rows, Vec::new())
        }
    };

    // 2) Validate the schema; missing fatal columns abort the run.
    let schema = crate::normalize::validate(&dataset);
    if !schema.ok {
        return Err(AppError::input(format!(
            "Dataset is missing required column(s): {}",
            schema.missing.join(", ")
        )));
    }

    // 3) Backfill the canonical columns, then filter.
    let mut rng = StdRng::seed_from_u64(config.seed);
    let normalized = crate::normalize::normalize(dataset, &mut rng);
    let filtered = crate::filter::apply_filters(&normalized, &config.filters);
    let view = filtered.dataset;

    // 4) Analytics. Each is total: an empty view degrades, it never fails.
    let kpis = strategic_kpis(&view);
    let growth = revenue_growth(&view);
    let expansion = market_expansion(&view);
    let forecast = sales_forecast(&view, config.periods);

    Ok(RunOutput {
        schema,
        rows_loaded,
        row_errors,
        view,
        kpis,
        growth,
        expansion,
        forecast,
    })
}
