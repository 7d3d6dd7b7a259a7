//! File I/O: CSV ingest and CSV/JSON export.

pub mod export;
pub mod ingest;

pub use export::{write_dataset_csv, write_insights_json};
pub use ingest::{IngestedData, RowError, load_csv, read_dataset};
