//! Remote CSV fetch.
//!
//! One blocking GET before the pipeline starts; the body is handed to the
//! regular CSV ingest path, so a remote dataset behaves exactly like a local
//! file from then on.

use std::io::Cursor;

use reqwest::blocking::Client;

use crate::error::AppError;
use crate::io::{IngestedData, read_dataset};

/// Fetch a CSV dataset from `url` and parse it.
pub fn fetch_csv(url: &str) -> Result<IngestedData, AppError> {
    let client = Client::new();
    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::input(format!("Request to {url} failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::input(format!(
            "Request to {url} failed with status {}.",
            resp.status()
        )));
    }

    let body = resp
        .text()
        .map_err(|e| AppError::input(format!("Failed to read response from {url}: {e}")))?;

    read_dataset(Cursor::new(body))
}
