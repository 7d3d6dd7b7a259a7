//! Dataset and insights export.

use std::fs::File;
use std::path::Path;

use crate::domain::{Dataset, InsightsFile};
use crate::error::AppError;

/// Write the dataset back out as CSV with canonical headers.
///
/// Only the canonical columns present in the dataset are written (in the
/// fixed order Date, Sales, Region, Category, Product, Profit), followed by
/// any passthrough extras. Missing values become empty cells.
pub fn write_dataset_csv(ds: &Dataset, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create {}: {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    let cols = &ds.columns;
    let mut header: Vec<&str> = Vec::new();
    if cols.date {
        header.push("Date");
    }
    if cols.sales {
        header.push("Sales");
    }
    if cols.region {
        header.push("Region");
    }
    if cols.category {
        header.push("Category");
    }
    if cols.product {
        header.push("Product");
    }
    if cols.profit {
        header.push("Profit");
    }
    for extra in &cols.extras {
        header.push(extra);
    }
    writer
        .write_record(&header)
        .map_err(|e| AppError::internal(format!("Failed to write CSV header: {e}")))?;

    for record in &ds.records {
        let mut row: Vec<String> = Vec::with_capacity(header.len());
        if cols.date {
            row.push(record.date.map(|d| d.to_string()).unwrap_or_default());
        }
        if cols.sales {
            row.push(format!("{:.2}", record.sales));
        }
        if cols.region {
            row.push(record.region.clone().unwrap_or_default());
        }
        if cols.category {
            row.push(record.category.clone().unwrap_or_default());
        }
        if cols.product {
            row.push(record.product.clone().unwrap_or_default());
        }
        if cols.profit {
            row.push(
                record
                    .profit
                    .map(|p| format!("{p:.2}"))
                    .unwrap_or_default(),
            );
        }
        row.extend(record.extras.iter().cloned());
        writer
            .write_record(&row)
            .map_err(|e| AppError::internal(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::internal(format!("Failed to flush {}: {e}", path.display())))
}

/// Write the computed analytics as pretty-printed JSON.
pub fn write_insights_json(insights: &InsightsFile, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create {}: {e}", path.display())))?;
    serde_json::to_writer_pretty(file, insights)
        .map_err(|e| AppError::internal(format!("Failed to write {}: {e}", path.display())))
}
