//! Spreadsheet export.
//!
//! Serializes the displayed (label, value) rows into a two-column CSV file
//! at a caller-chosen path. Pure data serialization; the summary itself is
//! never modified.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::StatsSummary;

/// Writes `summary` as a two-column CSV (`Statistic,Value` header plus one
/// line per statistic, in display order).
pub fn export_csv(summary: &StatsSummary, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["Statistic", "Value"])?;
    for row in summary.rows() {
        writer.write_record([row.label, row.value.as_str()])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
