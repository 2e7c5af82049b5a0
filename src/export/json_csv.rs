// src/export/json_csv.rs

use crate::core::layout::WeekLayout;
use crate::errors::AppResult;
use crate::export::model::layout_to_records;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the full layout as pretty-printed JSON.
pub(crate) fn export_json(layout: &WeekLayout, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(layout)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV record per placed session (header written by serde).
pub(crate) fn export_csv(layout: &WeekLayout, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for record in layout_to_records(layout) {
        wtr.serialize(record)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
