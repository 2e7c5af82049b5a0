// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the computed weekly layout.
pub struct ExportLogic;

impl ExportLogic {
    /// Compute the layout from the store and write it to `file`.
    ///
    /// - `format`: json (full layout) or csv (one row per placed session)
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let layout = Core::load_week_layout(pool, cfg)?;

        if layout.is_empty() {
            warning("No sessions found, nothing to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&layout, path)?,
            ExportFormat::Json => export_json(&layout, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} sessions → {}", layout.session_count(), path.display()),
        );

        Ok(())
    }
}
