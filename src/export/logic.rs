use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::{write_reviews_csv, write_visits_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::{write_reviews_json, write_visits_json};
use crate::export::notify_export_success;
use crate::store::SheetStore;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic: pull the requested log from the store and hand
/// it to the format writer.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        reviews: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        if reviews {
            let entries = store.list_reviews(None)?;
            if entries.is_empty() {
                warning("Review log is empty, exporting headers only.");
            }
            match format {
                ExportFormat::Csv => write_reviews_csv(path, &entries)?,
                ExportFormat::Json => write_reviews_json(path, &entries)?,
            }
            notify_export_success("Review log", path);
        } else {
            let records = store.all_visits()?.flatten();
            if records.is_empty() {
                warning("Visit log is empty, exporting headers only.");
            }
            match format {
                ExportFormat::Csv => write_visits_csv(path, &records)?,
                ExportFormat::Json => write_visits_json(path, &records)?,
            }
            notify_export_success("Visit log", path);
        }

        Ok(())
    }
}
