use crate::errors::{AppError, AppResult};
use crate::models::review::Review;
use crate::models::visit::VisitRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub(crate) fn write_visits_json(path: &Path, records: &[VisitRecord]) -> AppResult<()> {
    write_json(path, records)
}

pub(crate) fn write_reviews_json(path: &Path, reviews: &[Review]) -> AppResult<()> {
    write_json(path, reviews)
}

fn write_json<T: serde::Serialize>(path: &Path, data: &[T]) -> AppResult<()> {
    let json_data =
        serde_json::to_string_pretty(data).map_err(|e| AppError::Export(e.to_string()))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
