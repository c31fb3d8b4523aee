use crate::models::review::Review;
use crate::models::visit::VisitRecord;
use csv::Writer;
use std::path::Path;

/// Write the flattened visit log as CSV.
pub(crate) fn write_visits_csv(path: &Path, records: &[VisitRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "person", "restaurant"])?;
    for rec in records {
        wtr.write_record([&rec.date, &rec.person, &rec.restaurant])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the review log as CSV, sheet order preserved.
pub(crate) fn write_reviews_csv(path: &Path, reviews: &[Review]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["restaurant", "timestamp", "review"])?;
    for r in reviews {
        wtr.write_record([&r.restaurant, &r.timestamp, &r.review])?;
    }

    wtr.flush()?;
    Ok(())
}
