//! Fixed workbook layout: sheet names and column positions.
//! The layout is validated against the observed header rows every time the
//! workbook is (re)loaded, so row/column indexing below never guesses.

use crate::errors::{AppError, AppResult};
use crate::store::workbook::Book;

pub const SHEET_RESTAURANTS: &str = "restaurant list";
pub const SHEET_VISITS: &str = "visit log";
pub const SHEET_REVIEWS: &str = "review log";

pub const RESTAURANT_HEADERS: [&str; 2] = ["no", "name"];
pub const REVIEW_HEADERS: [&str; 3] = ["restaurant", "timestamp", "review"];
pub const VISIT_DATE_HEADER: &str = "date";

/// Restaurant names live in the second column of the restaurant sheet.
pub const COL_RESTAURANT_NAME: usize = 1;
pub const COL_VISIT_DATE: usize = 0;
pub const COL_REVIEW_RESTAURANT: usize = 0;
pub const COL_REVIEW_TIMESTAMP: usize = 1;
pub const COL_REVIEW_BODY: usize = 2;

/// The validated layout of one loaded workbook. `people` keeps the raw
/// header cells (trimmed, gaps preserved) so a person's position maps
/// directly to their worksheet column.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub people: Vec<String>,
}

impl Layout {
    pub fn validate(book: &Book) -> AppResult<Layout> {
        let restaurants = book.sheet(SHEET_RESTAURANTS)?;
        if restaurants.rows.is_empty() {
            return Err(AppError::Schema(format!(
                "sheet '{SHEET_RESTAURANTS}' has no header row"
            )));
        }

        let reviews = book.sheet(SHEET_REVIEWS)?;
        match reviews.rows.first() {
            Some(header) if header.len() >= REVIEW_HEADERS.len() => {}
            _ => {
                return Err(AppError::Schema(format!(
                    "sheet '{SHEET_REVIEWS}' must have a {}-column header row",
                    REVIEW_HEADERS.len()
                )));
            }
        }

        let visits = book.sheet(SHEET_VISITS)?;
        let header = visits.rows.first().ok_or_else(|| {
            AppError::Schema(format!("sheet '{SHEET_VISITS}' has no header row"))
        })?;

        let label = header
            .first()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        if label != VISIT_DATE_HEADER {
            return Err(AppError::Schema(format!(
                "sheet '{SHEET_VISITS}' must start with a '{VISIT_DATE_HEADER}' column, found '{label}'"
            )));
        }

        let people = header[1..].iter().map(|p| p.trim().to_string()).collect();
        Ok(Layout { people })
    }

    /// Worksheet column of a person's visit cell (1 date column + header order).
    pub fn person_col(&self, person: &str) -> Option<usize> {
        let wanted = person.trim();
        self.people
            .iter()
            .position(|p| p == wanted)
            .map(|i| i + 1)
    }

    /// Person names in declared order, header gaps skipped.
    pub fn people(&self) -> Vec<String> {
        self.people
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect()
    }
}
