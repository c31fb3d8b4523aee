//! Visit log models: the date × person grid and its flattened form.
//! These are thin projections of the `visit log` worksheet.

use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// One (date, person, restaurant) tuple from the visit grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRecord {
    pub date: String, // ⇔ visit log col 1 (TEXT "YYYY-MM-DD")
    pub person: String,
    pub restaurant: String,
}

impl VisitRecord {
    /// Parsed date, or None when the cell does not hold `YYYY-MM-DD`.
    /// Cells are only trimmed on read, so hand-edited rows may not parse.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.date)
    }
}

/// One row of the visit grid: a date plus one cell per person column.
#[derive(Debug, Clone)]
pub struct VisitRow {
    pub date: String,
    pub cells: Vec<String>,
}

/// The date × person matrix recording which restaurant each person visited
/// on which date. `people` preserves the header-row order, gaps included,
/// so cell positions stay aligned with the worksheet columns.
#[derive(Debug, Clone, Default)]
pub struct VisitGrid {
    pub people: Vec<String>,
    pub rows: Vec<VisitRow>,
}

impl VisitGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reshape the grid into flat (date, person, restaurant) tuples,
    /// discarding empty cells and unnamed columns.
    pub fn flatten(&self) -> Vec<VisitRecord> {
        let mut out = Vec::new();
        for row in &self.rows {
            for (idx, person) in self.people.iter().enumerate() {
                if person.is_empty() {
                    continue;
                }
                let cell = row.cells.get(idx).map(String::as_str).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                out.push(VisitRecord {
                    date: row.date.clone(),
                    person: person.clone(),
                    restaurant: cell.to_string(),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> VisitGrid {
        VisitGrid {
            people: vec!["Kim".into(), String::new(), "Lee".into()],
            rows: vec![
                VisitRow {
                    date: "2024-01-01".into(),
                    cells: vec!["A".into(), "ghost".into(), String::new()],
                },
                VisitRow {
                    date: "2024-01-02".into(),
                    cells: vec![String::new(), String::new(), "B".into()],
                },
            ],
        }
    }

    #[test]
    fn flatten_skips_empty_cells_and_unnamed_columns() {
        let records = grid().flatten();
        assert_eq!(
            records,
            vec![
                VisitRecord {
                    date: "2024-01-01".into(),
                    person: "Kim".into(),
                    restaurant: "A".into(),
                },
                VisitRecord {
                    date: "2024-01-02".into(),
                    person: "Lee".into(),
                    restaurant: "B".into(),
                },
            ]
        );
    }

    #[test]
    fn parsed_date_rejects_garbage() {
        let rec = VisitRecord {
            date: "someday".into(),
            person: "Kim".into(),
            restaurant: "A".into(),
        };
        assert!(rec.parsed_date().is_none());
    }
}
