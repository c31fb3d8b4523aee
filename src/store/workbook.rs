//! Raw workbook I/O: the three-sheet grid as plain string cells.
//! Reading goes through calamine, writing through rust_xlsxwriter, so a
//! save is always a full rewrite of the file.

use crate::errors::{AppError, AppResult};
use crate::store::schema;
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Write a single cell, growing the grid as needed. Surrounding cells
    /// are left untouched.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        while self.rows.len() <= row {
            self.rows.push(Vec::new());
        }
        let cells = &mut self.rows[row];
        while cells.len() <= col {
            cells.push(String::new());
        }
        cells[col] = value.to_string();
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// In-memory image of the whole workbook. Disposable: rebuilt from disk on
/// every cache miss and thrown away after a write.
#[derive(Debug, Clone)]
pub struct Book {
    pub sheets: Vec<Sheet>,
}

impl Book {
    pub fn sheet(&self, name: &str) -> AppResult<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::SheetMissing(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> AppResult<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::SheetMissing(name.to_string()))
    }

    /// A new workbook with the three sheets and their header rows.
    pub fn starter() -> Book {
        let mut restaurants = Sheet::new(schema::SHEET_RESTAURANTS);
        restaurants.push_row(
            schema::RESTAURANT_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
        );

        let mut visits = Sheet::new(schema::SHEET_VISITS);
        visits.push_row(vec![schema::VISIT_DATE_HEADER.to_string()]);

        let mut reviews = Sheet::new(schema::SHEET_REVIEWS);
        reviews.push_row(
            schema::REVIEW_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
        );

        Book {
            sheets: vec![restaurants, visits, reviews],
        }
    }

    pub fn load(path: &Path) -> AppResult<Book> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let names = workbook.sheet_names().to_owned();

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook.worksheet_range(&name)?;
            // the used range may not start at A1; re-anchor to absolute cells
            let (row_off, col_off) = range
                .start()
                .map(|(r, c)| (r as usize, c as usize))
                .unwrap_or((0, 0));

            let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_off];
            for cells in range.rows() {
                let mut row = vec![String::new(); col_off];
                row.extend(cells.iter().map(cell_to_string));
                rows.push(row);
            }
            sheets.push(Sheet {
                name,
                rows,
            });
        }

        Ok(Book { sheets })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut workbook = Workbook::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;
            for (r, row) in sheet.rows.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    if !value.is_empty() {
                        worksheet.write_string(r as u32, c as u16, value)?;
                    }
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

/// Everything in the workbook is text to us. Hand-edited books may carry
/// typed cells, so numbers and dates are rendered back to their string form.
fn cell_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) if naive.time() == chrono::NaiveTime::MIN => {
                naive.date().format("%Y-%m-%d").to_string()
            }
            Some(naive) => naive.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
