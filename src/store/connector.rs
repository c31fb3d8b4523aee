//! Typed access to the three worksheets.
//! Reads are served from a short-TTL cache; every write reloads the file,
//! mutates, saves, and invalidates the cache. Any workbook failure is fatal
//! to the current operation: no retry, no partial-write recovery.

use crate::errors::{AppError, AppResult};
use crate::models::review::Review;
use crate::models::visit::{VisitGrid, VisitRow};
use crate::store::cache::TtlCache;
use crate::store::schema::{
    COL_RESTAURANT_NAME, COL_REVIEW_BODY, COL_REVIEW_RESTAURANT, COL_REVIEW_TIMESTAMP,
    COL_VISIT_DATE, Layout, SHEET_RESTAURANTS, SHEET_REVIEWS, SHEET_VISITS,
};
use crate::store::workbook::Book;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct SheetStore {
    path: PathBuf,
    layout: Layout,
    cache: TtlCache<Book>,
}

impl SheetStore {
    /// Open the workbook and validate its layout once up front.
    pub fn open(path: impl AsRef<Path>, ttl: Duration) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let book = Book::load(&path)?;
        let layout = Layout::validate(&book)?;
        let mut cache = TtlCache::new(ttl);
        cache.put(book);
        Ok(Self {
            path,
            layout,
            cache,
        })
    }

    /// Create a fresh workbook with the three empty sheets.
    pub fn create(path: impl AsRef<Path>) -> AppResult<()> {
        Book::starter().save(path.as_ref())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload from disk when the cached image is past its TTL.
    /// The layout is re-validated on every reload.
    fn refresh(&mut self) -> AppResult<()> {
        if self.cache.fresh().is_none() {
            let book = Book::load(&self.path)?;
            self.layout = Layout::validate(&book)?;
            self.cache.put(book);
        }
        Ok(())
    }

    fn cached(&self) -> AppResult<&Book> {
        self.cache
            .last()
            .ok_or_else(|| AppError::Store("workbook cache is empty".to_string()))
    }

    /// Read-modify-write against a fresh copy of the file, bypassing the
    /// read cache and invalidating it afterwards.
    fn with_book_mut<F>(&mut self, mutate: F) -> AppResult<()>
    where
        F: FnOnce(&mut Book, &Layout) -> AppResult<()>,
    {
        self.cache.invalidate();
        let mut book = Book::load(&self.path)?;
        let layout = Layout::validate(&book)?;
        mutate(&mut book, &layout)?;
        book.save(&self.path)?;
        self.layout = layout;
        Ok(())
    }

    // ---------------------------
    // Restaurant list
    // ---------------------------

    /// Trimmed restaurant names in sheet order, blank rows skipped.
    pub fn list_restaurants(&mut self) -> AppResult<Vec<String>> {
        self.refresh()?;
        let sheet = self.cached()?.sheet(SHEET_RESTAURANTS)?;
        Ok(sheet
            .rows
            .iter()
            .skip(1)
            .filter_map(|row| row.get(COL_RESTAURANT_NAME))
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    pub fn add_restaurant(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Store("restaurant name is empty".to_string()));
        }
        self.with_book_mut(|book, _| {
            let sheet = book.sheet_mut(SHEET_RESTAURANTS)?;
            let seq = sheet.rows.len(); // header is row 1, so len == next "no"
            sheet.push_row(vec![seq.to_string(), name]);
            Ok(())
        })
    }

    // ---------------------------
    // Visit log
    // ---------------------------

    /// Person names from the visit-log header, declared order.
    pub fn list_people(&mut self) -> AppResult<Vec<String>> {
        self.refresh()?;
        Ok(self.layout.people())
    }

    pub fn add_person(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Store("person name is empty".to_string()));
        }
        self.with_book_mut(|book, _| {
            let sheet = book.sheet_mut(SHEET_VISITS)?;
            let col = sheet.rows.first().map(Vec::len).unwrap_or(1);
            sheet.set_cell(0, col, &name);
            Ok(())
        })
    }

    /// One cell per date row for this person: the restaurant name, or an
    /// empty marker for days without a visit. Chronological sheet order.
    pub fn visit_column(&mut self, person: &str) -> AppResult<Vec<String>> {
        self.refresh()?;
        let col = self
            .layout
            .person_col(person)
            .ok_or_else(|| AppError::UnknownPerson(person.trim().to_string()))?;
        let sheet = self.cached()?.sheet(SHEET_VISITS)?;
        Ok(sheet
            .rows
            .iter()
            .skip(1)
            .map(|row| {
                row.get(col)
                    .map(|cell| cell.trim().to_string())
                    .unwrap_or_default()
            })
            .collect())
    }

    /// The full date × person grid.
    pub fn all_visits(&mut self) -> AppResult<VisitGrid> {
        self.refresh()?;
        let people = self.layout.people.clone();
        let sheet = self.cached()?.sheet(SHEET_VISITS)?;
        let rows = sheet
            .rows
            .iter()
            .skip(1)
            .map(|row| VisitRow {
                date: row
                    .get(COL_VISIT_DATE)
                    .map(|cell| cell.trim().to_string())
                    .unwrap_or_default(),
                cells: (0..people.len())
                    .map(|i| {
                        row.get(i + 1)
                            .map(|cell| cell.trim().to_string())
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();
        Ok(VisitGrid { people, rows })
    }

    /// Record a visit. The last row is reused when it already carries this
    /// date and the person's cell is free; otherwise a new row is appended.
    /// Other columns are never touched, and no uniqueness is enforced:
    /// recording twice on one day yields two rows.
    pub fn append_visit(
        &mut self,
        visit_date: NaiveDate,
        person: &str,
        restaurant: &str,
    ) -> AppResult<()> {
        let restaurant = restaurant.trim().to_string();
        let date_str = date::format_date(visit_date);
        let person = person.to_string();
        self.with_book_mut(move |book, layout| {
            let col = layout
                .person_col(&person)
                .ok_or_else(|| AppError::UnknownPerson(person.trim().to_string()))?;
            let sheet = book.sheet_mut(SHEET_VISITS)?;

            let last = sheet.rows.len() - 1; // at least the header exists
            let reuse = last > 0
                && sheet.cell(last, COL_VISIT_DATE).trim() == date_str
                && sheet.cell(last, col).trim().is_empty();

            let row = if reuse { last } else { sheet.rows.len() };
            sheet.set_cell(row, COL_VISIT_DATE, &date_str);
            sheet.set_cell(row, col, &restaurant);
            Ok(())
        })
    }

    // ---------------------------
    // Review log
    // ---------------------------

    /// Reviews in sheet (insertion) order, optionally filtered by trimmed
    /// restaurant equality. Rows without a restaurant are skipped.
    pub fn list_reviews(&mut self, filter: Option<&str>) -> AppResult<Vec<Review>> {
        self.refresh()?;
        let wanted = filter.map(str::trim);
        let sheet = self.cached()?.sheet(SHEET_REVIEWS)?;
        Ok(sheet
            .rows
            .iter()
            .skip(1)
            .filter_map(|row| {
                let restaurant = row
                    .get(COL_REVIEW_RESTAURANT)
                    .map(|cell| cell.trim())
                    .unwrap_or("");
                if restaurant.is_empty() {
                    return None;
                }
                if let Some(wanted) = wanted
                    && restaurant != wanted
                {
                    return None;
                }
                Some(Review {
                    restaurant: restaurant.to_string(),
                    timestamp: row
                        .get(COL_REVIEW_TIMESTAMP)
                        .map(|cell| cell.trim().to_string())
                        .unwrap_or_default(),
                    review: row
                        .get(COL_REVIEW_BODY)
                        .cloned()
                        .unwrap_or_default(),
                })
            })
            .collect())
    }

    pub fn append_review(
        &mut self,
        restaurant: &str,
        timestamp: &str,
        body: &str,
    ) -> AppResult<()> {
        let row = vec![
            restaurant.trim().to_string(),
            timestamp.to_string(),
            body.to_string(),
        ];
        self.with_book_mut(move |book, _| {
            book.sheet_mut(SHEET_REVIEWS)?.push_row(row);
            Ok(())
        })
    }
}
