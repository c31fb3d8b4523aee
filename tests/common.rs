#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use lunchpick::store::schema::{SHEET_RESTAURANTS, SHEET_VISITS};
use lunchpick::store::workbook::Book;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn lp() -> Command {
    cargo_bin_cmd!("lunchpick")
}

/// Create a unique test workbook path inside the system temp dir and remove
/// any existing file
pub fn setup_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lunchpick.xlsx", name));
    let wb = path.to_string_lossy().to_string();
    fs::remove_file(&wb).ok();
    wb
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a workbook directly via the library API: restaurant list, people
/// header, and one visit row per (date, person, restaurant) tuple.
pub fn seed_workbook(
    wb: &str,
    restaurants: &[&str],
    people: &[&str],
    visits: &[(&str, &str, &str)],
) {
    let mut book = Book::starter();

    let sheet = book.sheet_mut(SHEET_RESTAURANTS).expect("restaurant sheet");
    for (i, name) in restaurants.iter().enumerate() {
        sheet.push_row(vec![(i + 1).to_string(), name.to_string()]);
    }

    let sheet = book.sheet_mut(SHEET_VISITS).expect("visit sheet");
    for (i, person) in people.iter().enumerate() {
        sheet.set_cell(0, i + 1, person);
    }
    for (date, person, restaurant) in visits {
        let col = people
            .iter()
            .position(|p| p == person)
            .expect("seeded person")
            + 1;
        let row = sheet.rows.len();
        sheet.set_cell(row, 0, date);
        sheet.set_cell(row, col, restaurant);
    }

    book.save(Path::new(wb)).expect("save seeded workbook");
}

/// Append review rows (restaurant, timestamp, body) to an existing workbook.
pub fn seed_reviews(wb: &str, reviews: &[(&str, &str, &str)]) {
    use lunchpick::store::schema::SHEET_REVIEWS;

    let mut book = Book::load(Path::new(wb)).expect("load workbook");
    let sheet = book.sheet_mut(SHEET_REVIEWS).expect("review sheet");
    for (restaurant, timestamp, body) in reviews {
        sheet.push_row(vec![
            restaurant.to_string(),
            timestamp.to_string(),
            body.to_string(),
        ]);
    }
    book.save(Path::new(wb)).expect("save workbook");
}
