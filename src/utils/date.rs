use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Current local time as the review-log timestamp string.
/// The fixed format sorts lexicographically in chronological order.
pub fn now_stamp() -> String {
    chrono::Local::now().format(STAMP_FMT).to_string()
}
