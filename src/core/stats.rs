//! Statistics reporter: visit-count rankings and revisit rates over the
//! flattened visit grid.

use crate::models::visit::VisitRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEntry {
    pub restaurant: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisitEntry {
    pub restaurant: String,
    pub visitors: usize,
    pub revisitors: usize,
}

impl RevisitEntry {
    /// Fraction of distinct visitors who came back at least once.
    /// Entries only exist for restaurants with visitors, so the division
    /// is always defined.
    pub fn rate(&self) -> f64 {
        self.revisitors as f64 / self.visitors as f64
    }
}

/// Visit counts per restaurant, optionally restricted to `date >= since`.
/// Ranked by count, ties broken by name. Records whose date cell does not
/// parse are excluded from a dated ranking but counted in an undated one.
pub fn top_restaurants(records: &[VisitRecord], since: Option<NaiveDate>) -> Vec<TopEntry> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        if let Some(cutoff) = since {
            match rec.parsed_date() {
                Some(d) if d >= cutoff => {}
                _ => continue,
            }
        }
        *counts.entry(rec.restaurant.as_str()).or_default() += 1;
    }

    let mut out: Vec<TopEntry> = counts
        .into_iter()
        .map(|(restaurant, count)| TopEntry {
            restaurant: restaurant.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.restaurant.cmp(&b.restaurant)));
    out
}

/// Group visits by (restaurant, person); a person revisits a restaurant
/// when their count reaches 2. Ranked by rate, ties broken by name.
pub fn revisit_rates(records: &[VisitRecord]) -> Vec<RevisitEntry> {
    let mut per_pair: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for rec in records {
        *per_pair
            .entry((rec.restaurant.as_str(), rec.person.as_str()))
            .or_default() += 1;
    }

    let mut per_restaurant: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for ((restaurant, _person), count) in per_pair {
        let entry = per_restaurant.entry(restaurant).or_default();
        entry.0 += 1;
        if count >= 2 {
            entry.1 += 1;
        }
    }

    let mut out: Vec<RevisitEntry> = per_restaurant
        .into_iter()
        .map(|(restaurant, (visitors, revisitors))| RevisitEntry {
            restaurant: restaurant.to_string(),
            visitors,
            revisitors,
        })
        .collect();
    out.sort_by(|a, b| {
        b.rate()
            .total_cmp(&a.rate())
            .then_with(|| a.restaurant.cmp(&b.restaurant))
    });
    out
}
