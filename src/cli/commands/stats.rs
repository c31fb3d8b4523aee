use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{RevisitEntry, TopEntry, revisit_rates, top_restaurants};
use crate::errors::AppResult;
use crate::store::SheetStore;
use crate::ui::messages::{header, info, warning};
use crate::utils::date;
use crate::utils::table::{bar, pad};
use chrono::Duration;
use unicode_width::UnicodeWidthStr;

/// Statistics view: recent top restaurants, all-time top restaurants and
/// per-restaurant revisit rates, as terminal bar charts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { days, top } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        let grid = store.all_visits()?;
        let records = grid.flatten();
        if records.is_empty() {
            warning("No visit data yet.");
            return Ok(());
        }

        let top_n = top.unwrap_or(cfg.top_n);
        let cutoff = date::today() - Duration::days(*days);

        header(format!("🏆 Top restaurants — last {} days", days));
        let recent = top_restaurants(&records, Some(cutoff));
        if recent.is_empty() {
            info(format!("No visits in the last {} days.", days));
        } else {
            print_top(&recent, top_n, cfg.chart_width);
        }

        header("🏆 Top restaurants — all time");
        print_top(&top_restaurants(&records, None), top_n, cfg.chart_width);

        header("🔁 Revisit rate");
        print_rates(&revisit_rates(&records), top_n, cfg.chart_width);
    }
    Ok(())
}

fn print_top(entries: &[TopEntry], top_n: usize, width: usize) {
    let shown = &entries[..entries.len().min(top_n)];
    let label_width = label_width(shown.iter().map(|e| e.restaurant.as_str()));
    let max = shown.first().map(|e| e.count).unwrap_or(0);

    for entry in shown {
        println!(
            "  {}  {} {}",
            pad(&entry.restaurant, label_width),
            bar(entry.count, max, width),
            entry.count
        );
    }
}

fn print_rates(entries: &[RevisitEntry], top_n: usize, width: usize) {
    let shown = &entries[..entries.len().min(top_n)];
    let label_width = label_width(shown.iter().map(|e| e.restaurant.as_str()));

    for entry in shown {
        let percent = (entry.rate() * 100.0).round() as usize;
        println!(
            "  {}  {} {}% ({}/{})",
            pad(&entry.restaurant, label_width),
            bar(percent, 100, width),
            percent,
            entry.revisitors,
            entry.visitors
        );
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(UnicodeWidthStr::width).max().unwrap_or(0)
}
