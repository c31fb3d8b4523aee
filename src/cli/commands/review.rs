use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::review::{self, ALL_RESTAURANTS};
use crate::errors::{AppError, AppResult};
use crate::models::review::Review;
use crate::store::SheetStore;
use crate::ui::messages::{divider, header, info, success, warning};
use dialoguer::{Confirm, Input, Select};
use std::io::IsTerminal;

/// Review view: submit with `--add`, list by restaurant (or "all"), or,
/// with no arguments on a terminal, browse interactively.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review { restaurant, add } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        if let Some(text) = add {
            let Some(target) = restaurant else {
                warning("Please name the restaurant the review is for.");
                return Ok(());
            };
            submit_one(&mut store, target, text)?;
            print_reviews(&mut store, Some(target.as_str()))?;
            return Ok(());
        }

        if restaurant.is_none() && std::io::stdin().is_terminal() {
            return browse(&mut store);
        }

        print_reviews(&mut store, restaurant.as_deref())?;
    }
    Ok(())
}

/// A blank body is a warning, not an error: nothing gets written and the
/// command still succeeds.
fn submit_one(store: &mut SheetStore, restaurant: &str, text: &str) -> AppResult<()> {
    match review::submit(store, restaurant, text) {
        Ok(_) => {
            success("Review recorded!");
            Ok(())
        }
        Err(AppError::EmptyReview) => {
            warning("Review text is empty, nothing recorded.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_reviews(store: &mut SheetStore, filter: Option<&str>) -> AppResult<()> {
    let reviews = review::list(store, filter)?;
    let label = filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(ALL_RESTAURANTS);

    header(format!("📋 Reviews — {}", label));
    if reviews.is_empty() {
        info("No reviews yet.");
        return Ok(());
    }
    for r in &reviews {
        print_entry(r, filter.is_none() || label == ALL_RESTAURANTS);
    }
    Ok(())
}

fn print_entry(r: &Review, show_restaurant: bool) {
    if show_restaurant {
        println!("🕒 {}  ({})", r.timestamp, r.restaurant);
    } else {
        println!("🕒 {}", r.timestamp);
    }
    println!("{}", r.review);
    divider();
}

/// Interactive browser: pick a restaurant, read its reviews, optionally
/// write one. The input prompt is created fresh per round, so a submitted
/// text never leaks into the next one.
fn browse(store: &mut SheetStore) -> AppResult<()> {
    loop {
        let restaurants = store.list_restaurants()?;
        if restaurants.is_empty() {
            warning("The restaurant list is empty. Add one with `lunchpick restaurants --add NAME`.");
            return Ok(());
        }

        let mut items: Vec<String> = restaurants.clone();
        items.push(format!("<{}>", ALL_RESTAURANTS));
        items.push("<quit>".to_string());

        let idx = Select::new()
            .with_prompt("Restaurant")
            .items(&items)
            .default(0)
            .interact()?;

        if idx == items.len() - 1 {
            return Ok(());
        }
        let selected = if idx == items.len() - 2 {
            None
        } else {
            Some(restaurants[idx].as_str())
        };

        print_reviews(store, selected)?;

        let Some(target) = selected else { continue };
        let write = Confirm::new()
            .with_prompt(format!("Write a review for {}?", target))
            .default(false)
            .interact()?;
        if !write {
            continue;
        }

        let text: String = Input::new()
            .with_prompt("Review")
            .allow_empty(true)
            .interact_text()?;
        submit_one(store, target, &text)?;
    }
}
