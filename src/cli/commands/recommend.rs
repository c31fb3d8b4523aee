use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recommend::{RecommendSession, recent_visits};
use crate::errors::{AppError, AppResult};
use crate::store::SheetStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use dialoguer::Select;
use std::io::IsTerminal;

/// Run one recommendation cycle: draw, then eat-here / show-another / quit.
/// The pool and pending choice live in a RecommendSession that is dropped
/// when the cycle resolves.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recommend { person, pick } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        let restaurants = store.list_restaurants()?;
        if restaurants.is_empty() {
            warning("The restaurant list is empty. Add one with `lunchpick restaurants --add NAME`.");
            return Ok(());
        }

        let people = store.list_people()?;
        let person = match resolve_person(person.as_deref(), &people)? {
            Some(p) => p,
            None => return Ok(()), // warning already shown
        };

        let history = store.visit_column(&person)?;
        let recent = recent_visits(&history, cfg.recent_window);
        if !recent.is_empty() {
            info(format!(
                "Recent visits for {}: {}",
                person,
                recent.join(", ")
            ));
        }

        let mut session = RecommendSession::start(&person, &restaurants, &history, cfg.recent_window);
        if session.pool().is_empty() {
            warning("No restaurants left to recommend.");
            return Ok(());
        }

        loop {
            let choice = match session.draw() {
                Ok(c) => c,
                Err(AppError::NoCandidates) => {
                    warning("No more restaurants to recommend.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            println!("\n🍽️  Recommended: {}", choice);

            if *pick || !std::io::stdin().is_terminal() {
                return record(&mut store, &mut session, *pick);
            }

            let action = Select::new()
                .with_prompt("What next")
                .items(&["Eat here", "Show another", "Quit"])
                .default(0)
                .interact()?;

            match action {
                0 => return record(&mut store, &mut session, true),
                1 => continue,
                _ => {
                    info("Nothing recorded.");
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

/// Commit the pending choice as today's visit. Without `--pick` on a
/// non-interactive stdin, the suggestion is shown but nothing is written.
fn record(store: &mut SheetStore, session: &mut RecommendSession, accept: bool) -> AppResult<()> {
    if !accept {
        info("Not a terminal: run with --pick to record the suggestion.");
        return Ok(());
    }
    let person = session.person().to_string();
    let choice = session.confirm()?;
    store.append_visit(date::today(), &person, &choice)?;
    success(format!("Saved! {} eats at {} today.", person, choice));
    Ok(())
}

/// A person must be selected before anything else happens; without one the
/// view halts with a warning, never an error.
fn resolve_person(given: Option<&str>, people: &[String]) -> AppResult<Option<String>> {
    if people.is_empty() {
        warning("No people in the visit log yet. Add one with `lunchpick people --add NAME`.");
        return Ok(None);
    }

    if let Some(name) = given {
        let name = name.trim();
        if people.iter().any(|p| p == name) {
            return Ok(Some(name.to_string()));
        }
        warning(format!(
            "Unknown person '{}'. Known: {}",
            name,
            people.join(", ")
        ));
        return Ok(None);
    }

    if !std::io::stdin().is_terminal() {
        warning("Please select a person.");
        return Ok(None);
    }

    let idx = Select::new()
        .with_prompt("Who is asking")
        .items(people)
        .default(0)
        .interact()?;
    Ok(Some(people[idx].clone()))
}
