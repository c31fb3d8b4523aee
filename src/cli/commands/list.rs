use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recommend::recent_visits;
use crate::errors::AppResult;
use crate::store::SheetStore;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { person, recent } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        if *recent {
            let Some(person) = person else {
                warning("--recent needs --person.");
                return Ok(());
            };
            let history = store.visit_column(person)?;
            let last = recent_visits(&history, cfg.recent_window);
            if last.is_empty() {
                info(format!("No visits recorded for {} yet.", person));
            } else {
                header(format!("Recent visits — {}", person));
                for name in last {
                    println!("  {}", name);
                }
            }
            return Ok(());
        }

        let grid = store.all_visits()?;
        let mut records = grid.flatten();
        if let Some(person) = person {
            let wanted = person.trim();
            records.retain(|r| r.person == wanted);
        }

        if records.is_empty() {
            info("No visits recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Person", "Restaurant"]);
        for rec in &records {
            table.add_row(vec![
                rec.date.clone(),
                rec.person.clone(),
                rec.restaurant.clone(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
