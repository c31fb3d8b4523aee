use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SheetStore;
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::People { add } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        if let Some(name) = add {
            let name = name.trim();
            if name.is_empty() {
                warning("Person name is empty.");
                return Ok(());
            }
            if store.list_people()?.iter().any(|p| p == name) {
                warning(format!("'{}' is already tracked.", name));
                return Ok(());
            }
            store.add_person(name)?;
            success(format!("Added person '{}'.", name));
            return Ok(());
        }

        let people = store.list_people()?;
        if people.is_empty() {
            info("Nobody is tracked yet.");
            return Ok(());
        }
        header("👥 People");
        for name in people {
            println!("  {}", name);
        }
    }
    Ok(())
}
