use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SheetStore;
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restaurants { add } = cmd {
        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;

        if let Some(name) = add {
            let name = name.trim();
            if name.is_empty() {
                warning("Restaurant name is empty.");
                return Ok(());
            }
            if store.list_restaurants()?.iter().any(|r| r == name) {
                warning(format!("'{}' is already on the list.", name));
                return Ok(());
            }
            store.add_restaurant(name)?;
            success(format!("Added restaurant '{}'.", name));
            return Ok(());
        }

        let restaurants = store.list_restaurants()?;
        if restaurants.is_empty() {
            info("The restaurant list is empty.");
            return Ok(());
        }
        header("🍽️  Restaurants");
        for name in restaurants {
            println!("  {}", name);
        }
    }
    Ok(())
}
