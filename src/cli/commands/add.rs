use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::SheetStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a visit directly. Unlike the interactive cycle this is strict:
/// an unknown person or a bad date is a hard error, since the caller typed
/// it deliberately.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        person,
        restaurant,
        date: date_arg,
    } = cmd
    {
        let visit_date = match date_arg {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        let mut store = SheetStore::open(&cfg.workbook, cfg.ttl())?;
        store.append_visit(visit_date, person, restaurant)?;

        success(format!(
            "Recorded: {} at {} on {}",
            person,
            restaurant.trim(),
            date::format_date(visit_date)
        ));
    }
    Ok(())
}
