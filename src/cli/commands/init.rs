use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SheetStore;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - a starter workbook with the three empty sheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.workbook.clone(), cli.test)?;

    info("Initializing lunchpick…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("📒 Workbook    : {}", &cfg.workbook);

    let workbook_path = Path::new(&cfg.workbook);
    if workbook_path.exists() {
        info("Workbook already exists, leaving it untouched.");
    } else {
        if let Some(parent) = workbook_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        SheetStore::create(workbook_path)?;
        success(format!("Workbook created at {}", workbook_path.display()));
        info("Add restaurants with `lunchpick restaurants --add NAME` and people with `lunchpick people --add NAME`.");
    }

    success("lunchpick initialization completed!");
    Ok(())
}
