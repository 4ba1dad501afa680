//! Configuration CLI commands
//!
//! `config` shows where things live and the active settings; `init` writes
//! the default settings file.

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Handle `budget-tracker config`
pub fn handle_config_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    if !paths.is_initialized() {
        println!("(settings file not written yet; run 'budget-tracker init')");
    }
    println!();
    println!("Settings:");
    println!("  Initial budget: {}", settings.format_money(settings.initial_budget));
    println!("  Currency:       {}", settings.currency_symbol);
    println!("  Date format:    {}", settings.date_format);
    println!("  Log level:      {}", settings.log_level);
    Ok(())
}

/// Handle `budget-tracker init`
///
/// Leaves an existing settings file alone unless `force` is set.
pub fn handle_init_command(paths: &TrackerPaths, force: bool) -> TrackerResult<()> {
    if paths.is_initialized() && !force {
        println!(
            "Settings already exist at {} (use --force to overwrite)",
            paths.settings_file().display()
        );
        return Ok(());
    }

    Settings::default().save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "settings written");
    println!("Wrote default settings to {}", paths.settings_file().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_init_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut custom = Settings::default();
        custom.initial_budget = Money::from_units(42);
        custom.save(&paths).unwrap();

        handle_init_command(&paths, false).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.initial_budget, Money::from_units(42));

        handle_init_command(&paths, true).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
