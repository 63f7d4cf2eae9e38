//! CLI commands for settings

use clap::Subcommand;

use crate::config::{ChildsharePaths, Settings};
use crate::error::{ChildshareError, ChildshareResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Print the settings file location
    Path,

    /// Set the currency symbol used in reports
    SetCurrency {
        /// Symbol, e.g. "$" or "€"
        symbol: String,
    },

    /// Set the default number of periods per trend window
    SetWindow {
        /// Periods per window (at least 1)
        window: usize,
    },

    /// Set how many top categories the summary highlights
    SetTop {
        /// Number of categories
        top: usize,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &ChildsharePaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> ChildshareResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(settings)
                .map_err(|e| ChildshareError::Config(e.to_string()))?;
            println!("Settings file: {}", paths.settings_file().display());
            if !paths.is_initialized() {
                println!("(not saved yet; showing defaults)");
            }
            println!("{}", json);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", paths.settings_file().display());
            Ok(())
        }
        ConfigCommands::SetCurrency { symbol } => {
            settings.set_currency_symbol(&symbol)?;
            settings.save(paths)?;
            println!("Currency symbol set to: {}", settings.currency_symbol);
            Ok(())
        }
        ConfigCommands::SetWindow { window } => {
            settings.set_trend_window(window)?;
            settings.save(paths)?;
            println!("Trend window set to: {}", settings.trend_window);
            Ok(())
        }
        ConfigCommands::SetTop { top } => {
            settings.default_top = top;
            settings.save(paths)?;
            println!("Summary will highlight the top {} categories", top);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_currency_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(
            &paths,
            &mut settings,
            ConfigCommands::SetCurrency {
                symbol: "€".into(),
            },
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_set_top_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(&paths, &mut settings, ConfigCommands::SetTop { top: 5 }).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_top, 5);
    }

    #[test]
    fn test_zero_window_is_rejected_and_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let err = handle_config_command(
            &paths,
            &mut settings,
            ConfigCommands::SetWindow { window: 0 },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(!paths.is_initialized());
    }
}
