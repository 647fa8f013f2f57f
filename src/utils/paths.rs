use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".finance_core";
const CONFIG_FILE: &str = "config.json";
const NOTIFICATIONS_FILE: &str = "budget_notifications.json";

/// Returns the application-specific data directory, defaulting to `~/.finance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the JSON configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Default location of the budget notification preferences.
///
/// The file keeps its historical `.json` name even though its content is
/// line-oriented `key=value` text.
pub fn notifications_file() -> PathBuf {
    app_data_dir().join(NOTIFICATIONS_FILE)
}
