//! Persistent engine configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    errors::FinanceError,
    utils::{paths, persistence::write_atomic},
};

/// Tunables for the month-end projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    #[serde(default = "ForecastSettings::default_min_days")]
    pub min_days_with_movements: u32,
    /// Balances strictly above this are stable.
    #[serde(default = "ForecastSettings::default_stable_above")]
    pub stable_above: f64,
    /// Balances strictly below this are critical.
    #[serde(default = "ForecastSettings::default_critical_below")]
    pub critical_below: f64,
}

impl ForecastSettings {
    pub fn default_min_days() -> u32 {
        3
    }

    pub fn default_stable_above() -> f64 {
        200.0
    }

    pub fn default_critical_below() -> f64 {
        -100.0
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            min_days_with_movements: Self::default_min_days(),
            stable_above: Self::default_stable_above(),
            critical_below: Self::default_critical_below(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom notification preferences file. Defaults to
    /// `<app data dir>/budget_notifications.json`.
    pub notification_file: Option<PathBuf>,
    #[serde(default = "Config::default_retention_months")]
    pub retention_months: u32,
    #[serde(default = "Config::default_period_days")]
    pub default_period_days: i32,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_file: None,
            retention_months: Self::default_retention_months(),
            default_period_days: Self::default_period_days(),
            forecast: ForecastSettings::default(),
        }
    }
}

impl Config {
    pub fn default_retention_months() -> u32 {
        3
    }

    pub fn default_period_days() -> i32 {
        7
    }

    pub fn resolve_notification_file(&self) -> PathBuf {
        self.notification_file
            .clone()
            .unwrap_or_else(paths::notifications_file)
    }
}

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager for the default location under the app data directory.
    pub fn new_default() -> Self {
        Self::new(paths::config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored config, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, FinanceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            debug!(path = %self.path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
