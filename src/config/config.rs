use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_TICK_RATE_MS, THEME_ENV_VAR};
use crate::error::{WellTuneError, WellTuneResult};
use crate::session::{SignInPolicy, Theme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme the session starts with
    pub theme: Theme,
    /// Show the onboarding survey right after signing in
    pub onboarding_after_sign_in: bool,
    /// Event poll interval of the terminal UI
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::Dark,
            onboarding_after_sign_in: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    pub fn sign_in_policy(&self) -> SignInPolicy {
        SignInPolicy::from_flag(self.onboarding_after_sign_in)
    }

    /// Apply `WELLTUNE_THEME` on top of the file values
    pub fn with_env_overrides(mut self) -> WellTuneResult<Self> {
        if let Ok(value) = env::var(THEME_ENV_VAR) {
            self.theme = value
                .parse()
                .map_err(|e| WellTuneError::ConfigError(format!("{}: {}", THEME_ENV_VAR, e)))?;
        }
        Ok(self)
    }
}

pub fn config_path() -> WellTuneResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| WellTuneError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config_from(path: &Path) -> WellTuneResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| WellTuneError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config_to(path: &Path, config: &Config) -> WellTuneResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn load_config() -> WellTuneResult<Config> {
    load_config_from(&config_path()?)?.with_env_overrides()
}

pub fn save_config(config: &Config) -> WellTuneResult<()> {
    save_config_to(&config_path()?, config)
}
