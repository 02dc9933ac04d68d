pub const APP_NAME: &str = "WellTune";
pub const APP_TAGLINE: &str = "Your AI wellness companion";
pub const CONFIG_FILE: &str = ".welltune-config.json";
pub const THEME_ENV_VAR: &str = "WELLTUNE_THEME";
pub const LOG_DIR_NAME: &str = "welltune";

pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const NOTIFICATION_TTL_SECS: u64 = 5;
