use clap::ArgMatches;
use colored::*;

use crate::config::{config_path, load_config_from, save_config_to};
use crate::error::WellTuneResult;
use crate::welltune_error;
use crate::session::Theme;

fn parse_switch(value: &str) -> WellTuneResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(welltune_error!(InvalidInput, "expected on or off, got '{}'", other)),
    }
}

pub fn handle_config(matches: &ArgMatches) -> WellTuneResult<()> {
    let path = config_path()?;
    let mut config = load_config_from(&path)?;
    let mut changed = false;

    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.parse::<Theme>()?;
        changed = true;
    }
    if let Some(flag) = matches.get_one::<String>("onboarding") {
        config.onboarding_after_sign_in = parse_switch(flag)?;
        changed = true;
    }

    if changed {
        save_config_to(&path, &config)?;
        println!("{} Saved {}", "✓".green(), path.display());
    }

    if matches.get_flag("show") || !changed {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }
    Ok(())
}
