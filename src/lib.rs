// Module declarations
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{load_config, save_config, Config};
pub use error::{WellTuneError, WellTuneResult};
pub use session::{
    Screen, ScreenId, SessionSnapshot, SideEffect, SignInPolicy, Tab, Theme, TransitionResult,
    ViewCommand, ViewController,
};
