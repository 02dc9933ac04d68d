pub mod config;
pub mod routines;
pub mod simulate;

pub use config::handle_config;
pub use routines::handle_routines;
pub use simulate::{handle_simulate, parse_operations, run_simulation};
