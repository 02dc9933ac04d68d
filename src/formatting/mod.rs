pub mod routines;
pub mod session;
pub mod theme;
pub mod utils;

pub use routines::print_routines;
pub use session::{describe_snapshot, print_trace, TraceStep};
pub use theme::{palette, set_theme, Palette};
pub use utils::{format_count, format_minutes, pluralize, truncate};
