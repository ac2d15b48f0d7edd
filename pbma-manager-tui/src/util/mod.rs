//! Util layer: terminal lifecycle and log setup

mod logging;
mod terminal;

pub use logging::{default_log_dir, init_logging_or_warn};
pub use terminal::{init_terminal, restore_terminal, Term};
