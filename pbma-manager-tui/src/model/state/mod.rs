//! Widget and dialog state

mod dialog;
mod sid_input;
mod window_grid;

pub use dialog::{ConfirmAction, ConfirmChoice, Dialog, DialogState};
pub use sid_input::SidInput;
pub use window_grid::WindowGrid;
