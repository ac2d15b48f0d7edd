//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The model is the single source of truth of the UI. It holds plain data only;
//! every change goes through the update layer.
//!
//!     App
//!      ├── focus: HomeFocus          which widget receives keys
//!      ├── sid: SidInput             the SID text field
//!      ├── grid: WindowGrid          the "register window N" buttons
//!      ├── dialog: DialogState       at most one active dialog
//!      ├── plugin_busy / init_busy   double-submission guards
//!      └── boot_window_num, plugin_progress, status_message
//!
//! A confirmation prompt and the action it guards live in the same
//! `Dialog::Confirm` value, so one can never be set without the other.
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::HomeFocus;
pub use state::{ConfirmAction, ConfirmChoice, Dialog, DialogState, SidInput, WindowGrid};
