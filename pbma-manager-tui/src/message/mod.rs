//! Message layer
//!
//! Bridge between Event and Update: every key press and every finished backend
//! task is translated into an [`AppMessage`], and only Update consumes them.
//!
//!     event/handler.rs   key press      -> AppMessage
//!     backend/tasks.rs   task result    -> AppMessage::Backend(..)
//!     update/mod.rs      AppMessage     -> App mutation (+ optional Effect)

mod app;
mod backend;
mod dialog;
mod home;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use dialog::DialogMessage;
pub use home::{GridDirection, HomeMessage};
