//! Event layer
//!
//! Reads terminal input and translates it into [`AppMessage`](crate::message::AppMessage)s.
//! Only key presses are handled; resizes simply trigger the next redraw.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
