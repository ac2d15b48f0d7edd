//! View layer
//!
//! Pure rendering: reads [`App`](crate::model::App) and draws one frame. Nothing
//! here mutates state.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
