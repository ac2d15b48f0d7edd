pub mod dialog;
pub mod statusbar;
