//! Translation key definitions
//!
//! All UI text lives in these structs so that a missing translation is a compile error.
//!
//! Texts containing `{n}`, `{error}`, `{done}` or `{total}` are templates;
//! fill them with [`fill`](super::fill).

/// Root of all translation texts
pub struct Translations {
    pub common: CommonTexts,
    pub home: HomeTexts,
    pub dialog: DialogTexts,
    pub messages: MessageTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub ok: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

/// Main page
pub struct HomeTexts {
    pub sid_label: &'static str,
    pub sid_placeholder: &'static str,
    pub create_plugins: &'static str,
    pub creating_plugins: &'static str,
    /// Template: `{n}`
    pub register_window: &'static str,
    pub windows_title: &'static str,
    pub initialize: &'static str,
    pub initializing: &'static str,
    /// Template: `{n}`
    pub boot_windows: &'static str,
    /// Template: `{done}`, `{total}`
    pub plugin_progress: &'static str,
}

/// Dialog frame titles
pub struct DialogTexts {
    pub error_title: &'static str,
    pub message_title: &'static str,
    pub confirm_title: &'static str,
    pub help_title: &'static str,
    pub close_hint: &'static str,
}

/// Prompts, results and failures of the workflows
pub struct MessageTexts {
    pub sid_required: &'static str,
    pub confirm_create_plugins: &'static str,
    /// Template: `{n}`
    pub confirm_register_window: &'static str,
    pub confirm_initialize: &'static str,
    /// Template: `{n}`
    pub plugins_created: &'static str,
    /// Template: `{n}`
    pub window_registered: &'static str,
    pub initialized: &'static str,
    pub resource_busy: &'static str,
    pub user_data_missing: &'static str,
    pub chrome_missing: &'static str,
    /// Template: `{n}`, `{error}`
    pub register_failed: &'static str,
    pub initialize_failed: &'static str,
    /// Template: `{n}`, `{error}`
    pub plugin_failed: &'static str,
    /// Template: `{error}`
    pub sid_lookup_failed: &'static str,
    pub unexpected: &'static str,
}

/// Status bar key hints
pub struct HintTexts {
    pub switch_focus: &'static str,
    pub edit: &'static str,
    pub select: &'static str,
    pub execute: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub choose: &'static str,
    pub close: &'static str,
}

/// Help dialog
pub struct HelpTexts {
    pub global_section: &'static str,
    pub page_section: &'static str,
    pub focus: &'static str,
    pub quit: &'static str,
    pub help: &'static str,
    pub sid_enter: &'static str,
    pub grid_move: &'static str,
    pub grid_enter: &'static str,
    pub init_enter: &'static str,
    pub close_hint: &'static str,
}
