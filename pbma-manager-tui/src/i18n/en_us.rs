//! English (en-US)

use super::keys::{
    CommonTexts, DialogTexts, HelpTexts, HintTexts, HomeTexts, MessageTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "PBMA Manager",
        ok: "OK",
        yes: "Yes",
        no: "No",
    },

    home: HomeTexts {
        sid_label: "SID",
        sid_placeholder: "Enter SID...",
        create_plugins: "Create Plugins",
        creating_plugins: "Working...",
        register_window: "Register {n}",
        windows_title: "Windows",
        initialize: "Initialize",
        initializing: "Initializing...",
        boot_windows: "Boot windows: {n}",
        plugin_progress: "Creating plugins... ({done}/{total})",
    },

    dialog: DialogTexts {
        error_title: "Error",
        message_title: "Notice",
        confirm_title: "Confirm",
        help_title: "Help",
        close_hint: "Press Enter or Esc to close",
    },

    messages: MessageTexts {
        sid_required: "Please enter a SID.",
        confirm_create_plugins: "Create the plugins?",
        confirm_register_window: "Register window {n}?",
        confirm_initialize: "Really initialize Chrome data?",
        plugins_created: "Created plugins for {n} windows.",
        window_registered: "Window ({n}) registered.",
        initialized: "Chrome data initialized.",
        resource_busy: "Another process is using the resource.\nClose the running Chrome and try again.",
        user_data_missing: "User Data was not found.",
        chrome_missing: "Chrome was not found.",
        register_failed: "Failed to register window {n}: {error}",
        initialize_failed: "Initialization failed.",
        plugin_failed: "Failed to create the plugin of window {n}: {error}",
        sid_lookup_failed: "Failed to fetch SID data: {error}",
        unexpected: "An unexpected error occurred",
    },

    hints: HintTexts {
        switch_focus: "Focus",
        edit: "Type",
        select: "Select",
        execute: "Execute",
        help: "Help",
        quit: "Quit",
        choose: "Yes/No",
        close: "Close",
    },

    help: HelpTexts {
        global_section: "Global shortcuts",
        page_section: "Page shortcuts",
        focus: "Move focus",
        quit: "Quit",
        help: "Show help",
        sid_enter: "In SID field: create plugins",
        grid_move: "Select window",
        grid_enter: "Register selected window",
        init_enter: "Initialize Chrome data",
        close_hint: "Press Esc to close the help",
    },
};
