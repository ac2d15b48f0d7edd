//! PBMA Manager
//!
//! Terminal front-end for preparing browser-automation windows: proxy plugin
//! creation per SID, Chrome profile registration per window, and Chrome data
//! initialization.
//!
//! Elm architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: events and task results (`message/`)
//! - **Update**: state transitions, returning backend effects (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: key input (`event/`)
//! - **Backend**: config file, core wiring, task runner (`backend/`)

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{CoreService, LocalConfigService, API_BASE_URL_ENV};
use i18n::Language;
use util::{default_log_dir, init_logging_or_warn, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Logging (file only; the terminal belongs to the UI). Runs without it on failure.
    let _log_guard = init_logging_or_warn(&default_log_dir());

    // 2. Config
    let config_service = LocalConfigService::default();
    let mut config = config_service.load_or_create()?;
    log::info!("config file: {}", config_service.path().display());
    config.apply_env_override(std::env::var(API_BASE_URL_ENV).ok());

    // 3. Language and theme
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("unknown language {:?}, using default", config.language);
        Language::default()
    });
    i18n::set_language(language);
    view::theme::set_theme(config.theme);
    log::info!(
        "language: {}, API: {}",
        language.display_name(),
        config.api_base_url
    );

    // 4. Runtime for backend tasks
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("pbma-worker")
        .build()
        .context("failed to start async runtime")?;

    // 5. Backend
    let core = CoreService::from_config(&config).context("failed to set up backend")?;

    // 6. Terminal and main loop
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config.window_slots);
    let result = app::run(&mut terminal, &mut app, &core, runtime.handle());

    // 7. Always restore the terminal
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("main loop failed: {e:#}");
    }
    result
}
