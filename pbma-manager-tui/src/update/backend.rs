//! Backend result handling

use pbma_manager_core::{CoreError, MissingResource, PluginProgress};

use crate::i18n::{fill, t};
use crate::message::BackendMessage;
use crate::model::App;

/// Workflow a failure belongs to; picks the fallback text
#[derive(Debug, Clone, Copy)]
enum FailureContext {
    Register(u32),
    Initialize,
    Plugin(u32),
    SidLookup,
}

pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::PluginProgress(PluginProgress::Started { total }) => {
            app.boot_window_num = Some(total);
            app.plugin_progress = Some((0, total));
        }

        BackendMessage::PluginProgress(PluginProgress::WindowDone { window, total }) => {
            app.plugin_progress = Some((window, total));
        }

        BackendMessage::PluginsFinished(result) => {
            app.plugin_busy = false;
            app.plugin_progress = None;
            app.clear_status();
            match result {
                Ok(report) => {
                    log::info!(
                        "created plugins for windows {:?} of SID {}",
                        report.windows,
                        report.sid
                    );
                    app.boot_window_num = Some(report.boot_window_num);
                    app.dialog.show_message(fill(
                        t().messages.plugins_created,
                        &[("n", &report.boot_window_num)],
                    ));
                }
                Err(err) => {
                    let context = match err.window {
                        Some(window) => {
                            err.source.log(&format!("create plugin for window {window}"));
                            FailureContext::Plugin(window)
                        }
                        None => {
                            err.source.log("look up SID");
                            FailureContext::SidLookup
                        }
                    };
                    app.dialog.show_error(failure_text(context, &err.source));
                }
            }
        }

        BackendMessage::WindowRegistered { window, result } => match result {
            Ok(()) => {
                log::info!("registered window {window}");
                app.dialog
                    .show_message(fill(t().messages.window_registered, &[("n", &window)]));
            }
            Err(err) => {
                err.log(&format!("register window {window}"));
                app.dialog
                    .show_error(failure_text(FailureContext::Register(window), &err));
            }
        },

        BackendMessage::ChromeDataInitialized(result) => {
            app.init_busy = false;
            app.clear_status();
            match result {
                Ok(()) => {
                    log::info!("chrome data initialized");
                    app.dialog.show_message(t().messages.initialized);
                }
                Err(err) => {
                    err.log("initialize chrome data");
                    app.dialog
                        .show_error(failure_text(FailureContext::Initialize, &err));
                }
            }
        }
    }
}

/// Text shown for a failed workflow.
///
/// Busy and missing-directory failures read the same in every workflow; the rest
/// fall back to a workflow-specific text.
fn failure_text(context: FailureContext, err: &CoreError) -> String {
    let texts = &t().messages;
    match err {
        CoreError::ResourceBusy(_) => texts.resource_busy.to_string(),
        CoreError::NotFound(MissingResource::UserData) => texts.user_data_missing.to_string(),
        CoreError::NotFound(MissingResource::ChromeData) => texts.chrome_missing.to_string(),
        CoreError::Unknown(message) if message.trim().is_empty() => texts.unexpected.to_string(),
        other => match context {
            FailureContext::Register(n) => {
                fill(texts.register_failed, &[("n", &n), ("error", other)])
            }
            FailureContext::Initialize => texts.initialize_failed.to_string(),
            FailureContext::Plugin(n) => fill(texts.plugin_failed, &[("n", &n), ("error", other)]),
            FailureContext::SidLookup => fill(texts.sid_lookup_failed, &[("error", other)]),
        },
    }
}
