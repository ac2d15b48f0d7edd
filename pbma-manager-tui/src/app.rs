//! Main loop
//!
//!     draw -> drain backend results -> poll key (100ms) -> update -> spawn effect
//!
//! Backend tasks never touch [`App`]; they post [`AppMessage`]s that are drained
//! here, so all state changes happen on this thread.

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::backend::{spawn_effect, CoreService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Effect};
use crate::util::Term;
use crate::view;

pub fn run(terminal: &mut Term, app: &mut App, core: &CoreService, handle: &Handle) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
    let dispatch = |effect: Effect| spawn_effect(handle, core.backend(), tx.clone(), effect);

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        while let Ok(msg) = rx.try_recv() {
            if let Some(effect) = update::update(app, msg) {
                dispatch(effect);
            }
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            if let Some(effect) = update::update(app, msg) {
                dispatch(effect);
            }
        }
    }

    Ok(())
}
