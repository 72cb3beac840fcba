//! Command orchestration helpers from UI actions to backend command queue.

use chrono::NaiveDate;
use client_core::fallback_brief;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::reducer::{AppModel, UiAction};

/// Queues `cmd`, reporting a full or closed queue in `status`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    let message = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            return true;
        }
        Err(TrySendError::Full(_)) => "UI command queue is full; please retry",
        Err(TrySendError::Disconnected(_)) => {
            "Backend command processor disconnected (possible startup/runtime failure)"
        }
    };

    let err = UiError::from_message(UiErrorContext::Dispatch, message);
    tracing::warn!(command = cmd_name, category = ?err.category(), "{}", err.message());
    *status = err.status_line();
    false
}

/// Applies `action` to the model and queues whatever it asks for. A brief
/// request that cannot be queued resolves to the fallback right away, so the
/// screen never stays stuck on "Loading...".
pub fn run_action(
    model: &mut AppModel,
    cmd_tx: &Sender<BackendCommand>,
    action: UiAction,
    today: NaiveDate,
) {
    let Some(cmd) = model.apply_action(action, today) else {
        return;
    };

    let BackendCommand::FetchBrief { request_id, .. } = cmd;
    if !dispatch_backend_command(cmd_tx, cmd, model.status_mut()) {
        tracing::warn!(request_id, "brief request not queued; showing fallback item");
        model.apply_event(UiEvent::BriefLoaded {
            request_id,
            items: fallback_brief(),
        });
    }
}
