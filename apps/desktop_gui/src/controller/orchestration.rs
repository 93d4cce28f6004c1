//! Command orchestration from UI submit actions to the backend command queue.

use client_core::{SubmissionController, SubmitOutcome};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Starts a submission and queues its request for the backend worker.
///
/// A request that cannot be queued resolves the submission right away as a
/// transport failure, so the form never waits on a request that was never
/// sent. Returns whether a command was queued.
pub fn dispatch_create_chat(
    cmd_tx: &Sender<BackendCommand>,
    controller: &mut SubmissionController,
    status: &mut String,
) -> bool {
    let Some(ticket) = controller.begin_submit() else {
        return false;
    };
    let seq = ticket.seq;
    let cmd = BackendCommand::from(ticket);
    let cmd_name = cmd.name();

    let messages = controller.locale().messages();
    let failure = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, seq, "queued ui->backend command");
            return true;
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, seq, "ui command queue is full");
            messages.queue_full
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, seq, "backend command processor disconnected");
            messages.worker_disconnected
        }
    };

    *status = failure.to_string();
    controller.resolve(seq, SubmitOutcome::transport(failure));
    false
}
