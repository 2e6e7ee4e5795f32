//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("UI command queue is full; please retry")]
    QueueFull,
    #[error("Backend command processor disconnected (possible startup/runtime failure)")]
    Disconnected,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(DispatchError::QueueFull)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(DispatchError::Disconnected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::reducer::AttemptId;
    use crossbeam_channel::bounded;
    use shared::domain::SubmissionText;

    fn predict(id: u64) -> BackendCommand {
        BackendCommand::Predict {
            attempt: AttemptId(id),
            text: SubmissionText::parse("queued text").expect("valid"),
        }
    }

    #[test]
    fn queues_command_for_backend() {
        let (tx, rx) = bounded(1);
        assert_eq!(dispatch_backend_command(&tx, predict(1)), Ok(()));
        match rx.try_recv() {
            Ok(BackendCommand::Predict { attempt, .. }) => assert_eq!(attempt, AttemptId(1)),
            Err(err) => panic!("expected queued command: {err}"),
        }
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, predict(1)).expect("first fits");
        assert_eq!(
            dispatch_backend_command(&tx, predict(2)),
            Err(DispatchError::QueueFull)
        );
    }

    #[test]
    fn reports_disconnected_backend() {
        let (tx, rx) = bounded(1);
        drop(rx);
        assert_eq!(
            dispatch_backend_command(&tx, predict(1)),
            Err(DispatchError::Disconnected)
        );
    }
}
