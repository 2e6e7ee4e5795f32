//! Backend commands queued from UI to backend worker.

use shared::domain::SubmissionText;

use crate::controller::reducer::AttemptId;

pub enum BackendCommand {
    Predict {
        attempt: AttemptId,
        text: SubmissionText,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Predict { .. } => "predict",
        }
    }
}
