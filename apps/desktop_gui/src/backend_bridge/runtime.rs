//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::SentimentPredictor;
use crossbeam_channel::{Receiver, Sender};
use shared::domain::SubmissionText;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::reducer::AttemptId;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    predictor: Arc<dyn SentimentPredictor>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(endpoint = predictor.endpoint(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Ready; predictions from {}",
                predictor.endpoint()
            )));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Predict { attempt, text } => {
                        let event = run_attempt(predictor.as_ref(), attempt, &text).await;
                        // Blocking send: the UI stays in Loading until this outcome arrives.
                        if ui_tx.send(event).is_err() {
                            tracing::warn!("ui event queue closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
            tracing::info!("backend worker stopped");
        });
    })
}

/// Performs one attempt: a single call to the predictor, no retry.
pub async fn run_attempt(
    predictor: &dyn SentimentPredictor,
    attempt: AttemptId,
    text: &SubmissionText,
) -> UiEvent {
    tracing::info!(
        attempt = attempt.0,
        chars = text.char_len(),
        "backend: predict"
    );
    let outcome = predictor.predict(text).await;
    match &outcome {
        Ok(prediction) => {
            tracing::info!(
                attempt = attempt.0,
                label = %prediction.label,
                "backend: predict succeeded"
            );
        }
        Err(err) => {
            tracing::warn!(attempt = attempt.0, "analysis error: {err}");
        }
    }
    UiEvent::PredictionFinished { attempt, outcome }
}
