//! View model for the analysis form and the transitions that mutate it.
//!
//! The egui shell owns one [`ViewModel`]; nothing else writes to it. Every
//! user action and backend completion goes through one of the transition
//! methods below, and the render step reads the result.

use std::time::{Duration, Instant};

use shared::{
    domain::{Prediction, Sentiment, SubmissionText},
    error::{PredictionError, ValidationError},
};
use thiserror::Error;

/// Delay before a freshly rendered result reaches full opacity.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
/// Fade applied to a result cleared by typing.
pub const FADE_OUT: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Prediction {
        label: String,
        sentiment: Sentiment,
        echo: String,
    },
    Failure {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Revealing { since: Instant },
    Shown,
    FadingOut { since: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedResult {
    pub view: ResultView,
    pub presentation: Presentation,
}

/// A validated submission handed to the backend bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub id: AttemptId,
    pub text: SubmissionText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("an analysis is already in progress")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Default)]
pub struct ViewModel {
    pub input: String,
    state: SubmissionState,
    result: Option<DisplayedResult>,
    in_flight: Option<Attempt>,
    next_attempt: u64,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&DisplayedResult> {
        self.result.as_ref()
    }

    /// Raw length of the field, whitespace included.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.result.as_ref().map(|result| result.presentation),
            Some(Presentation::Revealing { .. } | Presentation::FadingOut { .. })
        )
    }

    /// Called after every edit of the text field.
    pub fn on_input(&mut self, now: Instant) {
        if let Some(result) = self.result.as_mut() {
            if !matches!(result.presentation, Presentation::FadingOut { .. }) {
                result.presentation = Presentation::FadingOut { since: now };
            }
        }
    }

    pub fn begin_submission(&mut self, now: Instant) -> Result<Attempt, SubmitRejected> {
        if self.in_flight.is_some() {
            return Err(SubmitRejected::InFlight);
        }

        let text = match SubmissionText::parse(&self.input) {
            Ok(text) => text,
            Err(err) => {
                self.show(
                    ResultView::Failure {
                        message: err.user_message(),
                    },
                    now,
                );
                self.state = SubmissionState::Error;
                return Err(err.into());
            }
        };

        self.next_attempt += 1;
        let attempt = Attempt {
            id: AttemptId(self.next_attempt),
            text,
        };
        self.in_flight = Some(attempt.clone());
        self.state = SubmissionState::Loading;
        Ok(attempt)
    }

    /// Applies the outcome of the in-flight attempt. Returns `false` and
    /// leaves the model untouched when `id` is not the attempt in flight.
    pub fn finish_submission(
        &mut self,
        id: AttemptId,
        outcome: Result<Prediction, PredictionError>,
        now: Instant,
    ) -> bool {
        let attempt = match self.in_flight.take() {
            Some(attempt) if attempt.id == id => attempt,
            other => {
                self.in_flight = other;
                tracing::debug!(attempt = id.0, "ignoring completion for stale attempt");
                return false;
            }
        };

        match outcome {
            Ok(prediction) => {
                self.show(
                    ResultView::Prediction {
                        sentiment: prediction.sentiment(),
                        label: prediction.label,
                        echo: attempt.text.echo(),
                    },
                    now,
                );
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                self.show(
                    ResultView::Failure {
                        message: err.user_message(),
                    },
                    now,
                );
                self.state = SubmissionState::Error;
            }
        }
        true
    }

    /// Ends the in-flight attempt without an outcome from the client.
    pub fn abort_submission(&mut self, message: impl Into<String>, now: Instant) {
        self.in_flight = None;
        self.show(
            ResultView::Failure {
                message: message.into(),
            },
            now,
        );
        self.state = SubmissionState::Error;
    }

    /// Advances presentation timers; returns whether an animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.result.as_ref().map(|result| result.presentation) {
            Some(Presentation::Revealing { since }) if now.duration_since(since) >= REVEAL_DELAY => {
                if let Some(result) = self.result.as_mut() {
                    result.presentation = Presentation::Shown;
                }
            }
            Some(Presentation::FadingOut { since }) if now.duration_since(since) >= FADE_OUT => {
                self.result = None;
            }
            _ => {}
        }
        self.is_animating()
    }

    fn show(&mut self, view: ResultView, now: Instant) {
        self.result = Some(DisplayedResult {
            view,
            presentation: Presentation::Revealing { since: now },
        });
    }
}
