//! Pure projection of the view model into what the egui shell paints.

use std::time::{Duration, Instant};

use shared::domain::{Sentiment, COUNTER_WARNING_CHARS, MAX_TEXT_CHARS};

use crate::controller::reducer::{
    Presentation, ResultView, SubmissionState, ViewModel, FADE_OUT, REVEAL_DELAY,
};

pub const POSITIVE_ICON: &str = "😊";
pub const NEGATIVE_ICON: &str = "😔";
pub const ERROR_ICON: &str = "⚠️";
pub const SUBMIT_LABEL: &str = "Analyze Sentiment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub tone: Tone,
    pub icon: &'static str,
    pub title: String,
    pub detail: String,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Limit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub text: String,
    pub level: CounterLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
}

pub fn render_result(model: &ViewModel, now: Instant) -> Option<ResultPanel> {
    let result = model.result()?;
    let opacity = match result.presentation {
        Presentation::Revealing { since } => progress(now, since, REVEAL_DELAY),
        Presentation::Shown => 1.0,
        Presentation::FadingOut { since } => 1.0 - progress(now, since, FADE_OUT),
    };

    let panel = match &result.view {
        ResultView::Prediction {
            label,
            sentiment,
            echo,
        } => {
            let (tone, icon) = match sentiment {
                Sentiment::Positive => (Tone::Positive, POSITIVE_ICON),
                Sentiment::Negative => (Tone::Negative, NEGATIVE_ICON),
            };
            ResultPanel {
                tone,
                icon,
                title: format!("Sentiment: {label}"),
                detail: format!("\"{echo}\""),
                opacity,
            }
        }
        ResultView::Failure { message } => ResultPanel {
            tone: Tone::Error,
            icon: ERROR_ICON,
            title: "Error".to_string(),
            detail: message.clone(),
            opacity,
        },
    };
    Some(panel)
}

fn progress(now: Instant, since: Instant, span: Duration) -> f32 {
    (now.duration_since(since).as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}

pub fn render_counter(model: &ViewModel) -> CounterView {
    let length = model.char_count();
    let level = if length >= MAX_TEXT_CHARS {
        CounterLevel::Limit
    } else if length > COUNTER_WARNING_CHARS {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    };
    CounterView {
        text: format!("{length} / {MAX_TEXT_CHARS}"),
        level,
    }
}

pub fn render_button(model: &ViewModel) -> ButtonView {
    let busy = model.state() == SubmissionState::Loading;
    ButtonView {
        label: SUBMIT_LABEL,
        enabled: !busy,
        busy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{domain::Prediction, error::PredictionError};

    fn finished(
        input: &str,
        outcome: Result<Prediction, PredictionError>,
    ) -> (ViewModel, Instant) {
        let now = Instant::now();
        let mut model = ViewModel::new();
        model.input = input.to_string();
        let attempt = model.begin_submission(now).expect("attempt");
        model.finish_submission(attempt.id, outcome, now);
        (model, now)
    }

    fn settled_panel(model: &ViewModel, at: Instant) -> ResultPanel {
        render_result(model, at + REVEAL_DELAY).expect("panel")
    }

    #[test]
    fn positive_prediction_shows_positive_icon_and_literal_label() {
        let (model, now) = finished("what a great day", Ok(Prediction::new("Positive")));
        let panel = settled_panel(&model, now);

        assert_eq!(panel.tone, Tone::Positive);
        assert_eq!(panel.icon, POSITIVE_ICON);
        assert!(panel.title.contains("Positive"));
        assert_eq!(panel.detail, "\"what a great day\"");
    }

    #[test]
    fn negative_prediction_shows_negative_icon() {
        let (model, now) = finished("what a dull day", Ok(Prediction::new("Negative")));
        let panel = settled_panel(&model, now);

        assert_eq!(panel.tone, Tone::Negative);
        assert_eq!(panel.icon, NEGATIVE_ICON);
        assert_eq!(panel.title, "Sentiment: Negative");
    }

    #[test]
    fn server_error_text_is_rendered_verbatim() {
        let (model, now) = finished(
            "hello there",
            Err(PredictionError::server(400, Some("bad request".to_string()))),
        );
        let panel = settled_panel(&model, now);

        assert_eq!(panel.tone, Tone::Error);
        assert_eq!(panel.icon, ERROR_ICON);
        assert_eq!(panel.title, "Error");
        assert_eq!(panel.detail, "bad request");
    }

    #[test]
    fn transport_failure_asks_to_verify_service() {
        let (model, now) = finished(
            "hello there",
            Err(PredictionError::NetworkUnreachable {
                endpoint: "http://localhost:5000/predict".to_string(),
                reason: "dns error".to_string(),
            }),
        );
        let panel = settled_panel(&model, now);

        assert!(panel
            .detail
            .contains("Please ensure it is running and reachable at http://localhost:5000/predict"));
    }

    #[test]
    fn malformed_success_renders_generic_invalid_response() {
        let (model, now) = finished("hello there", Err(PredictionError::MalformedResponse));
        assert_eq!(settled_panel(&model, now).detail, "Invalid response from server");
    }

    #[test]
    fn long_input_is_echoed_truncated() {
        let input = "z".repeat(140);
        let (model, now) = finished(&input, Ok(Prediction::new("Positive")));
        let panel = settled_panel(&model, now);

        assert_eq!(panel.detail, format!("\"{}...\"", "z".repeat(100)));
    }

    #[test]
    fn opacity_ramps_in_and_out() {
        let (mut model, now) = finished("hello there", Ok(Prediction::new("Positive")));

        assert_eq!(render_result(&model, now).map(|p| p.opacity), Some(0.0));
        let halfway = render_result(&model, now + REVEAL_DELAY / 2).expect("panel").opacity;
        assert!(halfway > 0.4 && halfway < 0.6);

        model.tick(now + REVEAL_DELAY);
        let settled = render_result(&model, now + REVEAL_DELAY).map(|p| p.opacity);
        assert_eq!(settled, Some(1.0));

        let typed_at = now + Duration::from_secs(1);
        model.on_input(typed_at);
        let faded = render_result(&model, typed_at + FADE_OUT).map(|p| p.opacity);
        assert_eq!(faded, Some(0.0));
    }

    #[test]
    fn nothing_rendered_without_result() {
        assert!(render_result(&ViewModel::new(), Instant::now()).is_none());
    }

    #[test]
    fn counter_levels_follow_thresholds() {
        let mut model = ViewModel::new();

        model.input = "a".repeat(900);
        assert_eq!(
            render_counter(&model),
            CounterView {
                text: "900 / 1000".to_string(),
                level: CounterLevel::Normal,
            }
        );

        model.input.push('a');
        assert_eq!(render_counter(&model).level, CounterLevel::Warning);

        model.input = "a".repeat(1000);
        assert_eq!(render_counter(&model).level, CounterLevel::Limit);
    }

    #[test]
    fn button_is_disabled_only_while_loading() {
        let now = Instant::now();
        let mut model = ViewModel::new();
        model.input = "good enough".to_string();
        assert!(render_button(&model).enabled);

        let attempt = model.begin_submission(now).expect("attempt");
        let busy = render_button(&model);
        assert!(!busy.enabled);
        assert!(busy.busy);

        model.finish_submission(attempt.id, Err(PredictionError::MalformedResponse), now);
        assert!(render_button(&model).enabled);
    }
}
