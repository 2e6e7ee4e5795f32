use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use client_core::DEFAULT_PREDICT_URL;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use shared::{domain::MAX_TEXT_CHARS, error::generic_failure_message};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{SubmitRejected, ViewModel};
use crate::ui::render::{
    render_button, render_counter, render_result, CounterLevel, ResultPanel, Tone,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub endpoint: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_URL.to_string(),
        }
    }
}

impl StartupConfig {
    /// Builds the config from the optional `--endpoint` override.
    pub fn from_endpoint_arg(endpoint: Option<String>) -> anyhow::Result<Self> {
        let Some(raw) = endpoint else {
            return Ok(Self::default());
        };
        let raw = raw.trim();
        let parsed = url::Url::parse(raw)
            .with_context(|| format!("invalid prediction endpoint '{raw}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "prediction endpoint must use http or https, got '{}'",
                parsed.scheme()
            );
        }
        Ok(Self {
            endpoint: raw.to_string(),
        })
    }
}

pub struct SentimentApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ViewModel,
    status: String,
    endpoint: String,
}

impl SentimentApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            view: ViewModel::new(),
            status: "Starting...".to_string(),
            endpoint: startup.endpoint.clone(),
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        loop {
            let event = match self.ui_rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.view.is_loading() {
                        self.handle_bridge_error(UiError::worker_stopped(), now);
                    }
                    break;
                }
            };
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => self.handle_bridge_error(err, now),
                UiEvent::PredictionFinished { attempt, outcome } => {
                    self.view.finish_submission(attempt, outcome, now);
                }
            }
        }
    }

    fn handle_bridge_error(&mut self, err: UiError, now: Instant) {
        tracing::error!(context = ?err.context(), "{}", err.message());
        self.status = format!("{}: {}", err_label(err.category()), err.message());
        if err.ends_in_flight_attempt() && self.view.is_loading() {
            self.view.abort_submission(generic_failure_message(), now);
        }
    }

    fn submit(&mut self, now: Instant) {
        let attempt = match self.view.begin_submission(now) {
            Ok(attempt) => attempt,
            Err(SubmitRejected::InFlight) => return,
            Err(SubmitRejected::Invalid(err)) => {
                tracing::debug!("submission rejected locally: {err}");
                return;
            }
        };

        let cmd = BackendCommand::Predict {
            attempt: attempt.id,
            text: attempt.text,
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            let err = UiError::from(err);
            self.status = format!("{}: {}", err_label(err.category()), err.message());
            self.view.abort_submission(generic_failure_message(), now);
        }
    }

    fn show_form(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        let mut submit_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(420.0, 640.0);
            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        ui.heading("Sentiment Analyzer");
                        ui.weak("Find out whether a piece of text reads positive or negative.");
                        ui.add_space(6.0);

                        let edit = egui::TextEdit::multiline(&mut self.view.input)
                            .id_salt("analysis_text")
                            .char_limit(MAX_TEXT_CHARS)
                            .hint_text("Enter text to analyze...")
                            .desired_rows(6)
                            .desired_width(f32::INFINITY);
                        let response = ui.add(edit);
                        if response.changed() {
                            self.view.on_input(now);
                        }

                        let counter = render_counter(&self.view);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(counter.text)
                                    .small()
                                    .color(counter_color(ui, counter.level)),
                            );
                        });

                        let shortcut = response.has_focus()
                            && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

                        let button = render_button(&self.view);
                        ui.horizontal(|ui| {
                            let width = if button.busy {
                                ui.available_width() - 28.0
                            } else {
                                ui.available_width()
                            };
                            let clicked = ui
                                .add_enabled(
                                    button.enabled,
                                    egui::Button::new(
                                        egui::RichText::new(button.label).strong().size(16.0),
                                    )
                                    .min_size(egui::vec2(width, 40.0)),
                                )
                                .clicked();
                            if button.busy {
                                ui.spinner();
                            }
                            submit_requested = clicked || (shortcut && button.enabled);
                        });

                        if let Some(panel) = render_result(&self.view, now) {
                            ui.add_space(8.0);
                            show_result_panel(ui, &panel);
                        }
                    });

                ui.add_space(8.0);
                ui.weak(format!("{} | {}", self.status, self.endpoint));
            });
        });

        submit_requested
    }
}

fn counter_color(ui: &egui::Ui, level: CounterLevel) -> egui::Color32 {
    match level {
        CounterLevel::Normal => ui.visuals().weak_text_color(),
        CounterLevel::Warning => egui::Color32::from_rgb(214, 158, 46),
        CounterLevel::Limit => egui::Color32::from_rgb(211, 72, 72),
    }
}

fn tone_colors(tone: Tone) -> (egui::Color32, egui::Color32) {
    match tone {
        Tone::Positive => (
            egui::Color32::from_rgb(39, 94, 58),
            egui::Color32::from_rgb(92, 178, 112),
        ),
        Tone::Negative => (
            egui::Color32::from_rgb(104, 45, 52),
            egui::Color32::from_rgb(186, 92, 104),
        ),
        Tone::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Color32::from_rgb(175, 96, 96),
        ),
    }
}

fn show_result_panel(ui: &mut egui::Ui, panel: &ResultPanel) {
    let (fill, stroke) = tone_colors(panel.tone);
    ui.scope(|ui| {
        ui.set_opacity(panel.opacity);
        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(panel.icon).size(32.0));
                    ui.label(
                        egui::RichText::new(&panel.title)
                            .strong()
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(&panel.detail)
                            .italics()
                            .color(egui::Color32::WHITE),
                    );
                });
            });
    });
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);
        let animating = self.view.tick(now);

        if self.show_form(ctx, now) {
            self.submit(now);
        }

        if animating || self.view.is_animating() || self.view.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
