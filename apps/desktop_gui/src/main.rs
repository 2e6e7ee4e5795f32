use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{PredictionClient, SentimentPredictor};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{SentimentApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop front-end for a sentiment prediction service")]
struct Args {
    /// Prediction endpoint, e.g. http://localhost:5000/predict
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let startup = StartupConfig::from_endpoint_arg(args.endpoint).map_err(|err| {
        tracing::error!("{err:#}");
        eframe::Error::AppCreation(err.into())
    })?;
    tracing::info!(endpoint = %startup.endpoint, "starting sentiment analyzer");

    let predictor: Arc<dyn SentimentPredictor> =
        Arc::new(PredictionClient::new(startup.endpoint.clone()));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, predictor);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sentiment Analyzer")
            .with_inner_size([720.0, 620.0])
            .with_min_inner_size([480.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sentiment Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(SentimentApp::new(cmd_tx, ui_rx, &startup)))),
    )
}
