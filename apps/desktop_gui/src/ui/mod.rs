//! UI layer for the desktop GUI: app shell and the pure render step it paints from.

pub mod app;
pub mod render;

pub use app::{SentimentApp, StartupConfig};
