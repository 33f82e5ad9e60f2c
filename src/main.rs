//! FlashChat - a live message feed built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the feed presenter
//! - Store thread: runs a Tokio runtime hosting the document store
//! - Snapshots and append results come back over crossbeam channels and are
//!   applied only on the main thread

use eframe::egui;

use flash_chat::app::FlashChatApp;
use flash_chat::config::{self, APP_NAME};
use flash_chat::logging;

fn main() -> eframe::Result<()> {
    let settings = config::load_settings();
    logging::init(&settings.log_filter);
    tracing::info!(collection = %settings.collection, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(FlashChatApp::new(cc, settings)))),
    )
}
