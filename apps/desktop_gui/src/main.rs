use anyhow::{anyhow, Context, Result};
use client_core::{config::load_settings, ViewOptions};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::ChatFormApp;

fn main() -> Result<()> {
    let settings = load_settings().context("failed to load settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();
    tracing::info!(
        api_base_url = %settings.api_base_url,
        locale = %settings.locale,
        "starting chat form"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_base_url.clone());

    let view_options = ViewOptions::local(settings.locale);
    let window_title = settings.locale.messages().heading;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title)
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChatFormApp::new(cmd_tx, ui_rx, view_options)))),
    )
    .map_err(|err| anyhow!("chat form window failed: {err}"))
}
