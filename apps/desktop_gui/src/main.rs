mod backend_bridge;
mod config;
mod controller;
mod ui;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use client_core::{BriefFetcher, GeminiClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::{CarspireApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "carspire", about = "CarspireOnline desktop client")]
struct Args {
    /// Path to carspire.toml; defaults to ./carspire.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Prefills the login email field.
    #[arg(long)]
    email: Option<String>,
}

fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let settings = config::load_settings(&config_path);
    tracing::info!(
        config = %config_path.display(),
        model = %settings.model,
        has_api_key = settings.api_key.is_some(),
        "starting carspire"
    );

    let fetcher = BriefFetcher::new(Arc::new(GeminiClient::new(settings.gemini_config())))
        .with_timeout(settings.request_timeout());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let startup = StartupConfig { email: args.email };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CarspireOnline")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "CarspireOnline",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(ui::theme::visuals());
            let repaint_ctx = cc.egui_ctx.clone();
            runtime::launch(cmd_rx, ui_tx, fetcher, move || repaint_ctx.request_repaint());
            Ok(Box::new(CarspireApp::new(cmd_tx, ui_rx, startup)))
        }),
    )
}
