pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod cv;
pub mod forum;
pub mod i18n;
pub mod interview;
pub mod models;

use anyhow::{anyhow, Result};
use eframe::{self, egui};

pub use app::KariyerApp;
use config::ClientConfig;
use i18n::Text;

/// Launches the desktop client configured from the environment.
pub fn run_frontend() -> Result<()> {
    run_frontend_with_options(ClientConfig::from_env()?, default_native_options())
}

/// Launches the desktop client with caller-provided configuration and window options.
pub fn run_frontend_with_options(
    config: ClientConfig,
    options: eframe::NativeOptions,
) -> Result<()> {
    let _ = env_logger::builder().is_test(false).try_init();
    let app = KariyerApp::new(&config)?;
    eframe::run_native(
        Text::AppTitle.tr(),
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}

fn default_native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    }
}
