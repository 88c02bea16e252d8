//! Entry point for the Kartela desktop app.

use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod chains;
mod choices;
mod components;
mod config;
mod state;
mod toggles;

const APP_CSS: &str = include_str!("style.css");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("kartela_admin=info,kartela_forms=info,kartela_lookup=info")
        }))
        .init();

    let app_config = config::AppConfig::from_env()?;
    tracing::info!(api_url = %app_config.api_url, "Starting Kartela");

    // Read optional window geometry from env (set by the session tiler)
    let geometry = app_config.window;

    let mut wb = WindowBuilder::new()
        .with_title("Καρτέλα - Μητρώο Ωφελούμενων")
        .with_maximized(false);

    if let (Some(w), Some(h)) = (geometry.width, geometry.height) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(980.0, 760.0));
    }
    if let (Some(x), Some(y)) = (geometry.x, geometry.y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .with_context(app_config)
        .launch(components::app::App);

    Ok(())
}
