// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;
mod styles;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("starting financial sentiment desk");

    // The configuration is compiled into the binary; failing to parse it
    // means the build itself is broken, so bail loudly.
    let app_config = match AppConfig::load_default() {
        Ok(config) => {
            tracing::info!(version = %config.version, "loaded embedded configuration");
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed to load embedded configuration");
            panic!("embedded default configuration is malformed: {error}");
        }
    };

    let window = WindowBuilder::new()
        .with_title(app_config.app.title.clone())
        .with_inner_size(LogicalSize::new(1280.0, 860.0));

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .launch(App);
}
