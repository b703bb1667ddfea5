// Injects the page stylesheet, or reports which asset is missing and
// leaves the page unstyled.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;
use crate::styles;

#[component]
pub fn GlobalStyles() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context::<Signal<AppState>>();

    // Assets do not change while the app runs; load them once.
    let css = use_hook(|| {
        let palette = ThemePalette::for_theme(&state.read().current_theme);
        styles::global_css(&config.assets, &palette).map_err(|message| {
            tracing::warn!(%message, "style injection skipped");
            message
        })
    });

    match css {
        Ok(css) => rsx! {
            style { "{css}" }
        },
        // The error banner styles itself inline: the stylesheet is exactly
        // what failed to load.
        Err(message) => rsx! {
            div {
                style: "background-color: #7f1d1d; color: white; font-family: sans-serif; padding: 10px; border-radius: 5px; margin: 10px;",
                "{message}"
            }
        },
    }
}
