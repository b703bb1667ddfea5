#![allow(non_snake_case)]
use std::path::Path;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::styles;

#[component]
pub fn Header() -> Element {
    let config = use_context::<AppConfig>();

    let logo = use_hook(|| {
        styles::load_base64(Path::new(&config.assets.logo)).map_err(|error| {
            tracing::warn!(%error, "logo not loaded");
            format!("Logo not found: {}", config.assets.logo)
        })
    });

    let logo_node = match &logo {
        Ok(b64) => rsx! {
            img {
                class: "logo",
                width: "180",
                alt: "logo",
                src: "data:image/png;base64,{b64}",
            }
        },
        Err(message) => rsx! {
            p { class: "asset-error", "{message}" }
        },
    };

    rsx! {
        header { class: "masthead",
            {logo_node}
            h1 { class: "title", "💰 Financial Sentiment Analysis" }
            p { class: "subtitle",
                "Scores the tone of financial text and charts foreign-exchange pairs."
            }
        }
    }
}
