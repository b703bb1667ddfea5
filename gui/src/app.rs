#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{ForexPanel, GlobalStyles, Header, SentimentPanel};
use crate::config::AppConfig;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    // Same embedded config main() already validated before launch.
    let config = use_context_provider(|| {
        AppConfig::load_default().expect("embedded default configuration is malformed")
    });
    use_context_provider(|| Signal::new(AppState::from_config(&config)));
    use_context_provider(|| EngineClient::new(&config.engine));

    rsx! {
        GlobalStyles {}
        div { class: "page",
            Header {}
            SentimentPanel {}
            hr { class: "divider" }
            ForexPanel {}
        }
    }
}
