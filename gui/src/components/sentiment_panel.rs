#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::utils::format_score;

use crate::services::engine_client::EngineClient;
use crate::state::app_state::{AppState, SentimentView};

pub(crate) const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";

/// Blank and whitespace-only input short-circuits before any model call.
pub(crate) fn classifiable(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[component]
pub fn SentimentPanel() -> Element {
    let client = use_context::<EngineClient>();
    let mut state = use_context::<Signal<AppState>>();
    let mut text = use_signal(String::new);

    let on_analyze = move |_| {
        let raw = text.read().clone();
        let input = match classifiable(&raw) {
            Some(input) => input.to_string(),
            None => {
                state.write().sentiment = SentimentView::EmptyInput;
                return;
            }
        };

        state.write().sentiment = SentimentView::Pending;
        let client = client.clone();
        spawn(async move {
            match client.classify(&input).await {
                Ok(sentiment) => state.write().sentiment = SentimentView::Ready(sentiment),
                Err(error) => {
                    tracing::error!(%error, "sentiment classification failed");
                    state.write().sentiment = SentimentView::Failed(error.to_string());
                }
            }
        });
    };

    rsx! {
        section { class: "panel",
            h3 { "Sentiment Analysis" }
            textarea {
                class: "text-input",
                placeholder: "Enter your text here",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            div { class: "actions",
                button { class: "action", onclick: on_analyze, "💬 Analyze sentiment" }
            }
            SentimentResult {}
        }
    }
}

#[component]
fn SentimentResult() -> Element {
    let state = use_context::<Signal<AppState>>();
    match &state.read().sentiment {
        SentimentView::Idle => None,
        SentimentView::EmptyInput => rsx! {
            div { class: "result-box", "{EMPTY_INPUT_MESSAGE}" }
        },
        SentimentView::Pending => rsx! {
            div { class: "result-box", "Scoring text…" }
        },
        SentimentView::Ready(sentiment) => rsx! {
            div { class: "result-box",
                "💬 "
                strong { "Sentiment: " }
                "{sentiment.label}  |  "
                strong { "Score: " }
                "{format_score(sentiment.score)}"
            }
        },
        SentimentView::Failed(message) => rsx! {
            div { class: "result-box error", "Analysis failed: {message}" }
        },
    }
}
