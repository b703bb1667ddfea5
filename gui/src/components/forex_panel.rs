#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::models::{ChartSource, CurrencyPair};

use crate::components::chart::LineChart;
use crate::components::widget::TradingViewWidget;
use crate::config::AppConfig;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::{AppState, ChartView};

#[component]
pub fn ForexPanel() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<EngineClient>();
    let mut state = use_context::<Signal<AppState>>();
    let mut pair_input = use_signal(|| config.defaults.pair.clone());
    let mut source = use_signal(|| ChartSource::Native);

    let on_show = move |_| {
        let raw = pair_input.read().clone();
        let pair = match CurrencyPair::parse(&raw) {
            Ok(pair) => pair,
            Err(error) => {
                state.write().chart = ChartView::Failed(error.to_string());
                return;
            }
        };

        match *source.read() {
            ChartSource::Widget => state.write().chart = ChartView::Widget(pair),
            ChartSource::Native => {
                let cached = state.read().cached_series(&pair).cloned();
                if let Some(series) = cached {
                    state.write().chart = ChartView::Native(series);
                    return;
                }

                state.write().chart = ChartView::Loading(pair.clone());
                let client = client.clone();
                spawn(async move {
                    match client.fetch_series(&pair).await {
                        Ok(series) => {
                            let mut app = state.write();
                            app.cache_series(series.clone());
                            app.chart = ChartView::Native(series);
                        }
                        Err(error) => {
                            tracing::error!(%error, pair = %pair, "price fetch failed");
                            state.write().chart = ChartView::Failed(error.to_string());
                        }
                    }
                });
            }
        }
    };

    rsx! {
        section { class: "panel",
            h3 { "Forex Analysis" }
            div { class: "forex-controls",
                label {
                    "Forex pair (e.g. EURUSD, GBPJPY)"
                    input {
                        class: "pair-input",
                        r#type: "text",
                        value: "{pair_input}",
                        oninput: move |evt| pair_input.set(evt.value()),
                    }
                }
                label {
                    "Data source"
                    select {
                        class: "source-select",
                        onchange: move |evt| {
                            if let Some(choice) = ChartSource::from_label(&evt.value()) {
                                source.set(choice);
                            }
                        },
                        for choice in ChartSource::ALL {
                            option {
                                value: "{choice.label()}",
                                selected: *source.read() == choice,
                                "{choice.label()}"
                            }
                        }
                    }
                }
            }
            div { class: "actions",
                button { class: "action", onclick: on_show, "📈 Show chart" }
            }
            ChartArea {}
        }
    }
}

#[component]
fn ChartArea() -> Element {
    let state = use_context::<Signal<AppState>>();
    match &state.read().chart {
        ChartView::Idle => None,
        ChartView::Loading(pair) => rsx! {
            div { class: "result-box", "Loading {pair}…" }
        },
        ChartView::Native(series) => rsx! {
            LineChart { series: series.clone() }
        },
        ChartView::Widget(pair) => rsx! {
            TradingViewWidget { pair: pair.clone() }
        },
        ChartView::Failed(message) => rsx! {
            div { class: "result-box error", "Chart unavailable: {message}" }
        },
    }
}
