use engine::config::{EngineSettings, SentimentSettings};
use engine::data::MarketDataClient;
use engine::sentiment::SentimentClient;
use engine::EngineError;
use httpmock::prelude::*;
use serde_json::json;
use shared::models::{CurrencyPair, SentimentLabel};

fn pair() -> CurrencyPair {
    CurrencyPair::parse("EURUSD").unwrap()
}

#[tokio::test]
async fn fetches_and_decodes_a_daily_series() {
    let server = MockServer::start();
    let chart_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/EURUSD=X")
            .query_param("range", "1mo")
            .query_param("interval", "1d");
        then.status(200).json_body(json!({
            "chart": {
                "result": [{
                    "meta": {"currency": "USD", "symbol": "EURUSD=X"},
                    "timestamp": [1709251200, 1709337600, 1709596800],
                    "indicators": {
                        "quote": [{"close": [1.0805, null, 1.0851]}]
                    }
                }],
                "error": null
            }
        }));
    });

    let client =
        MarketDataClient::new(&EngineSettings::default().market_data).with_base_url(&server.base_url());
    let series = client.fetch_daily_closes(&pair()).await.unwrap();

    chart_mock.assert();
    assert_eq!(series.pair, pair());
    assert_eq!(series.len(), 2);
    assert_eq!(series.latest().unwrap().close, 1.0851);
}

#[tokio::test]
async fn market_data_http_failure_maps_to_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/EURUSD=X");
        then.status(404).body("Not Found");
    });

    let client =
        MarketDataClient::new(&EngineSettings::default().market_data).with_base_url(&server.base_url());
    let err = client.fetch_daily_closes(&pair()).await.unwrap_err();

    assert!(matches!(err, EngineError::Http { .. }));
}

#[tokio::test]
async fn classifies_text_through_the_inference_api() {
    let server = MockServer::start();
    let settings = SentimentSettings {
        base_url: server.base_url(),
        model: "acme/financial-sentiment".to_string(),
        timeout_secs: 5,
    };
    let inference_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/acme/financial-sentiment")
            .json_body_partial(r#"{"inputs": "Margins widened on record revenue."}"#);
        then.status(200).json_body(json!([[
            {"label": "positive", "score": 0.97},
            {"label": "neutral", "score": 0.02},
            {"label": "negative", "score": 0.01}
        ]]));
    });

    let client = SentimentClient::new(&settings);
    let sentiment = client
        .classify("Margins widened on record revenue.")
        .await
        .unwrap();

    inference_mock.assert();
    assert_eq!(sentiment.label, SentimentLabel::Positive);
    assert!((sentiment.score - 0.97).abs() < 1e-9);
}

#[tokio::test]
async fn inference_failure_carries_status_and_body() {
    let server = MockServer::start();
    let settings = SentimentSettings {
        base_url: server.base_url(),
        model: "acme/financial-sentiment".to_string(),
        timeout_secs: 5,
    };
    server.mock(|when, then| {
        when.method(POST).path("/models/acme/financial-sentiment");
        then.status(503).body("model is overloaded");
    });

    let client = SentimentClient::new(&settings);
    let err = client.classify("any text").await.unwrap_err();

    match err {
        EngineError::Model(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
