// Client for the market-data source's chart endpoint.
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::models::{CurrencyPair, PricePoint, PriceSeries};

use crate::config::MarketDataSettings;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct MarketDataClient {
    client: Client,
    base_url: String,
    range: String,
    interval: String,
    timeout: Duration,
}

// Chart envelope: `chart.result[0]` carries parallel `timestamp` and
// `indicators.quote[0].close` arrays.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl MarketDataClient {
    pub fn new(settings: &MarketDataSettings) -> Self {
        MarketDataClient {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            range: settings.range.clone(),
            interval: settings.interval.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Points the client at a different host. Test hook.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetches the configured lookback of daily closes for `pair`.
    pub async fn fetch_daily_closes(&self, pair: &CurrencyPair) -> Result<PriceSeries> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, pair.yahoo_ticker());
        tracing::info!(pair = %pair, range = %self.range, interval = %self.interval, "fetching daily closes");

        let envelope: ChartEnvelope = self
            .client
            .get(&url)
            .query(&[
                ("range", self.range.as_str()),
                ("interval", self.interval.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let series = series_from_envelope(pair.clone(), envelope)?;
        tracing::debug!(pair = %pair, points = series.len(), "decoded price series");
        Ok(series)
    }
}

fn series_from_envelope(pair: CurrencyPair, envelope: ChartEnvelope) -> Result<PriceSeries> {
    if let Some(err) = envelope.chart.error {
        return Err(EngineError::MarketDataFormat(format!(
            "{}: {}",
            err.code, err.description
        )));
    }

    let result = envelope
        .chart
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
        .ok_or_else(|| EngineError::MarketDataFormat("missing chart result".to_string()))?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| EngineError::MarketDataFormat("missing quote block".to_string()))?
        .close;

    // Null closes mark days without a settlement (holidays); skip them.
    let points: Vec<PricePoint> = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = close?;
            let date = DateTime::<Utc>::from_timestamp(ts, 0)?.date_naive();
            Some(PricePoint { date, close })
        })
        .collect();

    if points.is_empty() {
        return Err(EngineError::EmptySeries(pair.to_string()));
    }

    Ok(PriceSeries {
        pair,
        points,
        fetched_at: Utc::now(),
    })
}
