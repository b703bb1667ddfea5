// Bridges UI event handlers to the engine's async clients.
use anyhow::Result;
use engine::config::EngineSettings;
use engine::data::MarketDataClient;
use engine::sentiment::SentimentClient;
use shared::models::{CurrencyPair, PriceSeries, Sentiment};

#[derive(Clone)]
pub struct EngineClient {
    market_data: MarketDataClient,
    sentiment: SentimentClient,
}

impl EngineClient {
    pub fn new(settings: &EngineSettings) -> Self {
        EngineClient {
            market_data: MarketDataClient::new(&settings.market_data),
            sentiment: SentimentClient::new(&settings.sentiment),
        }
    }

    pub async fn fetch_series(&self, pair: &CurrencyPair) -> Result<PriceSeries> {
        Ok(self.market_data.fetch_daily_closes(pair).await?)
    }

    pub async fn classify(&self, text: &str) -> Result<Sentiment> {
        Ok(self.sentiment.classify(text).await?)
    }
}
