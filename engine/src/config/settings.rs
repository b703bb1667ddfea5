// Engine settings, deserialized from the application configuration.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub market_data: MarketDataSettings,
    pub sentiment: SentimentSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketDataSettings {
    /// Market-data API root, e.g. `https://query1.finance.yahoo.com`.
    pub base_url: String,
    /// Lookback window in the source's notation, e.g. `1mo`.
    pub range: String,
    /// Bar interval, e.g. `1d`.
    pub interval: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentimentSettings {
    /// Hosted inference API root.
    pub base_url: String,
    /// Pretrained model identifier on the inference host.
    pub model: String,
    /// Generous: the first call may wait for model warm-up.
    pub timeout_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            market_data: MarketDataSettings::default(),
            sentiment: SentimentSettings::default(),
        }
    }
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        MarketDataSettings {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            range: "1mo".to_string(),
            interval: "1d".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for SentimentSettings {
    fn default() -> Self {
        SentimentSettings {
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "mrm8488/distilroberta-finetuned-financial-news-sentiment-analysis"
                .to_string(),
            timeout_secs: 60,
        }
    }
}

impl SentimentSettings {
    /// Optional inference token. Anonymous calls work but are rate limited.
    pub fn api_token() -> Option<String> {
        std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let settings = EngineSettings::default();
        assert!(settings.market_data.base_url.starts_with("https://"));
        assert_eq!(settings.market_data.range, "1mo");
        assert_eq!(settings.market_data.interval, "1d");
        assert!(settings.sentiment.model.contains("financial-news-sentiment"));
    }

    #[test]
    fn settings_deserialize_from_json() {
        let json = r#"{
            "market_data": {
                "base_url": "http://localhost:9999",
                "range": "3mo",
                "interval": "1d",
                "timeout_secs": 5
            },
            "sentiment": {
                "base_url": "http://localhost:9998",
                "model": "some/model",
                "timeout_secs": 10
            }
        }"#;
        let settings: EngineSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.market_data.range, "3mo");
        assert_eq!(settings.sentiment.model, "some/model");
    }
}
