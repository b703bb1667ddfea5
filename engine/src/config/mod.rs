pub mod settings;

pub use settings::{EngineSettings, MarketDataSettings, SentimentSettings};
