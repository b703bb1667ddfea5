use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("market data response malformed: {0}")]
    MarketDataFormat(String),

    #[error("no price data returned for {0}")]
    EmptySeries(String),

    #[error("sentiment model error: {0}")]
    Model(String),

    #[error("invalid currency pair: {source}")]
    Pair {
        #[from]
        source: shared::models::PairError,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
