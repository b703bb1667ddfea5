use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("currency pair must be exactly 6 letters, got {0} characters")]
    BadLength(usize),

    #[error("currency pair must be alphabetic, got '{0}'")]
    NotAlphabetic(String),
}

/// A validated foreign-exchange pair code such as `EURUSD`.
///
/// Always stored uppercased; the first three letters are the base currency,
/// the last three the quote currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair(String);

impl TryFrom<String> for CurrencyPair {
    type Error = PairError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.0
    }
}

impl CurrencyPair {
    pub fn parse(input: &str) -> Result<Self, PairError> {
        let trimmed = input.trim();
        let count = trimmed.chars().count();
        if count != 6 {
            return Err(PairError::BadLength(count));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PairError::NotAlphabetic(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        &self.0[..3]
    }

    pub fn quote(&self) -> &str {
        &self.0[3..]
    }

    /// Symbol in the market-data source's convention, e.g. `EURUSD=X`.
    pub fn yahoo_ticker(&self) -> String {
        format!("{}{}=X", self.base(), self.quote())
    }

    /// Symbol in the charting widget's convention, e.g. `FX:EURUSD`.
    pub fn tradingview_symbol(&self) -> String {
        format!("FX:{}", self.0)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A single daily observation of a pair's closing rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// A time-ordered close-price series for one pair, as returned by the
/// market-data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub pair: CurrencyPair,
    pub points: Vec<PricePoint>,
    pub fetched_at: DateTime<Utc>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Lowest and highest close in the series.
    pub fn close_range(&self) -> Option<(f64, f64)> {
        let mut points = self.points.iter();
        let first = points.next()?.close;
        Some(points.fold((first, first), |(min, max), p| {
            (min.min(p.close), max.max(p.close))
        }))
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }
}

/// Polarity labels emitted by the pretrained financial-sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sentiment label '{0}'")]
pub struct UnknownLabel(pub String);

/// Classifier verdict: polarity plus model confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Where the forex chart comes from: our own plot of fetched data, or the
/// hosted third-party widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSource {
    Native,
    Widget,
}

impl ChartSource {
    pub const ALL: [ChartSource; 2] = [ChartSource::Native, ChartSource::Widget];

    pub fn label(&self) -> &'static str {
        match self {
            ChartSource::Native => "Price history plot",
            ChartSource::Widget => "TradingView widget",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        PriceSeries {
            pair: CurrencyPair::parse("EURUSD").unwrap(),
            points: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: start + chrono::Days::new(i as u64),
                    close,
                })
                .collect(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn pair_is_uppercased() {
        let pair = CurrencyPair::parse("gbpjpy").unwrap();
        assert_eq!(pair.as_str(), "GBPJPY");
        assert_eq!(pair.base(), "GBP");
        assert_eq!(pair.quote(), "JPY");
    }

    #[test]
    fn pair_surrounding_whitespace_is_ignored() {
        let pair = CurrencyPair::parse("  eurusd ").unwrap();
        assert_eq!(pair.as_str(), "EURUSD");
    }

    #[test]
    fn pair_ticker_formats() {
        let pair = CurrencyPair::parse("eurusd").unwrap();
        assert_eq!(pair.yahoo_ticker(), "EURUSD=X");
        assert_eq!(pair.tradingview_symbol(), "FX:EURUSD");
    }

    #[test]
    fn pair_rejects_wrong_length() {
        assert_eq!(CurrencyPair::parse("EUR"), Err(PairError::BadLength(3)));
        assert_eq!(
            CurrencyPair::parse("EURUSDX"),
            Err(PairError::BadLength(7))
        );
    }

    #[test]
    fn pair_rejects_non_alphabetic() {
        assert_eq!(
            CurrencyPair::parse("EUR/US"),
            Err(PairError::NotAlphabetic("EUR/US".to_string()))
        );
    }

    #[test]
    fn close_range_spans_series() {
        let series = series(&[1.08, 1.05, 1.11, 1.07]);
        assert_eq!(series.close_range(), Some((1.05, 1.11)));
    }

    #[test]
    fn range_helpers_on_empty_series() {
        let series = series(&[]);
        assert!(series.is_empty());
        assert_eq!(series.close_range(), None);
        assert_eq!(series.date_range(), None);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn sentiment_label_parses_case_insensitively() {
        assert_eq!("POSITIVE".parse(), Ok(SentimentLabel::Positive));
        assert_eq!("neutral".parse(), Ok(SentimentLabel::Neutral));
        assert!("bullish".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn chart_source_round_trips_through_label() {
        for source in ChartSource::ALL {
            assert_eq!(ChartSource::from_label(source.label()), Some(source));
        }
        assert_eq!(ChartSource::from_label("nonsense"), None);
    }
}
