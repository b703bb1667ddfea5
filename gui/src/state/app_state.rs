// Global application state for the GUI: theme, per-panel view state, and
// the per-run cache of fetched price series. Provided to components as a
// shared signal from the root.
use std::collections::HashMap;

use shared::models::{CurrencyPair, PriceSeries, Sentiment};

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Config carries plain strings; anything unrecognized falls back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// Progression of the sentiment panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SentimentView {
    #[default]
    Idle,
    /// Blank or whitespace-only input; no classifier call was made.
    EmptyInput,
    Pending,
    Ready(Sentiment),
    Failed(String),
}

/// Progression of the forex panel's chart area.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartView {
    #[default]
    Idle,
    Loading(CurrencyPair),
    Native(PriceSeries),
    Widget(CurrencyPair),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub current_theme: Theme,
    pub language: String,
    pub sentiment: SentimentView,
    pub chart: ChartView,
    series_cache: HashMap<CurrencyPair, PriceSeries>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            current_theme: Theme::Dark,
            language: "en-US".to_string(),
            sentiment: SentimentView::default(),
            chart: ChartView::default(),
            series_cache: HashMap::new(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        AppState {
            current_theme: Theme::from_name(&config.app.theme),
            language: config.app.language.clone(),
            ..AppState::default()
        }
    }

    /// One fetch per pair per run; repeat requests re-render from here.
    pub fn cache_series(&mut self, series: PriceSeries) {
        self.series_cache.insert(series.pair.clone(), series);
    }

    pub fn cached_series(&self, pair: &CurrencyPair) -> Option<&PriceSeries> {
        self.series_cache.get(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::PricePoint;

    #[test]
    fn unknown_theme_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("DARK"), Theme::Dark);
        assert_eq!(Theme::from_name("solarized"), Theme::Dark);
    }

    #[test]
    fn state_picks_up_config_theme_and_language() {
        let config = AppConfig::load_default().unwrap();
        let state = AppState::from_config(&config);
        assert_eq!(state.current_theme, Theme::Dark);
        assert_eq!(state.language, config.app.language);
        assert_eq!(state.sentiment, SentimentView::Idle);
        assert_eq!(state.chart, ChartView::Idle);
    }

    #[test]
    fn series_cache_round_trips_by_pair() {
        let pair = CurrencyPair::parse("EURUSD").unwrap();
        let series = PriceSeries {
            pair: pair.clone(),
            points: vec![PricePoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                close: 1.08,
            }],
            fetched_at: Utc::now(),
        };

        let mut state = AppState::default();
        assert!(state.cached_series(&pair).is_none());
        state.cache_series(series.clone());
        assert_eq!(state.cached_series(&pair), Some(&series));
    }
}
