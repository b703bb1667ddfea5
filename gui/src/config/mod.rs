// GUI configuration module
pub mod theme;

use engine::config::EngineSettings;
use serde::Deserialize;

// Mirrors the structure of assets/config/default.json.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub assets: AssetPaths,
    pub engine: EngineSettings,
    pub chart: ChartConfig,
    pub widget: WidgetConfig,
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    /// Window title.
    pub title: String,
    /// "dark" or "light".
    pub theme: String,
    pub language: String,
}

/// Paths are resolved against the working directory at launch.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetPaths {
    /// Name the embedded font is registered under in the stylesheet.
    pub font_family: String,
    pub font: String,
    pub background: String,
    pub logo: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub line_color: String,
    pub line_width: u32,
    /// Horizontal grid line count.
    pub grid_lines: u32,
    pub show_grid: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub width: u32,
    pub height: u32,
    /// Bar interval in the widget's notation, e.g. `D`.
    pub interval: String,
    pub theme: String,
    pub locale: String,
    pub toolbar_bg: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Defaults {
    /// Pair pre-filled in the forex panel.
    pub pair: String,
}

impl AppConfig {
    /// Loads the configuration bundled into the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}
