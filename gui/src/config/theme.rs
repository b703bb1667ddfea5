// Theme palettes: page, panel, and chart-frame colors.
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub foreground: String,
    pub panel_background: String,
    pub panel_border: String,
    pub result_background: String,
    pub chart_background: String,
    pub accent: String,
    pub error: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            foreground: "#ffffff".to_string(),
            panel_background: "rgba(50, 50, 50, 0.7)".to_string(),
            panel_border: "#444444".to_string(),
            result_background: "rgba(0, 0, 0, 0.5)".to_string(),
            chart_background: "rgba(0, 0, 0, 0.7)".to_string(),
            accent: "#26a69a".to_string(),
            error: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            foreground: "#1e1e1e".to_string(),
            panel_background: "rgba(255, 255, 255, 0.8)".to_string(),
            panel_border: "#c0c0c0".to_string(),
            result_background: "rgba(255, 255, 255, 0.7)".to_string(),
            chart_background: "rgba(245, 245, 245, 0.9)".to_string(),
            accent: "#009688".to_string(),
            error: "#f44336".to_string(),
        }
    }

    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_per_theme() {
        assert_ne!(
            ThemePalette::for_theme(&Theme::Dark),
            ThemePalette::for_theme(&Theme::Light)
        );
    }
}
