// Global style injection: the font and background image are embedded into
// the stylesheet as base64 data URLs, the way a self-contained page wants
// them. A missing asset degrades to a user-visible message, never a crash.
use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::config::theme::ThemePalette;
use crate::config::AssetPaths;

pub fn load_base64(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading asset {}", path.display()))?;
    Ok(BASE64.encode(bytes))
}

/// Builds the page stylesheet, or the message to show instead. No partial
/// styling: either both required assets embed, or the page stays unstyled.
pub fn global_css(
    assets: &AssetPaths,
    palette: &ThemePalette,
) -> Result<String, String> {
    let font_path = Path::new(&assets.font);
    if !font_path.is_file() {
        return Err(format!("Font not found: {}", assets.font));
    }
    let background_path = Path::new(&assets.background);
    if !background_path.is_file() {
        return Err(format!("Background image not found: {}", assets.background));
    }

    let font_b64 = load_base64(font_path).map_err(|e| e.to_string())?;
    let background_b64 = load_base64(background_path).map_err(|e| e.to_string())?;
    Ok(build_global_css(
        &assets.font_family,
        &font_b64,
        &background_b64,
        palette,
    ))
}

pub fn build_global_css(
    font_family: &str,
    font_b64: &str,
    background_b64: &str,
    palette: &ThemePalette,
) -> String {
    format!(
        r#"
@font-face {{
  font-family: '{font_family}';
  src: url(data:font/otf;base64,{font_b64}) format('opentype');
}}

html, body, #main {{
  font-family: '{font_family}', sans-serif;
  color: {foreground};
  margin: 0;
}}

body {{
  background: url("data:image/jpeg;base64,{background_b64}") no-repeat center center fixed;
  background-size: cover;
}}

.page {{ max-width: 920px; margin: 0 auto; padding: 24px; }}

.masthead {{ text-align: center; }}
.masthead .title {{ font-size: 50px; margin: 8px 0; }}
.masthead .subtitle {{ font-size: 22px; margin: 0 0 16px 0; }}

.panel h3 {{ margin-bottom: 8px; }}

/* Free-form input stays in a standard face, dark on light. */
.text-input, .pair-input {{
  font-family: sans-serif;
  color: black;
  background-color: white;
  border: 1px solid {panel_border};
  border-radius: 4px;
  padding: 8px;
}}
.text-input {{ width: 100%; min-height: 90px; box-sizing: border-box; }}

.actions {{ display: flex; justify-content: center; margin: 12px 0; }}

button.action {{
  font-family: '{font_family}', sans-serif;
  color: {foreground};
  background-color: {panel_background};
  border: 1px solid {panel_border};
  border-radius: 4px;
  padding: 8px 18px;
  cursor: pointer;
}}
button.action:hover {{ border-color: {foreground}; }}

select.source-select {{
  color: {foreground};
  background-color: {panel_background};
  border: 1px solid {panel_border};
  border-radius: 4px;
  padding: 8px;
}}
select.source-select option {{ color: black; background-color: white; }}

.result-box {{
  font-family: sans-serif;
  color: {foreground};
  background-color: {result_background};
  padding: 10px;
  border-radius: 5px;
  margin: 10px 0;
}}
.result-box.error {{ border-left: 4px solid {error}; }}

.asset-error {{
  font-family: sans-serif;
  color: {foreground};
  background-color: {result_background};
  border-left: 4px solid {error};
  padding: 6px 10px;
}}

.chart-frame, .widget-frame {{
  background-color: {chart_background};
  border-radius: 5px;
  padding: 10px;
  margin: 10px 0;
}}
.chart-caption {{ font-family: sans-serif; font-size: 13px; opacity: 0.8; }}

hr.divider {{ border-color: {foreground}; margin: 30px 0; }}

.forex-controls {{ display: flex; gap: 16px; }}
.forex-controls label {{ display: flex; flex-direction: column; gap: 4px; flex: 1; }}
"#,
        foreground = palette.foreground,
        panel_background = palette.panel_background,
        panel_border = palette.panel_border,
        result_background = palette.result_background,
        chart_background = palette.chart_background,
        error = palette.error,
    )
}
