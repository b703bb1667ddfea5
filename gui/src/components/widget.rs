// Hosted chart embed. The vendor's documented script-tag widget does not
// execute when injected into a webview DOM, so this renders the equivalent
// hosted `widgetembed` iframe with the same parameters.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::models::CurrencyPair;

use crate::config::{AppConfig, WidgetConfig};

pub fn widget_url(pair: &CurrencyPair, config: &WidgetConfig) -> String {
    let symbol = pair.tradingview_symbol().replace(':', "%3A");
    format!(
        "https://s.tradingview.com/widgetembed/?symbol={symbol}\
         &interval={interval}&theme={theme}&style=1&timezone=Etc%2FUTC\
         &locale={locale}&toolbarbg={toolbar}\
         &hide_top_toolbar=0&enable_publishing=0&saveimage=0",
        interval = config.interval,
        theme = config.theme,
        locale = config.locale,
        toolbar = config.toolbar_bg.trim_start_matches('#'),
    )
}

#[component]
pub fn TradingViewWidget(pair: CurrencyPair) -> Element {
    let config = use_context::<AppConfig>();
    let src = widget_url(&pair, &config.widget);

    rsx! {
        div { class: "widget-frame",
            iframe {
                src: "{src}",
                width: "{config.widget.width}",
                height: "{config.widget.height}",
                style: "border: none;",
                title: "TradingView chart for {pair}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WidgetConfig {
        WidgetConfig {
            width: 800,
            height: 500,
            interval: "D".to_string(),
            theme: "dark".to_string(),
            locale: "en".to_string(),
            toolbar_bg: "#1E222D".to_string(),
        }
    }

    #[test]
    fn url_carries_the_encoded_symbol() {
        let pair = CurrencyPair::parse("gbpjpy").unwrap();
        let url = widget_url(&pair, &config());
        assert!(url.contains("symbol=FX%3AGBPJPY"));
    }

    #[test]
    fn url_carries_the_widget_parameters() {
        let pair = CurrencyPair::parse("EURUSD").unwrap();
        let url = widget_url(&pair, &config());
        assert!(url.starts_with("https://s.tradingview.com/widgetembed/?"));
        assert!(url.contains("interval=D"));
        assert!(url.contains("theme=dark"));
        assert!(url.contains("locale=en"));
        assert!(url.contains("toolbarbg=1E222D"));
    }
}
