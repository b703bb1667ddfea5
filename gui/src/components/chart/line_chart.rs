// Native close-price line chart, rendered as SVG.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::models::PriceSeries;
use shared::utils::{format_date, format_price, format_timestamp};

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

// Margins leave room for the title and axis labels.
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// Maps series points into pixel coordinates inside the plot rectangle.
fn scale_points(series: &PriceSeries, width: f64, height: f64) -> Vec<(f64, f64)> {
    let n = series.len();
    let Some((min, max)) = series.close_range() else {
        return Vec::new();
    };

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let span = max - min;

    series
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if n == 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + plot_width * i as f64 / (n - 1) as f64
            };
            // A flat series sits at mid-height instead of dividing by zero.
            let y = if span == 0.0 {
                MARGIN_TOP + plot_height / 2.0
            } else {
                MARGIN_TOP + plot_height * (1.0 - (point.close - min) / span)
            };
            (x, y)
        })
        .collect()
}

fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LineChart(series: PriceSeries) -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context::<Signal<AppState>>();
    let palette = ThemePalette::for_theme(&state.read().current_theme);
    let chart = &config.chart;

    if series.is_empty() {
        return rsx! {
            div { class: "chart-frame",
                div { class: "result-box", "No data for {series.pair}." }
            }
        };
    }

    let width = chart.width as f64;
    let height = chart.height as f64;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let line = polyline_points(&scale_points(&series, width, height));

    let (min, max) = series.close_range().unwrap_or((0.0, 0.0));
    let mid = (min + max) / 2.0;
    let (first_date, last_date) = series
        .date_range()
        .unwrap_or((series.points[0].date, series.points[0].date));
    let mid_date = series.points[series.len() / 2].date;

    let grid_ys: Vec<f64> = (0..=chart.grid_lines.max(1))
        .map(|i| MARGIN_TOP + plot_height * f64::from(i) / f64::from(chart.grid_lines.max(1)))
        .collect();

    rsx! {
        div { class: "chart-frame",
            svg {
                width: "{chart.width}",
                height: "{chart.height}",
                view_box: "0 0 {chart.width} {chart.height}",
                text {
                    x: "{width / 2.0}",
                    y: "20",
                    text_anchor: "middle",
                    fill: "{palette.foreground}",
                    font_size: "16",
                    "{series.pair} exchange rate"
                }
                if chart.show_grid {
                    for y in grid_ys {
                        line {
                            x1: "{MARGIN_LEFT}",
                            x2: "{width - MARGIN_RIGHT}",
                            y1: "{y}",
                            y2: "{y}",
                            stroke: "{palette.foreground}",
                            stroke_opacity: "0.3",
                            stroke_dasharray: "4 4",
                            stroke_width: "1",
                        }
                    }
                }
                polyline {
                    points: "{line}",
                    fill: "none",
                    stroke: "{chart.line_color}",
                    stroke_width: "{chart.line_width}",
                }
                // Price scale: top, middle, bottom of the plot.
                text {
                    x: "{MARGIN_LEFT - 8.0}",
                    y: "{MARGIN_TOP + 4.0}",
                    text_anchor: "end",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_price(max)}"
                }
                text {
                    x: "{MARGIN_LEFT - 8.0}",
                    y: "{MARGIN_TOP + plot_height / 2.0 + 4.0}",
                    text_anchor: "end",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_price(mid)}"
                }
                text {
                    x: "{MARGIN_LEFT - 8.0}",
                    y: "{MARGIN_TOP + plot_height + 4.0}",
                    text_anchor: "end",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_price(min)}"
                }
                // Date scale: first, middle, last observation.
                text {
                    x: "{MARGIN_LEFT}",
                    y: "{height - 8.0}",
                    text_anchor: "start",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_date(first_date)}"
                }
                text {
                    x: "{MARGIN_LEFT + (width - MARGIN_LEFT - MARGIN_RIGHT) / 2.0}",
                    y: "{height - 8.0}",
                    text_anchor: "middle",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_date(mid_date)}"
                }
                text {
                    x: "{width - MARGIN_RIGHT}",
                    y: "{height - 8.0}",
                    text_anchor: "end",
                    fill: "{palette.foreground}",
                    font_size: "11",
                    "{format_date(last_date)}"
                }
            }
            p { class: "chart-caption",
                "{series.len()} daily closes · fetched {format_timestamp(series.fetched_at)}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::models::{CurrencyPair, PricePoint};

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 420.0;

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
    fn points_stay_inside_the_plot_rectangle() {
        let scaled = scale_points(&series(&[1.05, 1.11, 1.08, 1.02, 1.09]), WIDTH, HEIGHT);
        assert_eq!(scaled.len(), 5);
        for (x, y) in scaled {
            assert!((MARGIN_LEFT..=WIDTH - MARGIN_RIGHT).contains(&x));
            assert!((MARGIN_TOP..=HEIGHT - MARGIN_BOTTOM).contains(&y));
        }
    }

    #[test]
    fn extremes_touch_the_plot_edges() {
        let scaled = scale_points(&series(&[1.0, 2.0]), WIDTH, HEIGHT);
        assert_eq!(scaled[0].0, MARGIN_LEFT);
        assert_eq!(scaled[0].1, HEIGHT - MARGIN_BOTTOM);
        assert_eq!(scaled[1].0, WIDTH - MARGIN_RIGHT);
        assert_eq!(scaled[1].1, MARGIN_TOP);
    }

    #[test]
    fn flat_series_sits_at_mid_height() {
        let scaled = scale_points(&series(&[1.08, 1.08, 1.08]), WIDTH, HEIGHT);
        let mid = MARGIN_TOP + (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / 2.0;
        assert!(scaled.iter().all(|&(_, y)| y == mid));
    }

    #[test]
    fn single_point_is_centered_horizontally() {
        let scaled = scale_points(&series(&[1.08]), WIDTH, HEIGHT);
        let center = MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0;
        assert_eq!(scaled, vec![(center, MARGIN_TOP + (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / 2.0)]);
    }

    #[test]
    fn empty_series_scales_to_nothing() {
        assert!(scale_points(&series(&[]), WIDTH, HEIGHT).is_empty());
    }

    #[test]
    fn polyline_joins_coordinates_with_spaces() {
        let rendered = polyline_points(&[(64.0, 100.0), (120.5, 92.75)]);
        assert_eq!(rendered, "64.0,100.0 120.5,92.8");
    }
}
