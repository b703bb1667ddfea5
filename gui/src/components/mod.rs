// GUI components module
pub mod chart;
pub mod forex_panel;
pub mod global_styles;
pub mod header;
pub mod sentiment_panel;
pub mod widget;

pub use forex_panel::ForexPanel;
pub use global_styles::GlobalStyles;
pub use header::Header;
pub use sentiment_panel::SentimentPanel;
