//! Reusable Dioxus RSX components for the SCA apps.

mod chart_header;
mod donut_chart;
mod error_display;
mod feature_bars;
mod filter_bar;
mod heat_map;
mod kpi_cards;
mod loading_overlay;
mod loading_spinner;
mod no_data;
mod posting_schedule;
mod scatter_plot;
mod sentiment_bar;
mod sparkline;
mod time_range_slider;
mod top_shorts;

pub use chart_header::ChartHeader;
pub use donut_chart::DonutChart;
pub use error_display::ErrorDisplay;
pub use feature_bars::FeatureBarChart;
pub use filter_bar::FilterBar;
pub use heat_map::PostingHeatMap;
pub use kpi_cards::KpiCardsRow;
pub use loading_overlay::LoadingOverlay;
pub use loading_spinner::LoadingSpinner;
pub use no_data::NoData;
pub use posting_schedule::PostingSchedule;
pub use scatter_plot::ScatterPlot;
pub use sentiment_bar::SentimentBar;
pub use sparkline::Sparkline;
pub use time_range_slider::TimeRangeSlider;
pub use top_shorts::TopShortsList;

/// Rose accent carried over from the rest of the site.
pub const ACCENT: &str = "#e78383";
/// Muted variant used for strokes and hover marks.
pub const ACCENT_DARK: &str = "#b85c5c";
/// Fill for "without feature" / inactive segments.
pub const NEUTRAL_SEGMENT: &str = "#dddddd";
/// Secondary text.
pub const TEXT_MUTED: &str = "#666";
