//! Statistics and summaries.
//!
//! - [`calculate_generic`] reduces any numeric series to count/min/max/mean/stdev
//! - [`analyze_simulation`] summarizes a solver result per circuit family
//! - [`analyze_market_data`] derives change, volatility and trend from OHLC prices
//! - [`DataTable`] turns user-edited tables into aligned numeric series
//! - [`pie_scatter`] builds the scatter-point pie preview
//!
//! Nothing here returns an error: missing or degenerate input is reported
//! through the summary types themselves.

mod analyzer;
mod descriptive;
mod market;
mod preview;
mod table;

pub use analyzer::{analyze_simulation, summarize, SimulationSummary};
pub use descriptive::{calculate_generic, mean, sample_stdev, Sample, SeriesStats, StatsSummary};
pub use market::{
    adjust_interval, analyze_market_data, calculate_sma, MarketReport, MarketSeries,
    MarketSummary, Trend, DEFAULT_SYMBOL, TREND_SMA_WINDOW,
};
pub use preview::{pie_scatter, slice_angles, PieSlice, DEFAULT_PIE_SAMPLES, PIE_ASPECT};
pub use table::{DataTable, TableSeries};
