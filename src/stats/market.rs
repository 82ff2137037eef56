//! Price series indicators.
//!
//! Works on an already-fetched OHLC series; fetching is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::descriptive::{mean, sample_stdev};

/// Window of the moving average used for trend classification.
pub const TREND_SMA_WINDOW: usize = 5;

/// Ticker shown when the series carries none.
pub const DEFAULT_SYMBOL: &str = "STOCK";

/// Aligned OHLC price history for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub open: Vec<f64>,
    #[serde(default)]
    pub high: Vec<f64>,
    #[serde(default)]
    pub low: Vec<f64>,
    #[serde(default)]
    pub close: Vec<f64>,
    #[serde(default)]
    pub volume: Vec<f64>,
}

/// Trend of the latest close against its moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bull,
    Bear,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bull => write!(f, "BULL"),
            Self::Bear => write!(f, "BEAR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    pub symbol: String,
    /// Latest close
    pub price: f64,
    /// Change from first to latest close (%)
    pub pct_change: f64,
    /// Sample standard deviation of closes
    pub volatility: f64,
    /// Mean high − low range
    pub avg_spread: f64,
    /// Last value of the trend moving average
    pub sma: f64,
    pub trend: Trend,
}

/// Outcome of [`analyze_market_data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketSummary {
    NoData,
    Empty,
    Invalid { reason: String },
    Report(MarketReport),
}

impl fmt::Display for MarketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No Market Data"),
            Self::Empty => write!(f, "Empty Data"),
            Self::Invalid { reason } => write!(f, "Fin Stats Error: {}", reason),
            Self::Report(r) => write!(
                f,
                "Ticker: {}\nPrice: ${:.2}\nChange: {:+.2}%\nVolat.: {:.2}\nSpread: ${:.2}\nTrend:  {} (SMA{})",
                r.symbol, r.price, r.pct_change, r.volatility, r.avg_spread, r.trend, TREND_SMA_WINDOW
            ),
        }
    }
}

/// Simple moving average over the `window` values preceding each index.
///
/// Index `i` averages `data[i - window..i]`. Indices before the window has
/// filled echo the raw value, and input shorter than `window` is returned
/// as-is.
pub fn calculate_sma(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || data.len() < window {
        return data.to_vec();
    }
    (0..data.len())
        .map(|i| {
            if i >= window {
                data[i - window..i].iter().sum::<f64>() / window as f64
            } else {
                data[i]
            }
        })
        .collect()
}

/// Price change, volatility, spread and trend of a fetched series.
pub fn analyze_market_data(data: Option<&MarketSeries>) -> MarketSummary {
    let Some(data) = data else {
        return MarketSummary::NoData;
    };

    let closes = &data.close;
    let (Some(&start_price), Some(&current_price)) = (closes.first(), closes.last()) else {
        return MarketSummary::Empty;
    };

    if start_price == 0.0 {
        return MarketSummary::Invalid {
            reason: "first close is zero".to_string(),
        };
    }
    let pct_change = (current_price - start_price) / start_price * 100.0;

    let spreads: Vec<f64> = data
        .high
        .iter()
        .zip(&data.low)
        .map(|(h, l)| h - l)
        .collect();
    let Some(avg_spread) = mean(&spreads) else {
        return MarketSummary::Invalid {
            reason: "no high/low data".to_string(),
        };
    };

    let sma = calculate_sma(closes, TREND_SMA_WINDOW);
    let latest_sma = sma.last().copied().unwrap_or(current_price);
    let trend = if current_price > latest_sma {
        Trend::Bull
    } else {
        Trend::Bear
    };

    MarketSummary::Report(MarketReport {
        symbol: data
            .symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        price: current_price,
        pct_change,
        volatility: sample_stdev(closes),
        avg_spread,
        sma: latest_sma,
        trend,
    })
}

/// Candle interval the price source accepts for a requested history period.
///
/// Full history only comes in monthly candles, and a one-year history does
/// not serve intraday candles.
pub fn adjust_interval<'a>(period: &str, interval: &'a str) -> &'a str {
    match (period, interval) {
        ("max", _) => "1mo",
        ("1y", "1m" | "15m" | "1h") => "1d",
        _ => interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(close: Vec<f64>) -> MarketSeries {
        let high = close.iter().map(|c| c + 1.0).collect();
        let low = close.iter().map(|c| c - 1.0).collect();
        MarketSeries {
            symbol: Some("ACME".to_string()),
            close,
            high,
            low,
            ..Default::default()
        }
    }

    #[test]
    fn test_sma_echoes_until_window_fills() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let sma = calculate_sma(&data, 5);
        assert_eq!(&sma[..5], &data[..5]);
        assert_relative_eq!(sma[5], 3.0);
        assert_relative_eq!(sma[6], 4.0);
    }

    #[test]
    fn test_sma_short_input_unchanged() {
        assert_eq!(calculate_sma(&[1.0, 2.0], 5), vec![1.0, 2.0]);
        assert_eq!(calculate_sma(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn test_rising_series_is_bull() {
        let data = series(vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
        let MarketSummary::Report(report) = analyze_market_data(Some(&data)) else {
            panic!("expected a report");
        };
        assert_eq!(report.trend, Trend::Bull);
        assert_relative_eq!(report.pct_change, 60.0, max_relative = 1e-12);
        assert_relative_eq!(report.avg_spread, 2.0);
        assert_relative_eq!(report.sma, 13.0);
        assert_eq!(report.symbol, "ACME");
    }

    #[test]
    fn test_short_series_is_bear() {
        // Fewer closes than the window: the average is the last close itself
        let data = series(vec![10.0, 12.0]);
        let MarketSummary::Report(report) = analyze_market_data(Some(&data)) else {
            panic!("expected a report");
        };
        assert_eq!(report.trend, Trend::Bear);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(analyze_market_data(None), MarketSummary::NoData);
        assert_eq!(
            analyze_market_data(Some(&MarketSeries::default())),
            MarketSummary::Empty
        );
        let zero = series(vec![0.0, 1.0]);
        assert!(matches!(
            analyze_market_data(Some(&zero)),
            MarketSummary::Invalid { .. }
        ));
        let no_range = MarketSeries {
            close: vec![1.0, 2.0],
            ..Default::default()
        };
        assert!(matches!(
            analyze_market_data(Some(&no_range)),
            MarketSummary::Invalid { .. }
        ));
    }

    #[test]
    fn test_report_text() {
        let data = series(vec![100.0, 90.0]);
        let text = analyze_market_data(Some(&data)).to_string();
        assert_eq!(
            text,
            "Ticker: ACME\nPrice: $90.00\nChange: -10.00%\nVolat.: 7.07\nSpread: $2.00\nTrend:  BEAR (SMA5)"
        );
    }

    #[test]
    fn test_adjust_interval() {
        assert_eq!(adjust_interval("max", "1d"), "1mo");
        assert_eq!(adjust_interval("1y", "15m"), "1d");
        assert_eq!(adjust_interval("1y", "1wk"), "1wk");
        assert_eq!(adjust_interval("1mo", "1h"), "1h");
    }
}
