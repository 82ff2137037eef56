//! Descriptive statistics over arbitrary numeric series.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that may contribute a number to a series.
///
/// Entries yielding `None` (missing values, unparsable text, NaN) are
/// dropped before any statistic is computed.
pub trait Sample {
    fn to_sample(&self) -> Option<f64>;
}

fn numeric(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

impl Sample for f64 {
    fn to_sample(&self) -> Option<f64> {
        numeric(*self)
    }
}

impl Sample for f32 {
    fn to_sample(&self) -> Option<f64> {
        numeric(*self as f64)
    }
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn to_sample(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_sample_int!(i32, i64, u32, u64, usize);

impl Sample for str {
    fn to_sample(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().and_then(numeric)
    }
}

impl Sample for String {
    fn to_sample(&self) -> Option<f64> {
        self.as_str().to_sample()
    }
}

impl<T: Sample> Sample for Option<T> {
    fn to_sample(&self) -> Option<f64> {
        self.as_ref().and_then(Sample::to_sample)
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    fn to_sample(&self) -> Option<f64> {
        (**self).to_sample()
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation (n − 1 denominator); 0.0 below two points.
pub fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = values.iter().sum::<f64>() / n as f64;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Count, extremes, mean and spread of a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
}

impl StatsSummary {
    /// Summarize `values`, `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            min,
            max,
            mean,
            stdev: sample_stdev(values),
        })
    }
}

/// Outcome of [`calculate_generic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeriesStats {
    /// No series was supplied
    NoData,
    /// The series held no numeric entries
    Empty,
    Summary { name: String, summary: StatsSummary },
}

impl SeriesStats {
    pub fn summary(&self) -> Option<&StatsSummary> {
        match self {
            Self::Summary { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No Data"),
            Self::Empty => write!(f, "Empty Data"),
            Self::Summary { name, summary } => write!(
                f,
                "Target: {}\nCount: {}\nMin: {:.4}\nMax: {:.4}\nMean: {:.4}\nStdDev: {:.4}",
                name, summary.count, summary.min, summary.max, summary.mean, summary.stdev
            ),
        }
    }
}

/// Summarize any series, dropping entries that are not numbers.
///
/// `None` yields [`SeriesStats::NoData`]; a series with no usable entries
/// yields [`SeriesStats::Empty`]. Never fails.
pub fn calculate_generic<I>(data: Option<I>, name: &str) -> SeriesStats
where
    I: IntoIterator,
    I::Item: Sample,
{
    let Some(data) = data else {
        return SeriesStats::NoData;
    };

    let clean: Vec<f64> = data.into_iter().filter_map(|x| x.to_sample()).collect();

    match StatsSummary::from_values(&clean) {
        Some(summary) => SeriesStats::Summary {
            name: name.to_string(),
            summary,
        },
        None => SeriesStats::Empty,
    }
}
