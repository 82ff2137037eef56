//! Numeric series from user-edited tables.

use serde::{Deserialize, Serialize};

use super::descriptive::{calculate_generic, SeriesStats};

/// A grid of text cells. The first column holds row labels; every further
/// column is one data series named by its header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Labels and numeric columns extracted from a [`DataTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSeries {
    pub labels: Vec<String>,
    pub names: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Extract the series, `None` without a data column or without rows.
    ///
    /// Missing or unparsable cells read as 0.0 so every series stays
    /// aligned with the labels.
    pub fn to_series(&self) -> Option<TableSeries> {
        if self.columns.len() < 2 || self.rows.is_empty() {
            return None;
        }

        let labels = self
            .rows
            .iter()
            .map(|row| row.first().cloned().unwrap_or_default())
            .collect();

        let series = (1..self.columns.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| {
                        row.get(col)
                            .and_then(|cell| cell.trim().parse::<f64>().ok())
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        Some(TableSeries {
            labels,
            names: self.columns[1..].to_vec(),
            series,
        })
    }
}

impl TableSeries {
    /// Clamp a requested series index, falling back to the first series.
    pub fn active_index(&self, requested: usize) -> usize {
        if requested >= self.series.len() {
            0
        } else {
            requested
        }
    }

    /// Name and values of the active series.
    pub fn active(&self, requested: usize) -> Option<(&str, &[f64])> {
        let idx = self.active_index(requested);
        let name = self.names.get(idx)?;
        let values = self.series.get(idx)?;
        Some((name.as_str(), values.as_slice()))
    }

    /// Descriptive statistics of the active series.
    pub fn active_stats(&self, requested: usize) -> SeriesStats {
        match self.active(requested) {
            Some((name, values)) => calculate_generic(Some(values), name),
            None => SeriesStats::NoData,
        }
    }
}
