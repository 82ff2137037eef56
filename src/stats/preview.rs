//! Scatter-point pie preview for text-mode plots.
//!
//! Terminal plotters cannot fill wedges, so a pie is approximated by
//! random points in a disc, coloured by the slice whose angle they fall in.
//! The random source is supplied by the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Horizontal stretch compensating for tall terminal cells.
pub const PIE_ASPECT: f64 = 1.8;

/// Points scattered for one preview.
pub const DEFAULT_PIE_SAMPLES: usize = 2000;

/// One pie slice and the preview points that landed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Start angle (degrees), inclusive
    pub start_deg: f64,
    /// End angle (degrees), exclusive
    pub end_deg: f64,
    pub points: Vec<(f64, f64)>,
}

/// Angular range of each slice, proportional to `|value|`.
///
/// Empty when the values sum to zero.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let magnitudes: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut current = 0.0;
    magnitudes
        .iter()
        .map(|v| {
            let start = current;
            current += v / total * 360.0;
            (start, current)
        })
        .collect()
}

/// Scatter `samples` points over the unit disc and bin them by slice.
///
/// Radius is `sqrt(u)` for uniform area density. Points whose angle misses
/// every range (rounding at 360°) go to the first slice.
pub fn pie_scatter<R: Rng + ?Sized>(values: &[f64], samples: usize, rng: &mut R) -> Vec<PieSlice> {
    let angles = slice_angles(values);
    if angles.is_empty() {
        return Vec::new();
    }

    let mut slices: Vec<PieSlice> = angles
        .iter()
        .map(|&(start_deg, end_deg)| PieSlice {
            start_deg,
            end_deg,
            points: Vec::new(),
        })
        .collect();

    for _ in 0..samples {
        let r = rng.gen::<f64>().sqrt();
        let theta = rng.gen::<f64>() * 360.0;

        let idx = angles
            .iter()
            .position(|&(start, end)| start <= theta && theta < end)
            .unwrap_or(0);

        let rad = theta.to_radians();
        slices[idx]
            .points
            .push((r * rad.cos() * PIE_ASPECT, r * rad.sin()));
    }

    slices
}
