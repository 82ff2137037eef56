//! Uniform time axes.

/// `n` evenly spaced samples over the closed interval `[start, end]`.
///
/// The first sample is exactly `start` and the last exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut axis: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            axis[n - 1] = end;
            axis
        }
    }
}
