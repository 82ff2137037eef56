//! 555 astable oscillator waveform.

use tracing::debug;

use crate::circuit::AstableParams;
use crate::components::{AstableTiming, MICROFARAD, VCC};
use crate::error::{CircuitLabError, Result};

use super::result::AstableResult;
use super::{SimulatorConfig, AUTO_ASTABLE_PERIODS};

/// Points emitted per full oscillation (one rising and one falling edge).
const POINTS_PER_CYCLE: usize = 4;

/// Analytic 555 astable timing plus its output as an edge list.
///
/// Each edge contributes two points at the same instant, one on either
/// rail, so the list has even length and is meant to be drawn as segments
/// between consecutive points rather than resampled on a uniform grid.
pub fn astable_waveform(params: &AstableParams, config: &SimulatorConfig) -> Result<AstableResult> {
    params.validate()?;

    let timing = AstableTiming::new(params.r1, params.r2, params.capacitance_uf * MICROFARAD);
    let period = timing.period();
    let freq = timing.frequency();
    let duty = timing.duty_percent();

    let duration = if params.duration_s <= 0.0 {
        AUTO_ASTABLE_PERIODS * period
    } else {
        params.duration_s
    };

    let cycles = (duration / period).ceil();
    if cycles * POINTS_PER_CYCLE as f64 > config.max_edge_points as f64 {
        return Err(CircuitLabError::WaveformTooLong {
            points: (cycles as usize).saturating_mul(POINTS_PER_CYCLE),
            limit: config.max_edge_points,
        });
    }

    let capacity = cycles as usize * POINTS_PER_CYCLE;
    let mut time = Vec::with_capacity(capacity);
    let mut voltage = Vec::with_capacity(capacity);

    let mut t = 0.0;
    while t < duration {
        // Rising edge
        time.extend([t, t]);
        voltage.extend([0.0, VCC]);

        t += timing.t_high;
        if t > duration {
            break;
        }

        // Falling edge
        time.extend([t, t]);
        voltage.extend([VCC, 0.0]);

        t += timing.t_low;
    }

    debug!(freq, duty, period, duration, points = time.len(), "555 astable waveform");

    Ok(AstableResult {
        time,
        voltage,
        freq,
        duty,
        period,
        t_high: timing.t_high,
        t_low: timing.t_low,
    })
}
