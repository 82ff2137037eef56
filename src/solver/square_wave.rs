//! RC network driven by a square wave, stepped with forward Euler.

use tracing::{debug, warn};

use crate::circuit::RcSquareWaveParams;
use crate::components::{euler_step, RcNetwork, SquareWave};
use crate::error::{CircuitLabError, Result};

use super::result::SquareWaveResult;
use super::timebase::linspace;
use super::SimulatorConfig;

/// Charge/discharge response of an RC network to a 50% duty square wave.
///
/// The output is integrated sample by sample with a fixed step
/// `dt = window / (samples - 1)`, so the first output sample is already one
/// step away from 0 V. The scheme is only accurate while `dt` is well below
/// τ; larger steps are logged but not refined.
pub fn square_wave_response(
    params: &RcSquareWaveParams,
    config: &SimulatorConfig,
) -> Result<SquareWaveResult> {
    params.validate()?;

    let tau = RcNetwork::from_microfarads(params.resistance_ohm, params.capacitance_uf).tau();
    let source = SquareWave::new(params.v_in, params.frequency_hz);
    let window = params.cycles as f64 * source.period;

    let samples = config.square_wave_samples;
    if samples < 2 {
        return Err(CircuitLabError::invalid_parameter(
            "square_wave_samples",
            format!("need at least 2 samples, got {}", samples),
        ));
    }
    let time = linspace(0.0, window, samples);
    let dt = window / (samples - 1) as f64;

    if dt > tau {
        warn!(dt, tau, "euler step exceeds the time constant; output will overshoot");
    }

    let mut input_wave = Vec::with_capacity(samples);
    let mut output_wave = Vec::with_capacity(samples);
    let mut current_v = 0.0;

    for &t in &time {
        let target = source.level(t);
        input_wave.push(target);

        current_v = euler_step(current_v, target, dt, tau);
        output_wave.push(current_v);
    }

    debug!(tau, window, samples, cycles = params.cycles, "square wave response");

    Ok(SquareWaveResult {
        time,
        input_wave,
        output_wave,
        tau,
    })
}
