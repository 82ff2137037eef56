//! 555 monostable (one-shot) simulation.

use tracing::debug;

use crate::circuit::MonostableParams;
use crate::components::{monostable_pulse_width, Latch, RcNetwork, TriggerPulse, MICROFARAD, VCC};
use crate::error::Result;

use super::result::MonostableResult;
use super::{SimulatorConfig, AUTO_PULSE_WIDTHS, MIN_AUTO_DURATION};

/// Trigger pulse start, as a fraction of the window.
const TRIGGER_START: f64 = 0.1;

/// Trigger pulse width, as a fraction of the window.
const TRIGGER_WIDTH: f64 = 0.02;

/// Simulate one triggered pulse of a 555 monostable.
///
/// A synthetic active-low trigger fires at 10% of the window. The latch is
/// advanced once per sample at `t = i * dt`; see [`Latch::step`] for the
/// in-sample ordering that decides the edge at the threshold crossing.
pub fn monostable_pulse(
    params: &MonostableParams,
    config: &SimulatorConfig,
) -> Result<MonostableResult> {
    params.validate()?;

    let capacitance = params.capacitance_uf * MICROFARAD;
    let tau = RcNetwork::new(params.resistance_ohm, capacitance).tau();
    let pulse_width = monostable_pulse_width(params.resistance_ohm, capacitance);

    let duration = if params.duration_s <= 0.0 {
        let auto = pulse_width * AUTO_PULSE_WIDTHS;
        if auto == 0.0 {
            MIN_AUTO_DURATION
        } else {
            auto
        }
    } else {
        params.duration_s
    };

    let samples = config.monostable_samples;
    let dt = duration / samples as f64;
    let trigger_source = TriggerPulse::new(VCC, duration * TRIGGER_START, duration * TRIGGER_WIDTH);

    let mut time = Vec::with_capacity(samples);
    let mut trigger = Vec::with_capacity(samples);
    let mut output = Vec::with_capacity(samples);
    let mut cap_voltage = Vec::with_capacity(samples);

    let mut state = Latch::default();
    for i in 0..samples {
        let t = i as f64 * dt;
        let trig = trigger_source.level(t);

        let (next, out) = state.step(trig, dt, tau);
        state = next;

        time.push(t);
        trigger.push(trig);
        output.push(out);
        cap_voltage.push(state.cap_voltage);
    }

    debug!(tau, pulse_width, duration, samples, "555 monostable pulse");

    Ok(MonostableResult {
        time,
        trigger,
        output,
        cap_voltage,
        pulse_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::THRESHOLD_VOLTAGE;
    use approx::assert_relative_eq;

    fn run(params: MonostableParams) -> MonostableResult {
        monostable_pulse(&params, &SimulatorConfig::default()).unwrap()
    }

    #[test]
    fn test_pulse_width_is_exact() {
        let (r, c_uf) = (10_000.0, 10.0);
        let result = run(MonostableParams::new(r, c_uf, 0.0));
        assert_eq!(result.pulse_width, 1.1 * r * (c_uf * 1e-6));
        assert_eq!(result.time.len(), 1000);
        assert_eq!(result.cap_voltage.len(), 1000);
    }

    #[test]
    fn test_auto_window() {
        let result = run(MonostableParams::new(10_000.0, 10.0, 0.0));
        let duration = 0.11 * 2.5;
        let dt = duration / 1000.0;
        assert_relative_eq!(result.time[999], 999.0 * dt, max_relative = 1e-9);
    }

    #[test]
    fn test_trigger_low_for_two_percent() {
        let result = run(MonostableParams::new(10_000.0, 10.0, 1.0));
        let first_low = result.trigger.iter().position(|&v| v == 0.0).unwrap();
        let lows = result.trigger.iter().filter(|&&v| v == 0.0).count();
        assert!((100..=101).contains(&first_low));
        assert!((19..=21).contains(&lows));
        assert!(result.trigger[..first_low].iter().all(|&v| v == VCC));
    }

    #[test]
    fn test_output_pulse_shape() {
        let result = run(MonostableParams::new(10_000.0, 10.0, 0.0));
        // Idle before the trigger
        assert!(result.output[..100].iter().all(|&v| v == 0.0));
        let rise = result.output.iter().position(|&v| v == VCC).unwrap();
        let fall = rise + result.output[rise..].iter().position(|&v| v == 0.0).unwrap();
        let width = result.time[fall] - result.time[rise];
        // Threshold crossing of the charge curve is ln(3)·τ ≈ 1.0986·τ
        assert_relative_eq!(width, 1.1 * 0.1, max_relative = 0.02);
        // One pulse only
        assert!(result.output[fall..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cap_resets_after_threshold() {
        let result = run(MonostableParams::new(4_700.0, 22.0, 0.0));
        let cross = result
            .cap_voltage
            .iter()
            .position(|&v| v >= THRESHOLD_VOLTAGE)
            .unwrap();
        assert_eq!(result.cap_voltage[cross + 1], 0.0);
        assert_eq!(result.output[cross + 1], 0.0);
        // Charging is monotonic while the output is high
        let rise = result.output.iter().position(|&v| v == VCC).unwrap();
        assert!(result.cap_voltage[rise..=cross].windows(2).all(|w| w[1] >= w[0]));
    }
}
