//! Per-circuit summaries of simulation results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::circuit::CircuitKind;
use crate::solver::SimulationResult;

/// Headline figures of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationSummary {
    /// First curve of a resistor sweep
    RcStep { resistance: f64, tau: f64 },
    /// Resistor sweep without curves
    NoCurves,
    RcSquare { tau: f64, v_peak: f64, v_min: f64 },
    Astable { freq: f64, duty: f64, period: f64 },
    Monostable { pulse_width: f64 },
    /// Mode name not recognized
    UnknownMode { mode: String },
    /// Mode names a different circuit than the result holds
    ModeMismatch { mode: CircuitKind, result: CircuitKind },
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RcStep { resistance, tau } => write!(
                f,
                "Type: RC Step\nRes: {} Ω\nTau: {:.4} s\n5*Tau: {:.4} s",
                resistance,
                tau,
                5.0 * tau
            ),
            Self::NoCurves => write!(f, "No Curves"),
            Self::RcSquare { tau, v_peak, v_min } => write!(
                f,
                "Type: RC Filter (AC)\nTau: {:.4} s\nV_peak: {:.2} V\nV_min: {:.2} V",
                tau, v_peak, v_min
            ),
            Self::Astable { freq, duty, period } => write!(
                f,
                "Type: 555 Astable\nFreq: {:.2} Hz\nDuty: {:.1} %\nPeriod: {:.4} s",
                freq, duty, period
            ),
            Self::Monostable { pulse_width } => write!(
                f,
                "Type: 555 Mono\nPulse: {:.4} s\nTriggered: Yes",
                pulse_width
            ),
            Self::UnknownMode { .. } => write!(f, "Unknown Mode"),
            Self::ModeMismatch { mode, result } => {
                write!(f, "Mode {} does not match a {} result", mode, result)
            }
        }
    }
}

/// Summarize `result` as the circuit family named by `mode`.
///
/// Mode names are those of [`CircuitKind::as_str`]. An unrecognized mode or
/// one that disagrees with the result is reported in the summary.
pub fn analyze_simulation(result: &SimulationResult, mode: &str) -> SimulationSummary {
    let Ok(kind) = mode.parse::<CircuitKind>() else {
        return SimulationSummary::UnknownMode {
            mode: mode.to_string(),
        };
    };
    if kind != result.kind() {
        return SimulationSummary::ModeMismatch {
            mode: kind,
            result: result.kind(),
        };
    }
    summarize(result)
}

/// Summarize `result` according to its own circuit family.
///
/// A resistor sweep reports only its first curve.
pub fn summarize(result: &SimulationResult) -> SimulationSummary {
    match result {
        SimulationResult::RcStep(r) => match r.curves.first() {
            Some(c0) => SimulationSummary::RcStep {
                resistance: c0.resistance,
                tau: c0.tau,
            },
            None => SimulationSummary::NoCurves,
        },
        SimulationResult::RcSquareWave(r) => {
            let (v_peak, v_min) = if r.output_wave.is_empty() {
                (0.0, 0.0)
            } else {
                (
                    r.output_wave.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                    r.output_wave.iter().copied().fold(f64::INFINITY, f64::min),
                )
            };
            SimulationSummary::RcSquare {
                tau: r.tau,
                v_peak,
                v_min,
            }
        }
        SimulationResult::Astable555(r) => SimulationSummary::Astable {
            freq: r.freq,
            duty: r.duty,
            period: if r.freq > 0.0 { 1.0 / r.freq } else { 0.0 },
        },
        SimulationResult::Monostable555(r) => SimulationSummary::Monostable {
            pulse_width: r.pulse_width,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{AstableParams, RcSquareWaveParams, RcStepParams, SimulationParameters};
    use crate::solver::{RcStepResult, Simulator, TimeWindowMode};
    use approx::assert_relative_eq;

    #[test]
    fn test_rc_step_reports_first_curve() {
        let result = Simulator::new()
            .run(&SimulationParameters::RcStep(RcStepParams::new(
                5.0,
                100.0,
                vec![1000.0, 4700.0],
                0.0,
            )))
            .unwrap();
        match analyze_simulation(&result, "rc_step") {
            SimulationSummary::RcStep { resistance, tau } => {
                assert_eq!(resistance, 1000.0);
                assert_relative_eq!(tau, 0.1, max_relative = 1e-12);
            }
            other => panic!("unexpected summary: {:?}", other),
        }
    }

    #[test]
    fn test_rc_step_without_curves() {
        let result = SimulationResult::RcStep(RcStepResult {
            mode: TimeWindowMode::Auto,
            t_max: 0.0,
            time: vec![],
            curves: vec![],
        });
        let summary = summarize(&result);
        assert_eq!(summary, SimulationSummary::NoCurves);
        assert_eq!(summary.to_string(), "No Curves");
    }

    #[test]
    fn test_square_wave_peak_and_trough() {
        let sim = Simulator::new();
        let result = SimulationResult::RcSquareWave(
            sim.rc_square_wave(&RcSquareWaveParams::new(5.0, 10.0, 1000.0, 10.0))
                .unwrap(),
        );
        match analyze_simulation(&result, "rc_square") {
            SimulationSummary::RcSquare { v_peak, v_min, .. } => {
                assert!(v_peak <= 5.0 && v_peak > 4.0);
                assert!(v_min >= 0.0 && v_min < 1.0);
            }
            other => panic!("unexpected summary: {:?}", other),
        }
    }

    #[test]
    fn test_astable_text() {
        let result = SimulationResult::Astable555(
            Simulator::new()
                .astable(&AstableParams::new(1000.0, 10_000.0, 10.0, 0.0))
                .unwrap(),
        );
        let text = analyze_simulation(&result, "555_astable").to_string();
        assert!(text.starts_with("Type: 555 Astable\nFreq: 6.87 Hz\nDuty: 52.4 %"));
    }

    #[test]
    fn test_unknown_and_mismatched_modes() {
        let result = SimulationResult::Astable555(
            Simulator::new()
                .astable(&AstableParams::new(1000.0, 10_000.0, 10.0, 0.0))
                .unwrap(),
        );
        let unknown = analyze_simulation(&result, "bode");
        assert_eq!(unknown.to_string(), "Unknown Mode");
        assert_eq!(
            analyze_simulation(&result, "555_mono"),
            SimulationSummary::ModeMismatch {
                mode: CircuitKind::Monostable,
                result: CircuitKind::Astable,
            }
        );
    }
}
