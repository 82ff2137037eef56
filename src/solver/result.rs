//! Solver output types.
//!
//! All series inside one result are index-aligned with its `time` axis,
//! except the astable edge list, which pairs `time[i]` with `voltage[i]`
//! but is not uniformly spaced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::circuit::CircuitKind;

/// How the RC step window length was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindowMode {
    /// Caller-supplied window
    Fixed,
    /// Five time constants of the slowest curve
    Auto,
}

impl fmt::Display for TimeWindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Auto => write!(f, "Auto"),
        }
    }
}

/// One charging curve of a resistor sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Resistance (Ω)
    pub resistance: f64,
    /// Time constant (s)
    pub tau: f64,
    /// Capacitor voltage at each sample of the shared time axis (V)
    pub voltage: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcStepResult {
    pub mode: TimeWindowMode,
    /// Window length (s)
    pub t_max: f64,
    pub time: Vec<f64>,
    /// One curve per input resistance, in input order
    pub curves: Vec<Curve>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareWaveResult {
    pub time: Vec<f64>,
    pub input_wave: Vec<f64>,
    pub output_wave: Vec<f64>,
    /// Time constant (s)
    pub tau: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstableResult {
    /// Edge list times; each edge appears twice (before and after the transition)
    pub time: Vec<f64>,
    pub voltage: Vec<f64>,
    /// Frequency (Hz)
    pub freq: f64,
    /// Duty cycle (%)
    pub duty: f64,
    pub period: f64,
    pub t_high: f64,
    pub t_low: f64,
}

impl AstableResult {
    /// Consecutive `(time, voltage)` point pairs for segment rendering.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.time
            .windows(2)
            .zip(self.voltage.windows(2))
            .map(|(t, v)| ((t[0], v[0]), (t[1], v[1])))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonostableResult {
    pub time: Vec<f64>,
    pub trigger: Vec<f64>,
    pub output: Vec<f64>,
    pub cap_voltage: Vec<f64>,
    /// Theoretical pulse width 1.1·R·C (s)
    pub pulse_width: f64,
}

/// Output of one solver run, tagged by circuit family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SimulationResult {
    #[serde(rename = "rc_step")]
    RcStep(RcStepResult),
    #[serde(rename = "rc_square")]
    RcSquareWave(SquareWaveResult),
    #[serde(rename = "555_astable")]
    Astable555(AstableResult),
    #[serde(rename = "555_mono")]
    Monostable555(MonostableResult),
}

impl SimulationResult {
    pub fn kind(&self) -> CircuitKind {
        match self {
            Self::RcStep(_) => CircuitKind::RcStep,
            Self::RcSquareWave(_) => CircuitKind::RcSquare,
            Self::Astable555(_) => CircuitKind::Astable,
            Self::Monostable555(_) => CircuitKind::Monostable,
        }
    }

    /// Named columns for export, `time` first.
    pub fn columns(&self) -> Vec<(String, &[f64])> {
        match self {
            Self::RcStep(r) => {
                let mut cols = vec![("time".to_string(), r.time.as_slice())];
                for curve in &r.curves {
                    cols.push((format!("V(R={})", curve.resistance), curve.voltage.as_slice()));
                }
                cols
            }
            Self::RcSquareWave(r) => vec![
                ("time".to_string(), r.time.as_slice()),
                ("input".to_string(), r.input_wave.as_slice()),
                ("output".to_string(), r.output_wave.as_slice()),
            ],
            Self::Astable555(r) => vec![
                ("time".to_string(), r.time.as_slice()),
                ("voltage".to_string(), r.voltage.as_slice()),
            ],
            Self::Monostable555(r) => vec![
                ("time".to_string(), r.time.as_slice()),
                ("trigger".to_string(), r.trigger.as_slice()),
                ("output".to_string(), r.output.as_slice()),
                ("cap_voltage".to_string(), r.cap_voltage.as_slice()),
            ],
        }
    }
}
