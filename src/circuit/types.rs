//! Core types for simulation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircuitLabError;

/// Number of square-wave periods simulated when none is given.
pub const DEFAULT_CYCLES: u32 = 3;

/// Circuit family selector.
///
/// The string forms (`rc_step`, `rc_square`, `555_astable`, `555_mono`) are
/// the mode names used by the simulation analyzer and the serialized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitKind {
    #[serde(rename = "rc_step")]
    RcStep,
    #[serde(rename = "rc_square")]
    RcSquare,
    #[serde(rename = "555_astable")]
    Astable,
    #[serde(rename = "555_mono")]
    Monostable,
}

impl CircuitKind {
    /// Mode name as used by analyzers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RcStep => "rc_step",
            Self::RcSquare => "rc_square",
            Self::Astable => "555_astable",
            Self::Monostable => "555_mono",
        }
    }
}

impl FromStr for CircuitKind {
    type Err = CircuitLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rc_step" => Ok(Self::RcStep),
            "rc_square" => Ok(Self::RcSquare),
            "555_astable" => Ok(Self::Astable),
            "555_mono" => Ok(Self::Monostable),
            _ => Err(CircuitLabError::UnknownMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DC step into an RC network, swept over one or more resistances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcStepParams {
    /// Step amplitude (V)
    pub v_in: f64,
    /// Capacitance (µF)
    pub capacitance_uf: f64,
    /// Resistances to sweep (Ω), in plot order
    pub resistances: Vec<f64>,
    /// Window length (s); 0 selects the automatic window
    #[serde(default)]
    pub max_time_s: f64,
}

impl RcStepParams {
    pub fn new(v_in: f64, capacitance_uf: f64, resistances: Vec<f64>, max_time_s: f64) -> Self {
        Self {
            v_in,
            capacitance_uf,
            resistances,
            max_time_s,
        }
    }
}

/// RC network driven by a 50% duty square wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcSquareWaveParams {
    /// High level of the square wave (V)
    pub v_in: f64,
    /// Capacitance (µF)
    pub capacitance_uf: f64,
    /// Series resistance (Ω)
    pub resistance_ohm: f64,
    /// Square wave frequency (Hz)
    pub frequency_hz: f64,
    /// Number of periods to simulate
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

fn default_cycles() -> u32 {
    DEFAULT_CYCLES
}

impl RcSquareWaveParams {
    /// Create parameters simulating [`DEFAULT_CYCLES`] periods.
    pub fn new(v_in: f64, capacitance_uf: f64, resistance_ohm: f64, frequency_hz: f64) -> Self {
        Self {
            v_in,
            capacitance_uf,
            resistance_ohm,
            frequency_hz,
            cycles: DEFAULT_CYCLES,
        }
    }

    /// Set the number of simulated periods.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }
}

/// 555 timer in free-running (astable) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstableParams {
    /// R1, between VCC and discharge (Ω)
    pub r1: f64,
    /// R2, between discharge and threshold (Ω)
    pub r2: f64,
    /// Timing capacitance (µF)
    pub capacitance_uf: f64,
    /// Window length (s); 0 shows five periods
    #[serde(default)]
    pub duration_s: f64,
}

impl AstableParams {
    pub fn new(r1: f64, r2: f64, capacitance_uf: f64, duration_s: f64) -> Self {
        Self {
            r1,
            r2,
            capacitance_uf,
            duration_s,
        }
    }
}

/// 555 timer in one-shot (monostable) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonostableParams {
    /// Timing resistance (Ω)
    pub resistance_ohm: f64,
    /// Timing capacitance (µF)
    pub capacitance_uf: f64,
    /// Window length (s); 0 shows 2.5 pulse widths
    #[serde(default)]
    pub duration_s: f64,
}

impl MonostableParams {
    pub fn new(resistance_ohm: f64, capacitance_uf: f64, duration_s: f64) -> Self {
        Self {
            resistance_ohm,
            capacitance_uf,
            duration_s,
        }
    }
}

/// Parameters for exactly one solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SimulationParameters {
    #[serde(rename = "rc_step")]
    RcStep(RcStepParams),
    #[serde(rename = "rc_square")]
    RcSquareWave(RcSquareWaveParams),
    #[serde(rename = "555_astable")]
    Astable555(AstableParams),
    #[serde(rename = "555_mono")]
    Monostable555(MonostableParams),
}

impl SimulationParameters {
    /// The circuit family these parameters describe.
    pub fn kind(&self) -> CircuitKind {
        match self {
            Self::RcStep(_) => CircuitKind::RcStep,
            Self::RcSquareWave(_) => CircuitKind::RcSquare,
            Self::Astable555(_) => CircuitKind::Astable,
            Self::Monostable555(_) => CircuitKind::Monostable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            CircuitKind::RcStep,
            CircuitKind::RcSquare,
            CircuitKind::Astable,
            CircuitKind::Monostable,
        ] {
            assert_eq!(kind.as_str().parse::<CircuitKind>().unwrap(), kind);
        }
        assert!(matches!(
            "rc_sweep".parse::<CircuitKind>(),
            Err(CircuitLabError::UnknownMode { ref mode }) if mode == "rc_sweep"
        ));
    }

    #[test]
    fn test_square_wave_defaults_to_three_cycles() {
        let json = r#"{"kind":"rc_square","v_in":5.0,"capacitance_uf":10.0,"resistance_ohm":1000.0,"frequency_hz":50.0}"#;
        let params: SimulationParameters = serde_json::from_str(json).unwrap();
        match params {
            SimulationParameters::RcSquareWave(p) => assert_eq!(p.cycles, DEFAULT_CYCLES),
            other => panic!("unexpected params: {:?}", other),
        }
    }

    #[test]
    fn test_auto_duration_defaults_to_zero() {
        let json = r#"{"kind":"555_mono","resistance_ohm":10000.0,"capacitance_uf":10.0}"#;
        let params: SimulationParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.kind(), CircuitKind::Monostable);
        assert_eq!(
            params,
            SimulationParameters::Monostable555(MonostableParams::new(10_000.0, 10.0, 0.0))
        );
    }
}
