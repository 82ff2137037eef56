//! Main simulator interface.

use tracing::debug;

use crate::circuit::{
    AstableParams, MonostableParams, RcSquareWaveParams, RcStepParams, SimulationParameters,
};
use crate::error::Result;

use super::astable::astable_waveform;
use super::monostable::monostable_pulse;
use super::rc_step::rc_step_response;
use super::result::{
    AstableResult, MonostableResult, RcStepResult, SimulationResult, SquareWaveResult,
};
use super::square_wave::square_wave_response;
use super::{
    DEFAULT_MAX_EDGE_POINTS, DEFAULT_MONOSTABLE_SAMPLES, DEFAULT_RC_STEP_SAMPLES,
    DEFAULT_SQUARE_WAVE_SAMPLES,
};

/// Configuration for the simulator.
///
/// The defaults are the reference resolutions; changing them changes every
/// sample of the affected waveforms.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Samples on the RC step time axis.
    pub rc_step_samples: usize,
    /// Samples (and Euler steps) for the square-wave response.
    pub square_wave_samples: usize,
    /// Samples (and latch steps) for the monostable simulation.
    pub monostable_samples: usize,
    /// Largest astable edge list the solver will build.
    pub max_edge_points: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            rc_step_samples: DEFAULT_RC_STEP_SAMPLES,
            square_wave_samples: DEFAULT_SQUARE_WAVE_SAMPLES,
            monostable_samples: DEFAULT_MONOSTABLE_SAMPLES,
            max_edge_points: DEFAULT_MAX_EDGE_POINTS,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RC step sample count (at least 2).
    pub fn with_rc_step_samples(mut self, samples: usize) -> Self {
        self.rc_step_samples = samples.max(2);
        self
    }

    /// Set the square-wave sample count (at least 2).
    pub fn with_square_wave_samples(mut self, samples: usize) -> Self {
        self.square_wave_samples = samples.max(2);
        self
    }

    /// Set the monostable sample count (at least 1).
    pub fn with_monostable_samples(mut self, samples: usize) -> Self {
        self.monostable_samples = samples.max(1);
        self
    }

    /// Set the astable edge list limit.
    pub fn with_max_edge_points(mut self, max_edge_points: usize) -> Self {
        self.max_edge_points = max_edge_points;
        self
    }
}

/// The circuit simulator.
///
/// Holds only configuration; every run is independent, so one instance can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new simulator with custom configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run the solver matching the parameter family.
    pub fn run(&self, params: &SimulationParameters) -> Result<SimulationResult> {
        debug!(kind = %params.kind(), "running simulation");
        Ok(match params {
            SimulationParameters::RcStep(p) => SimulationResult::RcStep(self.rc_step(p)?),
            SimulationParameters::RcSquareWave(p) => {
                SimulationResult::RcSquareWave(self.rc_square_wave(p)?)
            }
            SimulationParameters::Astable555(p) => SimulationResult::Astable555(self.astable(p)?),
            SimulationParameters::Monostable555(p) => {
                SimulationResult::Monostable555(self.monostable(p)?)
            }
        })
    }

    pub fn rc_step(&self, params: &RcStepParams) -> Result<RcStepResult> {
        rc_step_response(params, &self.config)
    }

    pub fn rc_square_wave(&self, params: &RcSquareWaveParams) -> Result<SquareWaveResult> {
        square_wave_response(params, &self.config)
    }

    pub fn astable(&self, params: &AstableParams) -> Result<AstableResult> {
        astable_waveform(params, &self.config)
    }

    pub fn monostable(&self, params: &MonostableParams) -> Result<MonostableResult> {
        monostable_pulse(params, &self.config)
    }
}
