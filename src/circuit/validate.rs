//! Parameter validation.
//!
//! Solvers call these before touching any time constant, so degenerate
//! input surfaces as [`CircuitLabError`] instead of NaN or infinite samples.

use crate::error::{CircuitLabError, Result};

use super::types::{
    AstableParams, MonostableParams, RcSquareWaveParams, RcStepParams, SimulationParameters,
};

/// Require a finite, strictly positive value.
pub fn require_positive(param: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CircuitLabError::invalid_parameter(
            param,
            format!("must be a finite value greater than 0, got {}", value),
        ))
    }
}

/// Require a finite window length. Zero and negative values select auto-scaling.
pub fn require_finite(param: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CircuitLabError::invalid_parameter(
            param,
            format!("must be finite, got {}", value),
        ))
    }
}

impl RcStepParams {
    /// Check the sweep is non-empty and every component value is positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("v_in", self.v_in)?;
        require_positive("capacitance_uf", self.capacitance_uf)?;
        require_finite("max_time_s", self.max_time_s)?;

        if self.resistances.is_empty() {
            return Err(CircuitLabError::EmptySweep);
        }
        for (i, &r) in self.resistances.iter().enumerate() {
            require_positive(&format!("resistances[{}]", i), r)?;
        }
        Ok(())
    }
}

impl RcSquareWaveParams {
    pub fn validate(&self) -> Result<()> {
        require_positive("v_in", self.v_in)?;
        require_positive("capacitance_uf", self.capacitance_uf)?;
        require_positive("resistance_ohm", self.resistance_ohm)?;
        require_positive("frequency_hz", self.frequency_hz)?;

        if self.cycles == 0 {
            return Err(CircuitLabError::invalid_parameter(
                "cycles",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl AstableParams {
    pub fn validate(&self) -> Result<()> {
        require_positive("r1", self.r1)?;
        require_positive("r2", self.r2)?;
        require_positive("capacitance_uf", self.capacitance_uf)?;
        require_finite("duration_s", self.duration_s)
    }
}

impl MonostableParams {
    pub fn validate(&self) -> Result<()> {
        require_positive("resistance_ohm", self.resistance_ohm)?;
        require_positive("capacitance_uf", self.capacitance_uf)?;
        require_finite("duration_s", self.duration_s)
    }
}

/// Validate parameters for simulation.
///
/// Checks:
/// - Resistances, capacitances, frequency and supply voltage are positive
/// - Resistor sweeps are non-empty
/// - Square waves run for at least one cycle
pub fn validate_parameters(params: &SimulationParameters) -> Result<()> {
    match params {
        SimulationParameters::RcStep(p) => p.validate(),
        SimulationParameters::RcSquareWave(p) => p.validate(),
        SimulationParameters::Astable555(p) => p.validate(),
        SimulationParameters::Monostable555(p) => p.validate(),
    }
}
