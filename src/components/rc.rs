//! First-order RC network model.

/// Microfarad to farad conversion.
pub const MICROFARAD: f64 = 1e-6;

/// A series resistor charging a capacitor to ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcNetwork {
    /// Resistance in ohms
    pub resistance: f64,
    /// Capacitance in farads
    pub capacitance: f64,
}

impl RcNetwork {
    /// Create a network from a resistance in ohms and a capacitance in farads.
    pub fn new(resistance: f64, capacitance: f64) -> Self {
        Self {
            resistance,
            capacitance,
        }
    }

    /// Create a network from a capacitance given in microfarads.
    pub fn from_microfarads(resistance: f64, capacitance_uf: f64) -> Self {
        Self::new(resistance, capacitance_uf * MICROFARAD)
    }

    /// Time constant τ = R·C in seconds.
    pub fn tau(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// Closed-form capacitor voltage `t` seconds after a step of `v_in`
    /// into an initially discharged network.
    ///
    /// V(t) = V_in · (1 − e^(−t/τ))
    pub fn step_voltage(&self, v_in: f64, t: f64) -> f64 {
        v_in * (1.0 - (-t / self.tau()).exp())
    }
}

/// Advance a first-order lag toward `target` by one forward-Euler step.
///
/// No stability check: with `dt > τ` the result overshoots the target.
#[inline]
pub fn euler_step(current: f64, target: f64, dt: f64, tau: f64) -> f64 {
    current + (target - current) * (dt / tau)
}
