//! Waveform solvers.
//!
//! One solver per circuit family, each a pure function of its parameters
//! and a [`SimulatorConfig`]:
//!
//! - RC step: closed-form `V(t) = V_in·(1 − e^(−t/τ))` over a shared axis
//! - RC square wave: forward-Euler `v += (target − v)·dt/τ`
//! - 555 astable: analytic `t_high = ln2·(R1+R2)·C`, `t_low = ln2·R2·C`,
//!   emitted as an edge list
//! - 555 monostable: SET/RESET latch stepped over a uniform grid
//!
//! Solvers hold no state between calls; identical inputs give bit-identical
//! outputs.

mod astable;
mod monostable;
mod rc_step;
mod result;
mod simulator;
mod square_wave;
mod timebase;

pub use astable::astable_waveform;
pub use monostable::monostable_pulse;
pub use rc_step::rc_step_response;
pub use result::*;
pub use simulator::{Simulator, SimulatorConfig};
pub use square_wave::square_wave_response;
pub use timebase::linspace;

/// RC step time axis resolution.
pub const DEFAULT_RC_STEP_SAMPLES: usize = 200;

/// Square-wave response resolution.
pub const DEFAULT_SQUARE_WAVE_SAMPLES: usize = 1000;

/// Monostable simulation resolution.
pub const DEFAULT_MONOSTABLE_SAMPLES: usize = 1000;

/// Astable edge list size limit.
pub const DEFAULT_MAX_EDGE_POINTS: usize = 1_000_000;

/// Automatic RC step window, in time constants of the slowest curve.
pub const AUTO_WINDOW_TAUS: f64 = 5.0;

/// Automatic astable window, in periods.
pub const AUTO_ASTABLE_PERIODS: f64 = 5.0;

/// Automatic monostable window, in theoretical pulse widths.
pub const AUTO_PULSE_WIDTHS: f64 = 2.5;

/// Monostable window used when the automatic window collapses to zero (s).
pub const MIN_AUTO_DURATION: f64 = 0.01;
