//! Component models shared by the solvers.
//!
//! - RC: time constant, closed-form charge curve, forward-Euler step
//! - Sources: square-wave drive, active-low trigger pulse
//! - 555: comparator thresholds, astable timing, SET/RESET latch
//! - Bench helpers: resistor colour bands, Ohm's law

mod ohms;
mod rc;
mod resistor;
mod sources;
mod timer555;

pub use ohms::{solve_ohms_law, OhmsInputs, OhmsSolution};
pub use rc::{euler_step, RcNetwork, MICROFARAD};
pub use resistor::{band_color, parse_resistance, resistor_bands, ResistorBands, DIGIT_COLORS};
pub use sources::{SquareWave, TriggerPulse};
pub use timer555::{
    monostable_pulse_width, AstableTiming, Latch, MONOSTABLE_FACTOR, THRESHOLD_VOLTAGE,
    TRIGGER_VOLTAGE, VCC,
};
