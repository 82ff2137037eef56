//! Simulation parameters and validation.
//!
//! Each circuit family has its own parameter struct; [`SimulationParameters`]
//! tags exactly one of them for a solver run. Values are in engineering
//! units: volts, ohms, microfarads, hertz and seconds.

mod types;
mod units;
mod validate;

pub use types::*;
pub use units::{parse_required, parse_value, parse_value_list};
pub use validate::{require_finite, require_positive, validate_parameters};
