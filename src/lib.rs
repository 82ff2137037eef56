//! # CircuitLab Core
//!
//! Deterministic waveform simulation for small RC and 555-timer circuits,
//! plus descriptive statistics for simulated or user-supplied series.
//!
//! This library provides:
//! - RC step response with a parametric resistor sweep
//! - RC response to a periodic square wave
//! - 555 astable oscillator timing and edge-list waveform
//! - 555 monostable one-shot simulation
//! - Descriptive statistics, per-circuit summaries and price indicators
//! - Resistor colour codes and an Ohm's law solver
//!
//! ## Architecture
//!
//! - [`circuit`] - Parameter types, SI value parsing and validation
//! - [`components`] - RC network, stimulus sources, the 555 latch and bench helpers
//! - [`solver`] - One solver per circuit family and the [`Simulator`] dispatcher
//! - [`stats`] - Statistics, analyzers and preview helpers
//! - [`output`] - CSV and JSON export over any writer
//!
//! ## Usage
//!
//! ```
//! use circuitlab_core::{analyze_simulation, RcStepParams, SimulationParameters, Simulator};
//!
//! let params = SimulationParameters::RcStep(RcStepParams::new(5.0, 100.0, vec![1000.0, 4700.0], 0.0));
//! let result = Simulator::new().run(&params).unwrap();
//! println!("{}", analyze_simulation(&result, "rc_step"));
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! circuitlab astable --r1 1k --r2 10k --cap-uf 10 --format csv > astable.csv
//! ```
//!
//! Every solver is a pure function of its inputs: no I/O, no shared state,
//! and identical inputs produce bit-identical waveforms.

pub mod circuit;
pub mod components;
pub mod error;
pub mod output;
pub mod solver;
pub mod stats;

// Re-export main types for convenience
pub use circuit::{
    AstableParams, CircuitKind, MonostableParams, RcSquareWaveParams, RcStepParams,
    SimulationParameters,
};
pub use components::{resistor_bands, solve_ohms_law};
pub use error::{CircuitLabError, Result};
pub use solver::{SimulationResult, Simulator, SimulatorConfig};
pub use stats::{analyze_market_data, analyze_simulation, calculate_generic};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitLab;
