//! WASM bindings for CircuitLab Core.
//!
//! Parameters and results cross the boundary as JSON strings using the same
//! `kind`-tagged layout as the native serde types.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitLab } from 'circuitlab_core';
//!
//! await init();
//!
//! const lab = new WasmCircuitLab();
//! const result = JSON.parse(lab.simulate(JSON.stringify({
//!   kind: '555_astable', r1: 1000, r2: 10000, capacitance_uf: 10, duration_s: 0,
//! })));
//! console.log(lab.analyze(JSON.stringify(result), '555_astable'));
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{parse_value_list, SimulationParameters};
use crate::components::{parse_resistance, resistor_bands, solve_ohms_law, OhmsInputs};
use crate::error::CircuitLabError;
use crate::solver::{SimulationResult, Simulator, SimulatorConfig};
use crate::stats::{analyze_market_data, analyze_simulation, calculate_generic, MarketSeries};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: impl Into<CircuitLabError>) -> JsValue {
    JsValue::from_str(&err.into().to_string())
}

/// Browser-facing simulator.
#[wasm_bindgen]
pub struct WasmCircuitLab {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuitLab {
    /// Create a simulator with default sample counts.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuitLab {
        WasmCircuitLab {
            simulator: Simulator::new(),
        }
    }

    /// Create a simulator with custom sample counts.
    ///
    /// # Arguments
    /// * `rc_step_samples` - Points per RC step curve (default: 200)
    /// * `square_wave_samples` - Points for the square wave window (default: 1000)
    /// * `monostable_samples` - Steps for the one-shot simulation (default: 1000)
    #[wasm_bindgen]
    pub fn with_config(
        rc_step_samples: usize,
        square_wave_samples: usize,
        monostable_samples: usize,
    ) -> WasmCircuitLab {
        let config = SimulatorConfig::new()
            .with_rc_step_samples(rc_step_samples)
            .with_square_wave_samples(square_wave_samples)
            .with_monostable_samples(monostable_samples);
        WasmCircuitLab {
            simulator: Simulator::with_config(config),
        }
    }

    /// Run one simulation.
    ///
    /// Takes `SimulationParameters` JSON, returns `SimulationResult` JSON.
    #[wasm_bindgen]
    pub fn simulate(&self, params_json: &str) -> Result<String, JsValue> {
        let params: SimulationParameters = serde_json::from_str(params_json).map_err(to_js)?;
        let result = self.simulator.run(&params).map_err(to_js)?;
        serde_json::to_string(&result).map_err(to_js)
    }

    /// Summarize a `SimulationResult` JSON for the given mode tag.
    #[wasm_bindgen]
    pub fn analyze(&self, result_json: &str, mode: &str) -> Result<String, JsValue> {
        let result: SimulationResult = serde_json::from_str(result_json).map_err(to_js)?;
        Ok(analyze_simulation(&result, mode).to_string())
    }
}

impl Default for WasmCircuitLab {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary panel for a comma-separated series such as `"1, 2.5, 3k"`.
#[wasm_bindgen]
pub fn series_stats(values: &str, name: &str) -> Result<String, JsValue> {
    let values = parse_value_list(values).map_err(to_js)?;
    Ok(calculate_generic(Some(&values), name).to_string())
}

/// Summary panel for a `MarketSeries` JSON object.
#[wasm_bindgen]
pub fn market_summary(series_json: &str) -> Result<String, JsValue> {
    let series: MarketSeries = serde_json::from_str(series_json).map_err(to_js)?;
    Ok(analyze_market_data(Some(&series)).to_string())
}

/// Colour bands for a resistance such as `"4.7k"`, as JSON.
///
/// Returns `null` for non-positive values.
#[wasm_bindgen]
pub fn resistor_code(value: &str, five_band: bool) -> Result<String, JsValue> {
    let ohms = parse_resistance(value).map_err(to_js)?;
    serde_json::to_string(&resistor_bands(ohms, five_band)).map_err(to_js)
}

/// Solve an `OhmsInputs` JSON object (any two of `voltage`, `current`,
/// `resistance`, `power`), returning `OhmsSolution` JSON.
#[wasm_bindgen]
pub fn ohms_law(inputs_json: &str) -> Result<String, JsValue> {
    let inputs: OhmsInputs = serde_json::from_str(inputs_json).map_err(to_js)?;
    let solution = solve_ohms_law(&inputs).map_err(to_js)?;
    serde_json::to_string(&solution).map_err(to_js)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
