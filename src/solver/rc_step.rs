//! RC step response with a parametric resistor sweep.

use tracing::debug;

use crate::circuit::RcStepParams;
use crate::components::{RcNetwork, MICROFARAD};
use crate::error::Result;

use super::result::{Curve, RcStepResult, TimeWindowMode};
use super::timebase::linspace;
use super::{SimulatorConfig, AUTO_WINDOW_TAUS};

/// Charge curves of a DC step into an RC network, one per resistance.
///
/// All curves share one time axis. Without a fixed window, the axis spans
/// five time constants of the largest resistance so every curve settles.
pub fn rc_step_response(params: &RcStepParams, config: &SimulatorConfig) -> Result<RcStepResult> {
    params.validate()?;

    let capacitance = params.capacitance_uf * MICROFARAD;

    let (mode, t_max) = if params.max_time_s > 0.0 {
        (TimeWindowMode::Fixed, params.max_time_s)
    } else {
        let max_r = params
            .resistances
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (TimeWindowMode::Auto, AUTO_WINDOW_TAUS * (max_r * capacitance))
    };

    let time = linspace(0.0, t_max, config.rc_step_samples);

    let curves: Vec<Curve> = params
        .resistances
        .iter()
        .map(|&r| {
            let rc = RcNetwork::new(r, capacitance);
            Curve {
                resistance: r,
                tau: rc.tau(),
                voltage: time.iter().map(|&t| rc.step_voltage(params.v_in, t)).collect(),
            }
        })
        .collect();

    debug!(%mode, t_max, samples = time.len(), curves = curves.len(), "rc step response");

    Ok(RcStepResult {
        mode,
        t_max,
        time,
        curves,
    })
}
