//! Ohm's law and DC power: any two of V, I, R, P determine the others.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::circuit::require_finite;
use crate::error::{CircuitLabError, Result};

/// Known quantities; unset fields are solved for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OhmsInputs {
    /// Voltage (V)
    pub voltage: Option<f64>,
    /// Current (A)
    pub current: Option<f64>,
    /// Resistance (Ω)
    pub resistance: Option<f64>,
    /// Power (W)
    pub power: Option<f64>,
}

/// All four quantities after solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsSolution {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
}

impl fmt::Display for OhmsSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Voltage: {:.4} V\nCurrent: {:.4} A\nResistance: {:.4} Ω\nPower: {:.4} W",
            self.voltage, self.current, self.resistance, self.power
        )
    }
}

/// `num / den`, or 0 when the divisor is zero.
fn ratio(num: f64, den: f64) -> f64 {
    if den != 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Solve for the missing quantities from the first usable pair.
///
/// Pairs are tried in the order (V, I), (V, R), (V, P), (I, R), (I, P),
/// (P, R); the chosen pair is kept and every other quantity is recomputed,
/// overriding any extra inputs. A zero divisor yields 0 for that quantity.
pub fn solve_ohms_law(inputs: &OhmsInputs) -> Result<OhmsSolution> {
    for (name, value) in [
        ("voltage", inputs.voltage),
        ("current", inputs.current),
        ("resistance", inputs.resistance),
        ("power", inputs.power),
    ] {
        if let Some(v) = value {
            require_finite(name, v)?;
        }
    }

    let (voltage, current, resistance, power) = match (
        inputs.voltage,
        inputs.current,
        inputs.resistance,
        inputs.power,
    ) {
        (Some(v), Some(i), _, _) => (v, i, ratio(v, i), v * i),
        (Some(v), None, Some(r), _) => (v, ratio(v, r), r, ratio(v * v, r)),
        (Some(v), None, None, Some(p)) => (v, ratio(p, v), ratio(v * v, p), p),
        (None, Some(i), Some(r), _) => (i * r, i, r, i * i * r),
        (None, Some(i), None, Some(p)) => (ratio(p, i), i, ratio(p, i * i), p),
        (None, None, Some(r), Some(p)) => {
            if p * r < 0.0 {
                return Err(CircuitLabError::invalid_parameter(
                    "power",
                    "power and resistance must have the same sign",
                ));
            }
            let current = if r != 0.0 { (p / r).sqrt() } else { 0.0 };
            ((p * r).sqrt(), current, r, p)
        }
        _ => {
            return Err(CircuitLabError::invalid_parameter(
                "ohms_law",
                "need at least two of voltage, current, resistance, power",
            ))
        }
    };

    Ok(OhmsSolution {
        voltage,
        current,
        resistance,
        power,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve(v: Option<f64>, i: Option<f64>, r: Option<f64>, p: Option<f64>) -> OhmsSolution {
        solve_ohms_law(&OhmsInputs {
            voltage: v,
            current: i,
            resistance: r,
            power: p,
        })
        .unwrap()
    }

    fn assert_solution(s: OhmsSolution, v: f64, i: f64, r: f64, p: f64) {
        assert_relative_eq!(s.voltage, v, max_relative = 1e-12);
        assert_relative_eq!(s.current, i, max_relative = 1e-12);
        assert_relative_eq!(s.resistance, r, max_relative = 1e-12);
        assert_relative_eq!(s.power, p, max_relative = 1e-12);
    }

    #[test]
    fn test_every_pair_solves_the_same_circuit() {
        // 12 V across 4 Ω: 3 A, 36 W
        assert_solution(solve(Some(12.0), Some(3.0), None, None), 12.0, 3.0, 4.0, 36.0);
        assert_solution(solve(Some(12.0), None, Some(4.0), None), 12.0, 3.0, 4.0, 36.0);
        assert_solution(solve(Some(12.0), None, None, Some(36.0)), 12.0, 3.0, 4.0, 36.0);
        assert_solution(solve(None, Some(3.0), Some(4.0), None), 12.0, 3.0, 4.0, 36.0);
        assert_solution(solve(None, Some(3.0), None, Some(36.0)), 12.0, 3.0, 4.0, 36.0);
        assert_solution(solve(None, None, Some(4.0), Some(36.0)), 12.0, 3.0, 4.0, 36.0);
    }

    #[test]
    fn test_first_pair_wins() {
        // V and I given: R and P are recomputed, ignoring the inputs
        let s = solve(Some(10.0), Some(2.0), Some(100.0), Some(1.0));
        assert_solution(s, 10.0, 2.0, 5.0, 20.0);
    }

    #[test]
    fn test_zero_divisors_give_zero() {
        let s = solve(Some(5.0), Some(0.0), None, None);
        assert_eq!(s.resistance, 0.0);
        assert_eq!(s.power, 0.0);

        let s = solve(Some(5.0), None, Some(0.0), None);
        assert_eq!(s.current, 0.0);
        assert_eq!(s.power, 0.0);

        let s = solve(Some(0.0), None, None, Some(2.0));
        assert_eq!(s.current, 0.0);
        assert_eq!(s.resistance, 0.0);

        let s = solve(Some(5.0), None, None, Some(0.0));
        assert_eq!(s.current, 0.0);
        assert_eq!(s.resistance, 0.0);

        let s = solve(None, Some(0.0), None, Some(2.0));
        assert_eq!(s.voltage, 0.0);
        assert_eq!(s.resistance, 0.0);

        let s = solve(None, None, Some(0.0), Some(2.0));
        assert_eq!(s.voltage, 0.0);
        assert_eq!(s.current, 0.0);
    }

    #[test]
    fn test_needs_two_inputs() {
        for inputs in [
            OhmsInputs::default(),
            OhmsInputs {
                voltage: Some(5.0),
                ..Default::default()
            },
            OhmsInputs {
                power: Some(1.0),
                ..Default::default()
            },
        ] {
            assert!(matches!(
                solve_ohms_law(&inputs),
                Err(CircuitLabError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_negative_power_resistance_product() {
        let inputs = OhmsInputs {
            resistance: Some(10.0),
            power: Some(-1.0),
            ..Default::default()
        };
        assert!(solve_ohms_law(&inputs).is_err());
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let inputs = OhmsInputs {
            voltage: Some(f64::NAN),
            current: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            solve_ohms_law(&inputs),
            Err(CircuitLabError::InvalidParameter { ref param, .. }) if param == "voltage"
        ));
    }

    #[test]
    fn test_display_panel() {
        let s = solve(Some(12.0), Some(3.0), None, None);
        assert_eq!(
            s.to_string(),
            "Voltage: 12.0000 V\nCurrent: 3.0000 A\nResistance: 4.0000 Ω\nPower: 36.0000 W"
        );
    }
}
