//! 555 timer model.
//!
//! The timer is reduced to its internal SET/RESET flip-flop plus the two
//! comparator thresholds. Supply is fixed at 5 V, so output levels are the
//! 0 V / 5 V logic rails.

use std::f64::consts::LN_2;

use super::rc::euler_step;

/// Supply voltage (V).
pub const VCC: f64 = 5.0;

/// Upper comparator threshold: the latch resets at or above 2/3 VCC.
pub const THRESHOLD_VOLTAGE: f64 = (2.0 / 3.0) * VCC;

/// Lower comparator threshold: a trigger below 1/3 VCC sets the latch.
pub const TRIGGER_VOLTAGE: f64 = VCC / 3.0;

/// Monostable pulse width factor, t = 1.1·R·C.
pub const MONOSTABLE_FACTOR: f64 = 1.1;

/// Charge and discharge times of an astable 555.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstableTiming {
    /// Output-high time, capacitor charging through R1 + R2 (s)
    pub t_high: f64,
    /// Output-low time, capacitor discharging through R2 (s)
    pub t_low: f64,
}

impl AstableTiming {
    /// Compute timing from resistances in ohms and capacitance in farads.
    pub fn new(r1: f64, r2: f64, capacitance: f64) -> Self {
        Self {
            t_high: LN_2 * (r1 + r2) * capacitance,
            t_low: LN_2 * r2 * capacitance,
        }
    }

    pub fn period(&self) -> f64 {
        self.t_high + self.t_low
    }

    /// Oscillation frequency in Hz, 0 for a zero period.
    pub fn frequency(&self) -> f64 {
        let period = self.period();
        if period > 0.0 {
            1.0 / period
        } else {
            0.0
        }
    }

    /// Percentage of the period spent high, 0 for a zero period.
    pub fn duty_percent(&self) -> f64 {
        let period = self.period();
        if period > 0.0 {
            (self.t_high / period) * 100.0
        } else {
            0.0
        }
    }
}

/// Theoretical monostable pulse width for resistance in ohms and capacitance in farads.
pub fn monostable_pulse_width(resistance: f64, capacitance: f64) -> f64 {
    MONOSTABLE_FACTOR * resistance * capacitance
}

/// State of the 555 flip-flop and its timing capacitor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Latch {
    pub latched: bool,
    pub cap_voltage: f64,
}

impl Latch {
    /// Advance one sample and return the new state with the output voltage.
    ///
    /// Order within the sample is fixed: SET from the trigger, then RESET
    /// from the capacitor, then the capacitor update. While latched the
    /// capacitor charges toward VCC by one Euler step; otherwise the
    /// discharge transistor empties it instantly.
    pub fn step(self, trigger: f64, dt: f64, tau: f64) -> (Latch, f64) {
        let mut latched = self.latched;

        if trigger < TRIGGER_VOLTAGE {
            latched = true;
        }
        if self.cap_voltage >= THRESHOLD_VOLTAGE {
            latched = false;
        }

        if latched {
            let cap_voltage = euler_step(self.cap_voltage, VCC, dt, tau);
            (Latch { latched, cap_voltage }, VCC)
        } else {
            (
                Latch {
                    latched,
                    cap_voltage: 0.0,
                },
                0.0,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_astable_timing() {
        let timing = AstableTiming::new(1000.0, 10_000.0, 10e-6);
        assert_relative_eq!(timing.t_high, LN_2 * 11_000.0 * 10e-6, max_relative = 1e-12);
        assert_relative_eq!(timing.t_low, LN_2 * 10_000.0 * 10e-6, max_relative = 1e-12);
        assert!(timing.duty_percent() > 50.0);
    }

    #[test]
    fn test_zero_period_guards() {
        let timing = AstableTiming::new(0.0, 0.0, 1e-6);
        assert_eq!(timing.frequency(), 0.0);
        assert_eq!(timing.duty_percent(), 0.0);
    }

    #[test]
    fn test_latch_idle_stays_low() {
        let (next, out) = Latch::default().step(VCC, 1e-3, 1.0);
        assert!(!next.latched);
        assert_eq!(out, 0.0);
        assert_eq!(next.cap_voltage, 0.0);
    }

    #[test]
    fn test_latch_set_charges() {
        let (next, out) = Latch::default().step(0.0, 0.1, 1.0);
        assert!(next.latched);
        assert_eq!(out, VCC);
        assert_relative_eq!(next.cap_voltage, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_reset_wins_over_set() {
        let state = Latch {
            latched: true,
            cap_voltage: THRESHOLD_VOLTAGE,
        };
        // Trigger still low, but the threshold comparator resets in the same sample
        let (next, out) = state.step(0.0, 0.1, 1.0);
        assert!(!next.latched);
        assert_eq!(out, 0.0);
        assert_eq!(next.cap_voltage, 0.0);
    }
}
