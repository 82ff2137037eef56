//! Stimulus sources: the square-wave drive and the 555 trigger pulse.

/// 50% duty square wave, high for the first half of each period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareWave {
    /// High level (V); the low level is 0 V
    pub amplitude: f64,
    /// Period in seconds
    pub period: f64,
}

impl SquareWave {
    /// Create a square wave from its high level and frequency.
    pub fn new(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            period: 1.0 / frequency_hz,
        }
    }

    /// Source voltage at time `t`.
    pub fn level(&self, t: f64) -> f64 {
        if (t % self.period) < (self.period / 2.0) {
            self.amplitude
        } else {
            0.0
        }
    }
}

/// Active-low trigger: held at `high` except for one pulse to 0 V.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPulse {
    /// Idle level (V)
    pub high: f64,
    /// Pulse start (s), inclusive
    pub start: f64,
    /// Pulse end (s), inclusive
    pub end: f64,
}

impl TriggerPulse {
    pub fn new(high: f64, start: f64, width: f64) -> Self {
        Self {
            high,
            start,
            end: start + width,
        }
    }

    /// Trigger voltage at time `t`.
    pub fn level(&self, t: f64) -> f64 {
        if self.start <= t && t <= self.end {
            0.0
        } else {
            self.high
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_halves() {
        // 1 Hz: high on [0, 0.5), low on [0.5, 1)
        let sq = SquareWave::new(5.0, 1.0);
        assert_eq!(sq.level(0.0), 5.0);
        assert_eq!(sq.level(0.49), 5.0);
        assert_eq!(sq.level(0.5), 0.0);
        assert_eq!(sq.level(0.99), 0.0);
        assert_eq!(sq.level(1.25), 5.0);
    }

    #[test]
    fn test_trigger_pulse_bounds_inclusive() {
        let trig = TriggerPulse::new(5.0, 0.1, 0.02);
        assert_eq!(trig.level(0.0), 5.0);
        assert_eq!(trig.level(0.1), 0.0);
        assert_eq!(trig.level(0.11), 0.0);
        assert_eq!(trig.level(trig.end), 0.0);
        assert_eq!(trig.level(0.13), 5.0);
    }
}
