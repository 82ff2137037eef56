//! Resistor colour-code bands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CircuitLabError, Result};

/// Colours of the digit codes 0-9.
pub const DIGIT_COLORS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "grey", "white",
];

/// Colour of a band code. Multipliers below 0.01 have no colour of their
/// own and read as black.
pub fn band_color(code: i32) -> &'static str {
    match code {
        0..=9 => DIGIT_COLORS[code as usize],
        -1 => "gold",
        -2 => "silver",
        _ => "black",
    }
}

/// Significant-digit bands plus the power-of-ten multiplier band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistorBands {
    /// Two digits (4-band) or three (5-band)
    pub digits: Vec<u8>,
    pub multiplier_exponent: i32,
}

impl ResistorBands {
    pub fn digit_colors(&self) -> Vec<&'static str> {
        self.digits.iter().map(|&d| band_color(d as i32)).collect()
    }

    pub fn multiplier_color(&self) -> &'static str {
        band_color(self.multiplier_exponent)
    }

    /// Multiplier as printed on a chart: "0.1", "0.01" or "10^n".
    pub fn multiplier_label(&self) -> String {
        match self.multiplier_exponent {
            -1 => "0.1".to_string(),
            -2 => "0.01".to_string(),
            n => format!("10^{}", n),
        }
    }

    /// Resistance the bands encode (Ω).
    pub fn value(&self) -> f64 {
        let significand = self
            .digits
            .iter()
            .fold(0.0, |acc, &d| acc * 10.0 + d as f64);
        significand * 10f64.powi(self.multiplier_exponent)
    }
}

impl fmt::Display for ResistorBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<String> = self.digits.iter().map(|d| d.to_string()).collect();
        write!(
            f,
            "Bands: {} {}\nDigits: {}\nMultiplier: {}",
            self.digit_colors().join(" "),
            self.multiplier_color(),
            digits.join(" "),
            self.multiplier_label()
        )
    }
}

/// Parse a resistance as typed on a colour-code chart ("4.7k", "470", "1M").
///
/// Case-insensitive; `k` is kilo and `m` is mega, since milliohm values
/// have no colour code.
pub fn parse_resistance(text: &str) -> Result<f64> {
    let lower = text.trim().to_lowercase();
    let (digits, scale) = if let Some(rest) = lower.strip_suffix('k') {
        (rest, 1e3)
    } else if let Some(rest) = lower.strip_suffix('m') {
        (rest, 1e6)
    } else {
        (lower.as_str(), 1.0)
    };

    digits
        .trim()
        .parse::<f64>()
        .map(|v| v * scale)
        .map_err(|_| CircuitLabError::invalid_value(text))
}

/// Colour bands for `value` ohms.
///
/// The value is rounded half-to-even to two (or, with `five_band`, three)
/// significant digits. When rounding carries into an extra digit
/// (999.6 → 1000) the multiplier absorbs it. `None` for values that are not
/// finite and positive.
pub fn resistor_bands(value: f64, five_band: bool) -> Option<ResistorBands> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let count: usize = if five_band { 3 } else { 2 };
    let exponent = value.log10().floor() as i32;
    let mantissa = value / 10f64.powi(exponent);
    let scaled = (mantissa * 10f64.powi(count as i32 - 1)).round_ties_even() as u64;

    let mut multiplier_exponent = exponent - (count as i32 - 1);
    let mut digits: Vec<u8> = scaled.to_string().bytes().map(|b| b - b'0').collect();

    if digits.len() > count {
        multiplier_exponent += (digits.len() - count) as i32;
        digits.truncate(count);
    }
    while digits.len() < count {
        digits.push(0);
        multiplier_exponent -= 1;
    }

    Some(ResistorBands {
        digits,
        multiplier_exponent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_four_band_kilohm() {
        let bands = resistor_bands(4700.0, false).unwrap();
        assert_eq!(bands.digits, vec![4, 7]);
        assert_eq!(bands.multiplier_exponent, 2);
        assert_eq!(bands.digit_colors(), vec!["yellow", "violet"]);
        assert_eq!(bands.multiplier_color(), "red");
        assert_eq!(bands.multiplier_label(), "10^2");
        assert_relative_eq!(bands.value(), 4700.0, max_relative = 1e-12);
    }

    #[test]
    fn test_five_band_digits() {
        let bands = resistor_bands(10_000.0, true).unwrap();
        assert_eq!(bands.digits, vec![1, 0, 0]);
        assert_eq!(bands.multiplier_exponent, 2);

        let bands = resistor_bands(220.0, true).unwrap();
        assert_eq!(bands.digits, vec![2, 2, 0]);
        assert_eq!(bands.multiplier_exponent, 0);
        assert_eq!(bands.multiplier_label(), "10^0");
        assert_eq!(bands.multiplier_color(), "black");
    }

    #[test]
    fn test_fractional_multipliers() {
        let tenth = resistor_bands(4.7, false).unwrap();
        assert_eq!(tenth.digits, vec![4, 7]);
        assert_eq!(tenth.multiplier_exponent, -1);
        assert_eq!(tenth.multiplier_label(), "0.1");
        assert_eq!(tenth.multiplier_color(), "gold");

        let hundredth = resistor_bands(0.47, false).unwrap();
        assert_eq!(hundredth.digits, vec![4, 7]);
        assert_eq!(hundredth.multiplier_label(), "0.01");
        assert_eq!(hundredth.multiplier_color(), "silver");

        let below = resistor_bands(0.047, false).unwrap();
        assert_eq!(below.multiplier_label(), "10^-3");
        assert_eq!(below.multiplier_color(), "black");
    }

    #[test]
    fn test_rounding_carry_moves_into_multiplier() {
        let bands = resistor_bands(999.6, false).unwrap();
        assert_eq!(bands.digits, vec![1, 0]);
        assert_eq!(bands.multiplier_exponent, 2);
        assert_relative_eq!(bands.value(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rounds_half_to_even() {
        // Exact ties: 1.25 and 3.75 are representable
        assert_eq!(resistor_bands(125.0, false).unwrap().digits, vec![1, 2]);
        assert_eq!(resistor_bands(375.0, false).unwrap().digits, vec![3, 8]);
    }

    #[test]
    fn test_non_positive_has_no_bands() {
        assert_eq!(resistor_bands(0.0, false), None);
        assert_eq!(resistor_bands(-100.0, true), None);
        assert_eq!(resistor_bands(f64::NAN, false), None);
    }

    #[test]
    fn test_parse_resistance_suffixes() {
        assert_relative_eq!(parse_resistance("4.7k").unwrap(), 4700.0, max_relative = 1e-12);
        assert_relative_eq!(parse_resistance(" 2.2K ").unwrap(), 2200.0, max_relative = 1e-12);
        assert_relative_eq!(parse_resistance("1m").unwrap(), 1e6, max_relative = 1e-12);
        assert_relative_eq!(parse_resistance("1M").unwrap(), 1e6, max_relative = 1e-12);
        assert_eq!(parse_resistance("470").unwrap(), 470.0);
        assert!(matches!(
            parse_resistance("red"),
            Err(CircuitLabError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_display_panel() {
        let bands = resistor_bands(4700.0, false).unwrap();
        assert_eq!(
            bands.to_string(),
            "Bands: yellow violet red\nDigits: 4 7\nMultiplier: 10^2"
        );
    }
}
