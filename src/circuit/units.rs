//! SI-suffixed value parsing for user-entered circuit values.

use crate::error::{CircuitLabError, Result};

/// SI prefixes accepted as a trailing suffix.
///
/// Case matters: `m` is milli and `M` is mega. `k` and `K` are both kilo,
/// and `u` stands in for `µ`.
const SI_SUFFIXES: &[(char, f64)] = &[
    ('p', 1e-12),
    ('n', 1e-9),
    ('u', 1e-6),
    ('µ', 1e-6),
    ('m', 1e-3),
    ('k', 1e3),
    ('K', 1e3),
    ('M', 1e6),
    ('G', 1e9),
];

/// Parse a value with optional SI suffix (e.g., "10k", "100n", "4.7u").
///
/// Returns `None` for empty or malformed text. A bare number passes
/// through unscaled.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let (digits, scale) = match SI_SUFFIXES.iter().find(|(suffix, _)| *suffix == last) {
        Some(&(_, scale)) => (&text[..text.len() - last.len_utf8()], scale),
        None => (text, 1.0),
    };

    digits.trim_end().parse::<f64>().ok().map(|v| v * scale)
}

/// Parse a single required value.
pub fn parse_required(text: &str) -> Result<f64> {
    parse_value(text).ok_or_else(|| CircuitLabError::invalid_value(text))
}

/// Parse a comma-separated list of values ("1k, 4.7k, 10k").
///
/// Blank entries are skipped; any malformed entry fails the whole list.
pub fn parse_value_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_required)
        .collect()
}
