//! Numeric value normalization: default units and unit aliases.

use super::NormalizeOptions;
use crate::dictionary::{KNOWN_UNITS, UNIT_ALIASES};

/// Splits `-1.5em` into (`-1.5`, `em`).
pub fn split_unit(raw: &str) -> (&str, &str) {
    let at = raw
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(raw.len());
    raw.split_at(at)
}

/// Normalizes a number token.
///
/// Zero never carries a unit. A bare nonzero number gets the configured
/// default unit unless `property` is unitless or auto-units are off; a unit
/// alias (`e`, `p`, …) is expanded unless it already is a full unit name.
pub fn normalize_number(raw: &str, property: Option<&str>, options: &NormalizeOptions<'_>) -> String {
    let (numeric, unit) = split_unit(raw);

    if numeric.parse::<f64>().is_ok_and(|n| n == 0.0) {
        return "0".to_string();
    }

    if unit.is_empty() {
        let unitless = property.is_some_and(|p| options.is_unitless(p));
        if !options.auto_unit || unitless {
            return numeric.to_string();
        }
        let default_unit = if numeric.contains('.') {
            options.float_unit
        } else {
            options.int_unit
        };
        return format!("{numeric}{default_unit}");
    }

    if KNOWN_UNITS.contains(unit.to_ascii_lowercase().as_str()) {
        return raw.to_string();
    }

    match UNIT_ALIASES.get(unit) {
        Some(full) => format!("{numeric}{full}"),
        None => raw.to_string(),
    }
}
