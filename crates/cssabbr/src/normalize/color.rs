//! Color token expansion.
//!
//! Hex payloads are expanded by length: `#0` -> `#000`, `#ed` -> `#ededed`,
//! bare `#` -> `#000`; longer payloads are kept as typed. An alpha suffix
//! (`#f.5`) switches to `rgba()` output.

use crate::dictionary::COLOR_ALIASES;

/// Normalizes a color token such as `#ED`, `#t` or `#fc0.333`.
pub fn normalize_color(raw: &str) -> String {
    let body = raw.strip_prefix('#').unwrap_or(raw);

    if let Some(name) = COLOR_ALIASES.get(body) {
        return (*name).to_string();
    }

    match body.split_once('.') {
        Some((hex, alpha)) => to_rgba(hex, alpha),
        None => format!("#{}", expand_short(body)),
    }
}

/// Expands 0/1/2-digit payloads to CSS shorthand or full form.
fn expand_short(hex: &str) -> String {
    match hex.len() {
        0 => "000".to_string(),
        1 | 2 => hex.repeat(3),
        _ => hex.to_string(),
    }
}

/// Expands any payload to exactly six digits.
fn expand_full(hex: &str) -> String {
    match hex.len() {
        0 => "000000".to_string(),
        1 => hex.repeat(6),
        2 => hex.repeat(3),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => {
            let mut full: String = hex.chars().take(6).collect();
            while full.len() < 6 {
                full.push('0');
            }
            full
        }
    }
}

fn to_rgba(hex: &str, alpha: &str) -> String {
    let full = expand_full(hex);
    let channel = |range: std::ops::Range<usize>| {
        full.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    let alpha = format!("0.{alpha}").parse::<f64>().unwrap_or(1.0);

    format!(
        "rgba({}, {}, {}, {})",
        channel(0..2),
        channel(2..4),
        channel(4..6),
        alpha
    )
}
