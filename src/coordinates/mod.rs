//! Angle helpers for catalogue fields
//!
//! Catalogue files mix decimal degrees, decimal hours and sexagesimal
//! strings. These helpers normalise everything to decimal degrees.

/// Convert right ascension in hours to degrees
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Split a sexagesimal string into its three numeric parts
fn sexagesimal_parts(text: &str) -> Option<(f64, f64, f64)> {
    let mut parts = text.split_whitespace().map(|p| p.parse::<f64>());
    let a = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    let c = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

/// Parse right ascension given as `hh mm ss.ss` into degrees
pub fn parse_hms(text: &str) -> Option<f64> {
    let (h, m, s) = sexagesimal_parts(text)?;
    Some(hours_to_degrees(h + m / 60.0 + s / 3600.0))
}

/// Parse declination given as `±dd mm ss.s` into degrees
///
/// The sign is taken from the text, so `-00 30 00` is -0.5.
pub fn parse_dms(text: &str) -> Option<f64> {
    let text = text.trim();
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches(['+', '-']);
    let (d, m, s) = sexagesimal_parts(unsigned)?;
    let value = d + m / 60.0 + s / 3600.0;
    Some(if negative { -value } else { value })
}
