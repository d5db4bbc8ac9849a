//! How each value of a [`LookupResult`] is turned into text

use crate::lookup::LookupResult;
use crate::view::surface::ResultFields;

/// Shown in place of a missing value
pub const PLACEHOLDER: &str = "-";

pub fn text(value: Option<&str>) -> String {
    match value {
        Some(inner) if !inner.is_empty() => inner.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Decimal degrees, rounded to 4 decimal places, halves away from zero.
pub fn coordinate(value: Option<f64>) -> String {
    value
        .filter(|inner| inner.is_finite())
        .map(|inner| format!("{:.4}", round_ties_away(inner)))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

// The formatter rounds exact ties to even, so those are resolved beforehand.
// A tie is a value whose double, times 20000, is exactly an odd integer.
fn round_ties_away(value: f64) -> f64 {
    const SCALE: f64 = 20_000.0;
    if value == 0.0 {
        // no "-0.0000"
        return 0.0;
    }
    let scaled = value * SCALE;
    let exact = value.mul_add(SCALE, -scaled) == 0.0;
    if exact && scaled.fract() == 0.0 && scaled % 2.0 != 0.0 {
        (scaled + scaled.signum()) / SCALE
    } else {
        value
    }
}

pub fn asn(value: Option<u32>) -> String {
    value
        .map(|inner| format!("AS{inner}"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

impl ResultFields<String> {
    /// The texts displayed for the given result.
    pub fn render(result: &LookupResult) -> Self {
        Self {
            ip: text(Some(result.ip.as_str())),
            country: text(result.country.as_deref()),
            iso_code: text(result.iso_code.as_deref()),
            in_eu: flag(result.in_eu),
            city: text(result.city.as_deref()),
            region: text(result.region.as_deref()),
            latitude: coordinate(result.latitude),
            longitude: coordinate(result.longitude),
            timezone: text(result.timezone.as_deref()),
            asn: asn(result.asn),
            organization: text(result.organization.as_deref()),
            attribution: result.attribution.clone(),
        }
    }
}
