//! Optional-number parsing.

/// Parses free-text numeric input.
///
/// This is the single home of the portal's silent-coercion policy:
/// empty, whitespace-only, or non-numeric text is `None`, never an
/// error. Callers whose contract says "treat as zero" substitute the
/// default via [`parse_or_zero`].
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// [`parse_optional_number`] with the documented 0.0 default applied.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_optional_number(raw).unwrap_or(0.0)
}
