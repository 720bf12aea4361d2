//! Numeric formatting shared by the category writers.

/// Formats a number the way the output grammar expects: no trailing `.0`,
/// no negative zero.
pub(crate) fn number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// A number with a literal unit suffix (`px`, `deg`, `%`, `ms`).
pub(crate) fn with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", number(value), unit)
}

pub(crate) fn px(value: f64) -> String {
    with_unit(value, "px")
}
