//! Text codecs for property values
//!
//! The grid only ever exchanges strings; each configuration owns the
//! text ↔ native conversion for its fields. These helpers keep the
//! `update_property` implementations declarative: one match arm per field,
//! delegating to a typed assignment that is a no-op on parse failure.

/// Parse a property string into a finite number
pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a property string into a boolean
///
/// Accepts `true`/`false` and the `1`/`0` forms some grids emit for
/// checkbox widgets.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Format a number the way the grid displays it
pub fn format_f64(value: f64) -> String {
    format!("{value}")
}

/// Format a boolean the way the grid displays it
pub fn format_bool(value: bool) -> String {
    format!("{value}")
}

/// Assign a parsed number, reporting failure without mutation
pub fn update_f64(field: &mut f64, value: &str) -> bool {
    match parse_f64(value) {
        Some(parsed) => {
            *field = parsed;
            true
        }
        None => false,
    }
}

/// Assign a parsed boolean, reporting failure without mutation
pub fn update_bool(field: &mut bool, value: &str) -> bool {
    match parse_bool(value) {
        Some(parsed) => {
            *field = parsed;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("12.5"), Some(12.5));
        assert_eq!(parse_f64("  -3 "), Some(-3.0));
        assert_eq!(parse_f64("twelve"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        assert_eq!(parse_f64(&format_f64(100.0)), Some(100.0));
        assert_eq!(parse_bool(&format_bool(false)), Some(false));
    }

    #[test]
    fn test_format_f64_drops_trailing_zero() {
        assert_eq!(format_f64(100.0), "100");
        assert_eq!(format_f64(2.5), "2.5");
    }

    #[test]
    fn test_update_f64_is_noop_on_failure() {
        let mut field = 10.0;
        assert!(!update_f64(&mut field, "wide"));
        assert_eq!(field, 10.0);
        assert!(update_f64(&mut field, "11"));
        assert_eq!(field, 11.0);
    }

    #[test]
    fn test_update_bool_is_noop_on_failure() {
        let mut field = true;
        assert!(!update_bool(&mut field, "maybe"));
        assert!(field);
        assert!(update_bool(&mut field, "false"));
        assert!(!field);
    }
}
