//! Typed accessors over the serialization tree
//!
//! The tree itself is an external collaborator (`serde_json::Value`); this
//! crate only reads it through defaulting accessors so that loading never
//! fails on missing or mistyped keys.

use serde_json::Value;

/// Defaulting scalar accessors for a tree element
///
/// A missing key, a non-object element, or a value of the wrong type all
/// yield the provided default.
pub trait ElementExt {
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;
    fn f64_or(&self, key: &str, default: f64) -> f64;
    fn bool_or(&self, key: &str, default: bool) -> bool;
}

impl ElementExt for Value {
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_present_values() {
        let element = json!({ "width": 32.0, "name": "crate", "visible": true });
        assert_eq!(element.f64_or("width", 0.0), 32.0);
        assert_eq!(element.str_or("name", ""), "crate");
        assert!(element.bool_or("visible", false));
    }

    #[test]
    fn test_defaults_on_missing_key() {
        let element = json!({});
        assert_eq!(element.f64_or("width", 100.0), 100.0);
        assert_eq!(element.str_or("name", "fallback"), "fallback");
        assert!(element.bool_or("visible", true));
    }

    #[test]
    fn test_defaults_on_wrong_type() {
        let element = json!({ "width": "not a number", "visible": "yes" });
        assert_eq!(element.f64_or("width", 1.0), 1.0);
        assert!(!element.bool_or("visible", false));
    }

    #[test]
    fn test_defaults_on_non_object() {
        let element = json!([1, 2, 3]);
        assert_eq!(element.f64_or("width", 7.0), 7.0);
    }
}
