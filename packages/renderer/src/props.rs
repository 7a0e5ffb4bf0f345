//! Typed accessors over the open prop map.

use pagecraft_document::Props;
use serde_json::Value;

/// Ergonomic readers for resolved prop values.
///
/// Every accessor is total: a missing key, a null, or a value of the
/// wrong JSON type reads as `None`, and the component render supplies its
/// own fallback. Numbers never surface as NaN.
pub trait PropsExt {
    fn str_prop(&self, key: &str) -> Option<&str>;
    fn number_prop(&self, key: &str) -> Option<f64>;
    fn bool_prop(&self, key: &str) -> Option<bool>;
    fn array_prop(&self, key: &str) -> &[Value];

    fn str_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.str_prop(key).filter(|s| !s.is_empty()).unwrap_or(fallback)
    }
}

impl PropsExt for Props {
    fn str_prop(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn number_prop(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
    }

    fn bool_prop(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    fn array_prop(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
