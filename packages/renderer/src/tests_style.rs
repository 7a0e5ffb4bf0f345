/// Tests for the shared box-style derivation.
use crate::style::{derive_box_style, fmt_number};
use pagecraft_document::Props;
use serde_json::json;

fn props(value: serde_json::Value) -> Props {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_width_with_explicit_unit() {
    let style = derive_box_style(&props(json!({ "width": 50, "widthUnit": "px" })));
    assert_eq!(style.get("width").unwrap(), "50px");
}

#[test]
fn test_width_unit_defaults_to_percent() {
    let style = derive_box_style(&props(json!({ "width": 50 })));
    assert_eq!(style.get("width").unwrap(), "50%");
}

#[test]
fn test_absent_width_falls_back_to_full() {
    let style = derive_box_style(&props(json!({})));
    assert_eq!(style.get("width").unwrap(), "100%");
}

#[test]
fn test_empty_props_derive_only_width() {
    let style = derive_box_style(&props(json!({})));

    assert_eq!(style.len(), 1);
    assert!(!style.contains_key("padding"));
    assert!(!style.contains_key("margin"));
    assert!(!style.contains_key("border-radius"));
    assert!(!style.contains_key("text-align"));
}

#[test]
fn test_zero_width_is_present_not_absent() {
    let style = derive_box_style(&props(json!({ "width": 0 })));
    assert_eq!(style.get("width").unwrap(), "0%");
}

#[test]
fn test_pixel_fields() {
    let style = derive_box_style(&props(json!({
        "padding": 12,
        "margin": 8,
        "borderRadius": 4
    })));

    assert_eq!(style.get("padding").unwrap(), "12px");
    assert_eq!(style.get("margin").unwrap(), "8px");
    assert_eq!(style.get("border-radius").unwrap(), "4px");
}

#[test]
fn test_text_align_passthrough() {
    let style = derive_box_style(&props(json!({ "textAlign": "center" })));
    assert_eq!(style.get("text-align").unwrap(), "center");
}

#[test]
fn test_non_numeric_width_is_ignored() {
    let style = derive_box_style(&props(json!({ "width": "wide" })));
    assert_eq!(style.get("width").unwrap(), "100%");
}

#[test]
fn test_fractional_width_keeps_fraction() {
    let style = derive_box_style(&props(json!({ "width": 33.5 })));
    assert_eq!(style.get("width").unwrap(), "33.5%");
}

#[test]
fn test_fmt_number_drops_trailing_zero() {
    assert_eq!(fmt_number(24.0), "24");
    assert_eq!(fmt_number(1.5), "1.5");
    assert_eq!(fmt_number(0.0), "0");
}
