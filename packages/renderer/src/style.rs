//! Shared box-style derivation.
//!
//! Every component derives its outer box style through [`derive_box_style`]
//! before layering its own type-specific styles on top. The editor preview
//! and the visitor render both go through this one function, which is what
//! keeps the two pixel-identical.

use crate::props::PropsExt;
use pagecraft_document::Props;
use std::collections::BTreeMap;

/// Format a prop number the way it was typed: no trailing `.0`.
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Derive the common box style from the shared field subset.
///
/// - `width`: present → `"{width}{widthUnit}"` with unit defaulting to `%`;
///   absent → `"100%"`.
/// - `padding`, `margin`, `borderRadius`: pixel values when present,
///   omitted when absent so inherited styling applies.
/// - `textAlign`: passed through verbatim when set.
pub fn derive_box_style(props: &Props) -> BTreeMap<String, String> {
    let mut style = BTreeMap::new();

    match props.number_prop("width") {
        Some(width) => {
            let unit = props.str_prop("widthUnit").unwrap_or("%");
            style.insert("width".to_string(), format!("{}{}", fmt_number(width), unit));
        }
        None => {
            style.insert("width".to_string(), "100%".to_string());
        }
    }

    if let Some(padding) = props.number_prop("padding") {
        style.insert("padding".to_string(), format!("{}px", fmt_number(padding)));
    }

    if let Some(margin) = props.number_prop("margin") {
        style.insert("margin".to_string(), format!("{}px", fmt_number(margin)));
    }

    if let Some(radius) = props.number_prop("borderRadius") {
        style.insert(
            "border-radius".to_string(),
            format!("{}px", fmt_number(radius)),
        );
    }

    if let Some(align) = props.str_prop("textAlign") {
        style.insert("text-align".to_string(), align.to_string());
    }

    style
}
