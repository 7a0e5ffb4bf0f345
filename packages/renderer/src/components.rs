//! Render functions for the standard component palette.
//!
//! Every function here is pure: output is a function of the resolved props
//! and pre-rendered slot content only. No clock, no randomness, no
//! mutation. The same node renders identically in the editor preview and
//! the visitor-facing page.
//!
//! Slot children arrive already rendered; a component decides where they
//! go, never how they render.

use crate::props::PropsExt;
use crate::registry::ComponentKind;
use crate::style::{derive_box_style, fmt_number};
use crate::vdom::VNode;
use pagecraft_document::Props;
use serde_json::Value;
use std::collections::BTreeMap;

/// Rendered slot content, keyed by slot name.
pub type RenderedSlots = BTreeMap<String, Vec<VNode>>;

impl ComponentKind {
    /// Exhaustive render dispatch. Adding a component type extends this
    /// match and the registry entry; the renderer itself never changes.
    pub fn render(&self, props: &Props, slots: &RenderedSlots) -> VNode {
        match self {
            ComponentKind::Heading => heading(props),
            ComponentKind::Paragraph => paragraph(props),
            ComponentKind::Image => image(props),
            ComponentKind::Button => button(props),
            ComponentKind::List => list(props),
            ComponentKind::Card => card(props, slots),
            ComponentKind::LogoCard => logo_card(props),
            ComponentKind::Flex => flex(props, slots),
            ComponentKind::Grid => grid(props, slots),
            ComponentKind::Header => header(props),
            ComponentKind::Footer => footer(props),
            ComponentKind::Divider => divider(props),
            ComponentKind::Spacer => spacer(props),
        }
    }
}

fn slot_children(slots: &RenderedSlots, name: &str) -> Vec<VNode> {
    slots.get(name).cloned().unwrap_or_default()
}

fn item_str<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

fn px(n: f64) -> String {
    format!("{}px", fmt_number(n))
}

fn heading(props: &Props) -> VNode {
    let mut node = VNode::element("h2")
        .with_styles(derive_box_style(props))
        .with_style("font-weight", "bold");

    if let Some(color) = props.str_prop("color") {
        node = node.with_style("color", color);
    }
    if let Some(size) = props.number_prop("fontSize") {
        node = node.with_style("font-size", px(size));
    }

    node.with_child(VNode::text(props.str_prop("children").unwrap_or("")))
}

fn paragraph(props: &Props) -> VNode {
    let mut node = VNode::element("p").with_styles(derive_box_style(props));

    if let Some(color) = props.str_prop("color") {
        node = node.with_style("color", color);
    }
    if let Some(size) = props.number_prop("fontSize") {
        node = node.with_style("font-size", px(size));
    }

    node.with_child(VNode::text(props.str_prop("children").unwrap_or("")))
}

fn image(props: &Props) -> VNode {
    let mut node = VNode::element("img")
        .with_attr("src", props.str_prop("src").unwrap_or(""))
        .with_attr("alt", props.str_prop("alt").unwrap_or(""))
        .with_styles(derive_box_style(props));

    node = match props.number_prop("height") {
        Some(height) => node.with_style("height", px(height)),
        None => node.with_style("height", "auto"),
    };
    if let Some(fit) = props.str_prop("objectFit") {
        node = node.with_style("object-fit", fit);
    }
    if let Some(position) = props.str_prop("objectPosition") {
        node = node.with_style("object-position", position);
    }

    node
}

fn button(props: &Props) -> VNode {
    let mut node = VNode::element("a")
        .with_attr("href", props.str_prop("href").unwrap_or("#"))
        .with_styles(derive_box_style(props));

    if let Some(bg) = props.str_prop("backgroundColor") {
        node = node.with_style("background-color", bg);
    }
    if let Some(color) = props.str_prop("color") {
        node = node.with_style("color", color);
    }

    // Fixed button chrome wins over the box fields.
    node.with_style("padding", "8px 16px")
        .with_style("border-radius", "4px")
        .with_style("text-decoration", "none")
        .with_style("display", "inline-block")
        .with_child(VNode::text(props.str_prop("children").unwrap_or("")))
}

fn list(props: &Props) -> VNode {
    let tag = if props.bool_prop("ordered").unwrap_or(false) {
        "ol"
    } else {
        "ul"
    };

    let items = props
        .array_prop("items")
        .iter()
        .map(|item| {
            VNode::element("li").with_child(VNode::text(item_str(item, "text").unwrap_or("")))
        })
        .collect();

    VNode::element(tag)
        .with_styles(derive_box_style(props))
        .with_children(items)
}

fn card(props: &Props, slots: &RenderedSlots) -> VNode {
    card_shell(props).with_children(slot_children(slots, "content"))
}

/// Shared card chrome: background, border, optional shadow.
fn card_shell(props: &Props) -> VNode {
    let mut node = VNode::element("div").with_styles(derive_box_style(props));

    if let Some(bg) = props.str_prop("backgroundColor") {
        node = node.with_style("background-color", bg);
    }

    let border = match props.str_prop("borderColor") {
        Some(color) => format!("1px solid {}", color),
        None => "1px solid #ddd".to_string(),
    };
    let shadow = if props.bool_prop("shadow").unwrap_or(false) {
        "0 4px 6px rgba(0,0,0,0.1)"
    } else {
        "none"
    };

    node.with_style("border", border)
        .with_style("box-shadow", shadow)
        .with_style("transition", "transform 0.2s, box-shadow 0.2s")
        .with_style("cursor", "pointer")
}

fn logo_card(props: &Props) -> VNode {
    let logo_size = props.number_prop("logoSize").map(px).unwrap_or_else(|| "60px".to_string());

    let mut row = VNode::element("div")
        .with_style("display", "flex")
        .with_style(
            "flex-direction",
            props.str_prop("flexDirection").unwrap_or("row"),
        )
        .with_style("align-items", props.str_prop("alignItems").unwrap_or("center"))
        .with_style(
            "justify-content",
            props.str_prop("justifyContent").unwrap_or("flex-start"),
        )
        .with_style("gap", "16px");

    if let Some(logo) = props.str_prop("logo").filter(|s| !s.is_empty()) {
        row = row.with_child(
            VNode::element("div").with_style("flex-shrink", "0").with_child(
                VNode::element("img")
                    .with_attr("src", logo)
                    .with_attr("alt", "Logo")
                    .with_style("width", logo_size.clone())
                    .with_style("height", logo_size.clone())
                    .with_style("object-fit", "contain"),
            ),
        );
    }

    let mut text_column = VNode::element("div").with_style("flex", "1");
    if let Some(title) = props.str_prop("title").filter(|s| !s.is_empty()) {
        text_column = text_column.with_child(
            VNode::element("h3")
                .with_style("margin", "0 0 8px 0")
                .with_style("font-size", "18px")
                .with_style("font-weight", "bold")
                .with_style("color", "#333")
                .with_child(VNode::text(title)),
        );
    }
    if let Some(description) = props.str_prop("description").filter(|s| !s.is_empty()) {
        text_column = text_column.with_child(
            VNode::element("p")
                .with_style("margin", "0")
                .with_style("font-size", "14px")
                .with_style("line-height", "1.5")
                .with_style("color", "#666")
                .with_child(VNode::text(description)),
        );
    }

    card_shell(props).with_child(row.with_child(text_column))
}

fn flex(props: &Props, slots: &RenderedSlots) -> VNode {
    let mut content = VNode::element("div")
        .with_style("display", "flex")
        .with_style("flex-direction", props.str_prop("direction").unwrap_or("row"))
        .with_style("align-items", props.str_prop("align").unwrap_or("stretch"))
        .with_style(
            "justify-content",
            props.str_prop("justify").unwrap_or("flex-start"),
        );

    if let Some(gap) = props.number_prop("gap") {
        content = content.with_style("gap", px(gap));
    }

    VNode::element("div")
        .with_styles(derive_box_style(props))
        .with_child(content.with_children(slot_children(slots, "content")))
}

fn grid(props: &Props, slots: &RenderedSlots) -> VNode {
    let columns = props.number_prop("columns").unwrap_or(2.0);

    let mut content = VNode::element("div")
        .with_style("display", "grid")
        .with_style(
            "grid-template-columns",
            format!("repeat({}, 1fr)", fmt_number(columns)),
        )
        .with_styles(derive_box_style(props));

    if let Some(gap) = props.number_prop("gap") {
        content = content.with_style("gap", px(gap));
    }

    // The box fields land on the grid container itself, not the wrapper.
    VNode::element("div").with_child(content.with_children(slot_children(slots, "content")))
}

fn header(props: &Props) -> VNode {
    let text_color = props.str_prop("textColor").unwrap_or("#000000");
    let sticky = props.bool_prop("sticky").unwrap_or(false);

    let mut node = VNode::element("header")
        .with_styles(derive_box_style(props))
        .with_style(
            "background-color",
            props.str_prop("backgroundColor").unwrap_or("#ffffff"),
        )
        .with_style("color", text_color)
        .with_style(
            "padding",
            props.number_prop("padding").map(px).unwrap_or_else(|| "16px".to_string()),
        )
        .with_style(
            "box-shadow",
            if props.bool_prop("shadow").unwrap_or(false) {
                "0 2px 4px rgba(0,0,0,0.1)"
            } else {
                "none"
            },
        )
        .with_style("position", if sticky { "sticky" } else { "static" })
        .with_style("top", if sticky { "0" } else { "auto" })
        .with_style("z-index", if sticky { "1000" } else { "auto" })
        .with_style("display", "flex")
        .with_style("justify-content", "space-between")
        .with_style("align-items", "center");

    let mut brand = VNode::element("div")
        .with_style("display", "flex")
        .with_style("align-items", "center");
    if let Some(logo) = props.str_prop("logo").filter(|s| !s.is_empty()) {
        brand = brand.with_child(
            VNode::element("img")
                .with_attr("src", logo)
                .with_attr("alt", "Logo")
                .with_style("height", "40px")
                .with_style("width", "auto")
                .with_style("margin-right", "12px"),
        );
    }
    if let Some(logo_text) = props.str_prop("logoText").filter(|s| !s.is_empty()) {
        brand = brand.with_child(
            VNode::element("h1")
                .with_style("font-size", "24px")
                .with_style("font-weight", "bold")
                .with_style("margin", "0")
                .with_style("color", text_color)
                .with_child(VNode::text(logo_text)),
        );
    }
    node = node.with_child(brand);

    let links = props
        .array_prop("navLinks")
        .iter()
        .map(|link| {
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", item_str(link, "url").unwrap_or("#"))
                    .with_style("text-decoration", "none")
                    .with_style("color", text_color)
                    .with_style("font-weight", "500")
                    .with_style("padding", "8px 12px")
                    .with_style("border-radius", "4px")
                    .with_style("transition", "background-color 0.2s")
                    .with_child(VNode::text(item_str(link, "text").unwrap_or("Link"))),
            )
        })
        .collect();

    node.with_child(
        VNode::element("nav").with_child(
            VNode::element("ul")
                .with_style("display", "flex")
                .with_style("list-style", "none")
                .with_style("margin", "0")
                .with_style("padding", "0")
                .with_style("gap", "24px")
                .with_children(links),
        ),
    )
}

fn footer(props: &Props) -> VNode {
    let text_color = props.str_prop("textColor").unwrap_or("#ffffff");
    let border_color = props.str_prop("borderColor").unwrap_or("#555555");
    let divider = format!("1px solid {}", border_color);

    let mut node = VNode::element("footer")
        .with_styles(derive_box_style(props))
        .with_style(
            "background-color",
            props.str_prop("backgroundColor").unwrap_or("#333333"),
        )
        .with_style("color", text_color)
        .with_style(
            "padding",
            props
                .number_prop("padding")
                .map(px)
                .unwrap_or_else(|| "40px 16px".to_string()),
        )
        .with_style(
            "border-top",
            if props.bool_prop("borderTop").unwrap_or(false) {
                divider.clone()
            } else {
                "none".to_string()
            },
        );

    // Brand column plus one column per configured section.
    let mut columns = VNode::element("div")
        .with_style("display", "grid")
        .with_style("grid-template-columns", "repeat(auto-fit, minmax(250px, 1fr))")
        .with_style("gap", "32px")
        .with_style("margin-bottom", "32px");

    let mut brand = VNode::element("div");
    if let Some(logo) = props.str_prop("logo").filter(|s| !s.is_empty()) {
        brand = brand.with_child(
            VNode::element("img")
                .with_attr("src", logo)
                .with_attr("alt", "Logo")
                .with_style("height", "40px")
                .with_style("width", "auto")
                .with_style("margin-bottom", "16px"),
        );
    }
    if let Some(logo_text) = props.str_prop("logoText").filter(|s| !s.is_empty()) {
        brand = brand.with_child(
            VNode::element("h3")
                .with_style("font-size", "20px")
                .with_style("font-weight", "bold")
                .with_style("margin", "0 0 16px 0")
                .with_style("color", text_color)
                .with_child(VNode::text(logo_text)),
        );
    }
    brand = brand.with_child(
        VNode::element("p")
            .with_style("font-size", "14px")
            .with_style("line-height", "1.6")
            .with_style("margin", "0")
            .with_style("opacity", "0.8")
            .with_child(VNode::text(
                "Your company description or tagline goes here.",
            )),
    );
    columns = columns.with_child(brand);

    for section in props.array_prop("sections") {
        let links = section
            .get("links")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|link| {
                VNode::element("li").with_style("margin-bottom", "8px").with_child(
                    VNode::element("a")
                        .with_attr("href", item_str(link, "url").unwrap_or("#"))
                        .with_style("text-decoration", "none")
                        .with_style("color", text_color)
                        .with_style("opacity", "0.8")
                        .with_style("font-size", "14px")
                        .with_style("transition", "opacity 0.2s")
                        .with_child(VNode::text(item_str(link, "text").unwrap_or("Link"))),
                )
            })
            .collect();

        columns = columns.with_child(
            VNode::element("div")
                .with_child(
                    VNode::element("h4")
                        .with_style("font-size", "16px")
                        .with_style("font-weight", "bold")
                        .with_style("margin", "0 0 16px 0")
                        .with_style("color", text_color)
                        .with_child(VNode::text(item_str(section, "title").unwrap_or("Section"))),
                )
                .with_child(
                    VNode::element("ul")
                        .with_style("list-style", "none")
                        .with_style("margin", "0")
                        .with_style("padding", "0")
                        .with_children(links),
                ),
        );
    }
    node = node.with_child(columns);

    let social_links = props.array_prop("socialLinks");
    if !social_links.is_empty() {
        let badges = social_links
            .iter()
            .map(|social| {
                VNode::element("a")
                    .with_attr("href", item_str(social, "url").unwrap_or("#"))
                    .with_style("width", "40px")
                    .with_style("height", "40px")
                    .with_style("background-color", "rgba(255,255,255,0.1)")
                    .with_style("border-radius", "50%")
                    .with_style("display", "flex")
                    .with_style("align-items", "center")
                    .with_style("justify-content", "center")
                    .with_style("text-decoration", "none")
                    .with_style("color", text_color)
                    .with_style("transition", "background-color 0.2s")
                    .with_child(VNode::text(item_str(social, "icon").unwrap_or("🔗")))
            })
            .collect();

        node = node.with_child(
            VNode::element("div")
                .with_style("border-top", divider.clone())
                .with_style("padding-top", "24px")
                .with_style("margin-bottom", "24px")
                .with_child(
                    VNode::element("h4")
                        .with_style("font-size", "16px")
                        .with_style("font-weight", "bold")
                        .with_style("margin", "0 0 16px 0")
                        .with_style("color", text_color)
                        .with_child(VNode::text("Follow Us")),
                )
                .with_child(
                    VNode::element("div")
                        .with_style("display", "flex")
                        .with_style("gap", "16px")
                        .with_children(badges),
                ),
        );
    }

    node.with_child(
        VNode::element("div")
            .with_style("border-top", divider)
            .with_style("padding-top", "24px")
            .with_style("text-align", "center")
            .with_child(
                VNode::element("p")
                    .with_style("font-size", "14px")
                    .with_style("margin", "0")
                    .with_style("opacity", "0.8")
                    .with_child(VNode::text(
                        props.str_or("copyrightText", "© My Company. All rights reserved."),
                    )),
            ),
    )
}

fn divider(props: &Props) -> VNode {
    let thickness = props.number_prop("thickness").unwrap_or(1.0);
    let color = props.str_prop("color").unwrap_or("#000");

    VNode::element("hr")
        .with_styles(derive_box_style(props))
        .with_style("border", "none")
        .with_style(
            "border-bottom",
            format!("{}px solid {}", fmt_number(thickness), color),
        )
}

fn spacer(props: &Props) -> VNode {
    let size = props.number_prop("size").unwrap_or(16.0);

    VNode::element("div")
        .with_styles(derive_box_style(props))
        .with_style("height", px(size))
}
