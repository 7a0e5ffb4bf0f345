//! # Component Registry
//!
//! The static catalog of component types: what fields each type exposes to
//! the editor, what configuration a freshly placed node starts with, and
//! which render variant it dispatches to.
//!
//! The registry is populated once by [`Registry::standard`] and read-only
//! afterwards. Field descriptors are declarative metadata only: nothing
//! outside a component's own registry entry and render function may
//! special-case a component type, so adding a type touches this module and
//! `components.rs` and nothing else.

use pagecraft_document::Props;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// One choice in a select or radio field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

/// Editing affordance for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line string, used verbatim at render time.
    Text,
    /// Paragraph string.
    MultilineText,
    /// Numeric, may be absent; absent means the component's own fallback.
    Number,
    /// One of an enumerated option list.
    Select { options: Vec<SelectOption> },
    /// Small exclusive choice, typically a boolean toggle.
    Radio { options: Vec<SelectOption> },
    /// Ordered list of sub-field groups, iterated into repeated output.
    /// Indexes are stable within one render pass only, not across edits.
    Array { item_fields: Vec<Field> },
    /// Caller-supplied editor widget; the value is any JSON-serializable
    /// shape and passes through to render unchanged.
    Custom,
    /// Ordered child component list, rendered recursively by the renderer.
    Slot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The known component types. Render dispatch is an exhaustive match in
/// `components.rs`, never string-keyed reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Heading,
    Paragraph,
    Image,
    Button,
    List,
    Card,
    LogoCard,
    Flex,
    Grid,
    Header,
    Footer,
    Divider,
    Spacer,
}

/// Registry entry for one component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSchema {
    pub kind: ComponentKind,
    pub fields: Vec<Field>,
    pub default_props: Props,
}

impl ComponentSchema {
    /// Names of the declared slot fields, in field order.
    pub fn slot_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Slot))
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Static mapping from component-type name to schema.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, ComponentSchema>,
}

impl Registry {
    pub fn lookup(&self, type_name: &str) -> Option<&ComponentSchema> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The standard component palette.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();

        entries.insert(
            "Heading".to_string(),
            ComponentSchema {
                kind: ComponentKind::Heading,
                fields: with_box_fields(vec![
                    field("children", "Text", FieldKind::Text),
                    field("color", "Text Color", FieldKind::Text),
                    field("fontSize", "Font Size (px)", FieldKind::Number),
                ]),
                default_props: props(json!({
                    "children": "Heading Text",
                    "color": "#000000",
                    "fontSize": 24,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Paragraph".to_string(),
            ComponentSchema {
                kind: ComponentKind::Paragraph,
                fields: with_box_fields(vec![
                    field("children", "Text", FieldKind::MultilineText),
                    field("color", "Text Color", FieldKind::Text),
                    field("fontSize", "Font Size (px)", FieldKind::Number),
                ]),
                default_props: props(json!({
                    "children": "Paragraph text",
                    "color": "#000000",
                    "fontSize": 16,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Image".to_string(),
            ComponentSchema {
                kind: ComponentKind::Image,
                fields: with_box_fields(vec![
                    field("src", "Image URL or Upload", FieldKind::Custom),
                    field("alt", "Alt Text", FieldKind::Text),
                    field("height", "Height (px)", FieldKind::Number),
                    field(
                        "objectFit",
                        "Object Fit",
                        FieldKind::Select {
                            options: vec![
                                option("Fill", "fill"),
                                option("Contain", "contain"),
                                option("Cover", "cover"),
                                option("None", "none"),
                                option("Scale Down", "scale-down"),
                            ],
                        },
                    ),
                    field("objectPosition", "Object Position", FieldKind::Text),
                ]),
                default_props: props(json!({
                    "src": "",
                    "alt": "Image",
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Button".to_string(),
            ComponentSchema {
                kind: ComponentKind::Button,
                fields: with_box_fields(vec![
                    field("children", "Button Text", FieldKind::Text),
                    field("href", "URL", FieldKind::Text),
                    field("backgroundColor", "Background Color", FieldKind::Text),
                    field("color", "Text Color", FieldKind::Text),
                ]),
                default_props: props(json!({
                    "children": "Click Me",
                    "href": "#",
                    "backgroundColor": "#007bff",
                    "color": "#ffffff",
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "List".to_string(),
            ComponentSchema {
                kind: ComponentKind::List,
                fields: with_box_fields(vec![
                    field(
                        "ordered",
                        "List Type",
                        FieldKind::Radio {
                            options: vec![option("Unordered", false), option("Ordered", true)],
                        },
                    ),
                    field(
                        "items",
                        "Items",
                        FieldKind::Array {
                            item_fields: vec![field("text", "Item Text", FieldKind::Text)],
                        },
                    ),
                ]),
                default_props: props(json!({
                    "ordered": false,
                    "items": [{ "text": "Item 1" }, { "text": "Item 2" }],
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Card".to_string(),
            ComponentSchema {
                kind: ComponentKind::Card,
                fields: with_box_fields(vec![
                    field("backgroundColor", "Background Color", FieldKind::Text),
                    field("borderColor", "Border Color", FieldKind::Text),
                    field("shadow", "Add Shadow", yes_no()),
                    field("content", "Content", FieldKind::Slot),
                ]),
                default_props: props(json!({
                    "backgroundColor": "#f9f9f9",
                    "borderColor": "#ddd",
                    "shadow": true,
                    "borderRadius": 8,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "LogoCard".to_string(),
            ComponentSchema {
                kind: ComponentKind::LogoCard,
                fields: with_box_fields(vec![
                    field("logo", "Logo Image URL", FieldKind::Custom),
                    field("title", "Title", FieldKind::Text),
                    field("description", "Description", FieldKind::MultilineText),
                    field("backgroundColor", "Background Color", FieldKind::Text),
                    field("borderColor", "Border Color", FieldKind::Text),
                    field("shadow", "Add Shadow", yes_no()),
                    field(
                        "flexDirection",
                        "Layout Direction",
                        FieldKind::Radio {
                            options: vec![option("Row", "row"), option("Column", "column")],
                        },
                    ),
                    field("alignItems", "Align Items", align_items_select()),
                    field("justifyContent", "Justify Content", justify_select()),
                    field("logoSize", "Logo Size (px)", FieldKind::Number),
                ]),
                default_props: props(json!({
                    "title": "Card Title",
                    "description": "This is a description for the card. You can customize this text.",
                    "backgroundColor": "#ffffff",
                    "borderColor": "#e5e5e5",
                    "shadow": true,
                    "flexDirection": "row",
                    "alignItems": "center",
                    "justifyContent": "flex-start",
                    "logoSize": 60,
                    "borderRadius": 8,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Flex".to_string(),
            ComponentSchema {
                kind: ComponentKind::Flex,
                fields: with_box_fields(vec![
                    field(
                        "direction",
                        "Direction",
                        FieldKind::Radio {
                            options: vec![option("Row", "row"), option("Column", "column")],
                        },
                    ),
                    field("align", "Align Items", align_items_select()),
                    field("justify", "Justify Content", justify_select()),
                    field("gap", "Gap (px)", FieldKind::Number),
                    field("content", "Flex Content", FieldKind::Slot),
                ]),
                default_props: props(json!({
                    "direction": "row",
                    "align": "stretch",
                    "justify": "flex-start",
                    "gap": 0,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Grid".to_string(),
            ComponentSchema {
                kind: ComponentKind::Grid,
                fields: with_box_fields(vec![
                    field("columns", "Columns", FieldKind::Number),
                    field("gap", "Gap (px)", FieldKind::Number),
                    field("content", "Grid Content", FieldKind::Slot),
                ]),
                default_props: props(json!({
                    "columns": 2,
                    "gap": 16,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Header".to_string(),
            ComponentSchema {
                kind: ComponentKind::Header,
                fields: with_box_fields(vec![
                    field("logo", "Logo Image URL", FieldKind::Custom),
                    field("logoText", "Logo Text", FieldKind::Text),
                    field(
                        "navLinks",
                        "Navigation Links",
                        FieldKind::Array {
                            item_fields: vec![
                                field("text", "Link Text", FieldKind::Text),
                                field("url", "Link URL", FieldKind::Text),
                            ],
                        },
                    ),
                    field("backgroundColor", "Background Color", FieldKind::Text),
                    field("textColor", "Text Color", FieldKind::Text),
                    field("padding", "Padding (px)", FieldKind::Number),
                    field("shadow", "Add Shadow", yes_no()),
                    field("sticky", "Sticky Header", yes_no()),
                ]),
                default_props: props(json!({
                    "logoText": "My Website",
                    "navLinks": [
                        { "text": "Home", "url": "#" },
                        { "text": "About", "url": "#" },
                        { "text": "Services", "url": "#" },
                        { "text": "Contact", "url": "#" }
                    ],
                    "backgroundColor": "#ffffff",
                    "textColor": "#000000",
                    "padding": 16,
                    "shadow": true,
                    "sticky": false,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Footer".to_string(),
            ComponentSchema {
                kind: ComponentKind::Footer,
                fields: with_box_fields(vec![
                    field("logo", "Logo Image URL", FieldKind::Custom),
                    field("logoText", "Logo Text", FieldKind::Text),
                    field(
                        "sections",
                        "Footer Sections",
                        FieldKind::Array {
                            item_fields: vec![
                                field("title", "Section Title", FieldKind::Text),
                                field(
                                    "links",
                                    "Section Links",
                                    FieldKind::Array {
                                        item_fields: vec![
                                            field("text", "Link Text", FieldKind::Text),
                                            field("url", "Link URL", FieldKind::Text),
                                        ],
                                    },
                                ),
                            ],
                        },
                    ),
                    field(
                        "socialLinks",
                        "Social Media Links",
                        FieldKind::Array {
                            item_fields: vec![
                                field("icon", "Icon (emoji or text)", FieldKind::Text),
                                field("url", "Social Media URL", FieldKind::Text),
                            ],
                        },
                    ),
                    field("backgroundColor", "Background Color", FieldKind::Text),
                    field("textColor", "Text Color", FieldKind::Text),
                    field("padding", "Padding (px)", FieldKind::Number),
                    field("borderTop", "Show Top Border", yes_no()),
                    field("borderColor", "Border Color", FieldKind::Text),
                    field("copyrightText", "Copyright Text", FieldKind::Text),
                ]),
                default_props: props(json!({
                    "logoText": "My Company",
                    "sections": [
                        {
                            "title": "Quick Links",
                            "links": [
                                { "text": "Home", "url": "#" },
                                { "text": "About", "url": "#" },
                                { "text": "Services", "url": "#" },
                                { "text": "Contact", "url": "#" }
                            ]
                        },
                        {
                            "title": "Services",
                            "links": [
                                { "text": "Web Design", "url": "#" },
                                { "text": "Development", "url": "#" },
                                { "text": "Marketing", "url": "#" },
                                { "text": "Consulting", "url": "#" }
                            ]
                        }
                    ],
                    "socialLinks": [
                        { "icon": "📘", "url": "#" },
                        { "icon": "🐦", "url": "#" },
                        { "icon": "📷", "url": "#" },
                        { "icon": "💼", "url": "#" }
                    ],
                    "backgroundColor": "#333333",
                    "textColor": "#ffffff",
                    "padding": 40,
                    "borderTop": true,
                    "borderColor": "#555555",
                    "copyrightText": "",
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Divider".to_string(),
            ComponentSchema {
                kind: ComponentKind::Divider,
                fields: with_box_fields(vec![
                    field("color", "Color", FieldKind::Text),
                    field("thickness", "Thickness (px)", FieldKind::Number),
                ]),
                default_props: props(json!({
                    "color": "#000",
                    "thickness": 1,
                    "widthUnit": "%"
                })),
            },
        );

        entries.insert(
            "Spacer".to_string(),
            ComponentSchema {
                kind: ComponentKind::Spacer,
                fields: with_box_fields(vec![field("size", "Height (px)", FieldKind::Number)]),
                default_props: props(json!({
                    "size": 16,
                    "widthUnit": "%"
                })),
            },
        );

        Self { entries }
    }
}

fn field(name: &str, label: &str, kind: FieldKind) -> Field {
    Field {
        name: name.to_string(),
        label: label.to_string(),
        kind,
    }
}

fn option(label: &str, value: impl Into<Value>) -> SelectOption {
    SelectOption {
        label: label.to_string(),
        value: value.into(),
    }
}

fn yes_no() -> FieldKind {
    FieldKind::Radio {
        options: vec![option("Yes", true), option("No", false)],
    }
}

fn align_items_select() -> FieldKind {
    FieldKind::Select {
        options: vec![
            option("Stretch", "stretch"),
            option("Start", "flex-start"),
            option("Center", "center"),
            option("End", "flex-end"),
        ],
    }
}

fn justify_select() -> FieldKind {
    FieldKind::Select {
        options: vec![
            option("Start", "flex-start"),
            option("Center", "center"),
            option("End", "flex-end"),
            option("Space Between", "space-between"),
            option("Space Around", "space-around"),
        ],
    }
}

/// Fields every component carries: the shared box-style subset.
fn with_box_fields(mut fields: Vec<Field>) -> Vec<Field> {
    fields.extend([
        field("width", "Width", FieldKind::Number),
        field(
            "widthUnit",
            "Width Unit",
            FieldKind::Select {
                options: vec![option("px", "px"), option("%", "%")],
            },
        ),
        field("padding", "Padding (px)", FieldKind::Number),
        field("margin", "Margin (px)", FieldKind::Number),
        field("borderRadius", "Border Radius (px)", FieldKind::Number),
        field(
            "textAlign",
            "Text Align",
            FieldKind::Select {
                options: vec![
                    option("Left", "left"),
                    option("Center", "center"),
                    option("Right", "right"),
                    option("Justify", "justify"),
                ],
            },
        ),
    ]);
    fields
}

fn props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}
