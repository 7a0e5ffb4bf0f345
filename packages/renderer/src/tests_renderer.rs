/// Tests for document rendering: prop resolution, slots, error surfacing,
/// and the determinism contract.
use crate::registry::Registry;
use crate::renderer::{render_document, render_node, RenderError};
use crate::vdom::VNode;
use pagecraft_document::{ComponentNode, ComponentTree, PageDocument};
use serde_json::json;

fn page(tree: ComponentTree) -> PageDocument {
    PageDocument::with_id("p1", "Home").with_content(tree)
}

#[test]
fn test_absent_content_renders_empty_page() {
    let registry = Registry::standard();
    let doc = PageDocument::with_id("p1", "Home");

    let output = render_document(&doc, &registry).unwrap();
    assert!(output.nodes.is_empty());
}

#[test]
fn test_empty_tree_renders_empty_page() {
    let registry = Registry::standard();
    let output = render_document(&page(ComponentTree::new()), &registry).unwrap();
    assert!(output.nodes.is_empty());
}

#[test]
fn test_root_nodes_render_in_order() {
    let registry = Registry::standard();
    let tree = ComponentTree::new()
        .with_node(ComponentNode::new("Header"))
        .with_node(ComponentNode::new("Heading"))
        .with_node(ComponentNode::new("Footer"));

    let output = render_document(&page(tree), &registry).unwrap();

    assert_eq!(output.nodes.len(), 3);
    assert_eq!(output.nodes[0].tag(), Some("header"));
    assert_eq!(output.nodes[1].tag(), Some("h2"));
    assert_eq!(output.nodes[2].tag(), Some("footer"));
}

#[test]
fn test_unknown_type_is_a_fatal_render_error() {
    let registry = Registry::standard();
    let tree = ComponentTree::new().with_node(ComponentNode::new("DoesNotExist"));

    let err = render_document(&page(tree), &registry).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnknownComponentType {
            name: "DoesNotExist".to_string()
        }
    );
}

#[test]
fn test_unknown_type_inside_slot_fails_the_whole_render() {
    let registry = Registry::standard();
    let tree = ComponentTree::new()
        .with_node(ComponentNode::new("Heading"))
        .with_node(
            ComponentNode::new("Card")
                .with_slot("content", vec![ComponentNode::new("RemovedWidget")]),
        );

    let err = render_document(&page(tree), &registry).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnknownComponentType {
            name: "RemovedWidget".to_string()
        }
    );
}

#[test]
fn test_undeclared_props_are_ignored_by_rendering() {
    let registry = Registry::standard();
    let plain = render_node(&ComponentNode::new("Heading"), &registry).unwrap();
    let with_extra = render_node(
        &ComponentNode::new("Heading").with_prop("legacyTheme", "dark"),
        &registry,
    )
    .unwrap();

    assert_eq!(plain, with_extra);
}

#[test]
fn test_undeclared_slot_content_is_ignored() {
    let registry = Registry::standard();
    let node = ComponentNode::new("Heading")
        .with_slot("content", vec![ComponentNode::new("Paragraph")]);

    let vnode = render_node(&node, &registry).unwrap();
    // Only the heading's own text child; the stray slot never renders.
    assert_eq!(vnode.children().len(), 1);
    assert_eq!(vnode.children()[0], VNode::text("Heading Text"));
}

#[test]
fn test_nested_slots_render_recursively() {
    let registry = Registry::standard();
    let tree = ComponentTree::new().with_node(ComponentNode::new("Card").with_slot(
        "content",
        vec![ComponentNode::new("Flex").with_slot(
            "content",
            vec![ComponentNode::new("Paragraph").with_prop("children", "deep")],
        )],
    ));

    let output = render_document(&page(tree), &registry).unwrap();

    let card = &output.nodes[0];
    let flex_wrapper = &card.children()[0];
    let flex_container = &flex_wrapper.children()[0];
    let paragraph = &flex_container.children()[0];
    assert_eq!(paragraph.tag(), Some("p"));
    assert_eq!(paragraph.children()[0], VNode::text("deep"));
}

#[test]
fn test_render_is_deterministic() {
    let registry = Registry::standard();
    let tree = ComponentTree::new()
        .with_node(ComponentNode::new("Header"))
        .with_node(
            ComponentNode::new("Card")
                .with_prop("backgroundColor", "#fafafa")
                .with_slot(
                    "content",
                    vec![
                        ComponentNode::new("Heading").with_prop("children", "Hi"),
                        ComponentNode::new("List")
                            .with_prop("items", json!([{ "text": "one" }, { "text": "two" }])),
                    ],
                ),
        )
        .with_node(ComponentNode::new("Footer"));
    let doc = page(tree);

    let first = render_document(&doc, &registry).unwrap();
    let second = render_document(&doc, &registry).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_render_does_not_mutate_the_document() {
    let registry = Registry::standard();
    let tree = ComponentTree::new()
        .with_node(ComponentNode::new("Heading").with_prop("children", "Hi"));
    let doc = page(tree);
    let before = doc.clone();

    render_document(&doc, &registry).unwrap();
    assert_eq!(doc, before);
}

#[test]
fn test_registry_declares_the_full_palette() {
    let registry = Registry::standard();

    for name in [
        "Heading", "Paragraph", "Image", "Button", "List", "Card", "LogoCard", "Flex", "Grid",
        "Header", "Footer", "Divider", "Spacer",
    ] {
        assert!(registry.contains(name), "missing registry entry: {}", name);
    }
    assert_eq!(registry.len(), 13);
}

#[test]
fn test_slot_fields_match_slot_rendering() {
    let registry = Registry::standard();

    assert_eq!(registry.lookup("Card").unwrap().slot_names(), vec!["content"]);
    assert_eq!(registry.lookup("Flex").unwrap().slot_names(), vec!["content"]);
    assert_eq!(registry.lookup("Grid").unwrap().slot_names(), vec!["content"]);
    assert!(registry.lookup("Heading").unwrap().slot_names().is_empty());
}
