//! # Page Renderer
//!
//! Walks a page document's component tree and produces a [`VisualDocument`]
//! through the registry's render dispatch.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Rendering is fully deterministic.**
//!
//! For any `PageDocument` + `Registry`, `render_document()` MUST produce
//! identical output on every invocation:
//!
//! - Same tree → same `VisualDocument`, byte-for-byte once serialized
//! - Attribute and style maps are ordered (`BTreeMap`), so no iteration
//!   order leaks into output
//! - No time/random/environment dependence in any render function
//!
//! The same document is rendered in the editable preview and in the
//! visitor-facing page; determinism is what makes the two identical.
//!
//! ## Error Boundaries
//!
//! A component type missing from the registry is FATAL for the render
//! call, never skipped or substituted: a stored tree referencing a type
//! the registry no longer defines is a data-integrity signal, and a page
//! silently missing a section would paper over it. A page with no content
//! at all is not an error; it renders as an empty document.

use crate::components::RenderedSlots;
use crate::registry::Registry;
use crate::vdom::{VNode, VisualDocument};
use pagecraft_document::{ComponentNode, PageDocument, Props};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Component type '{name}' is not registered")]
    UnknownComponentType { name: String },
}

/// Render a whole page.
#[instrument(skip(document, registry), fields(page_id = %document.id))]
pub fn render_document(
    document: &PageDocument,
    registry: &Registry,
) -> RenderResult<VisualDocument> {
    let mut output = VisualDocument::new();

    let Some(tree) = &document.content else {
        debug!("Page has no content yet, rendering empty document");
        return Ok(output);
    };

    for node in &tree.nodes {
        output.add_node(render_node(node, registry)?);
    }

    info!(nodes = output.nodes.len(), "Page render complete");
    Ok(output)
}

/// Render one component node and its slot subtrees.
///
/// Effective props are the type's defaults overridden per key by the
/// node's own values; keys the schema never declared ride along in the
/// node but take no part in rendering.
pub fn render_node(node: &ComponentNode, registry: &Registry) -> RenderResult<VNode> {
    let schema =
        registry
            .lookup(&node.component)
            .ok_or_else(|| RenderError::UnknownComponentType {
                name: node.component.clone(),
            })?;

    let mut effective: Props = schema.default_props.clone();
    for (key, value) in &node.props {
        effective.insert(key.clone(), value.clone());
    }

    // Only declared slots are rendered; a declared slot with no stored
    // children renders empty.
    let mut slots = RenderedSlots::new();
    for name in schema.slot_names() {
        let children = node
            .slot(name)
            .iter()
            .map(|child| render_node(child, registry))
            .collect::<RenderResult<Vec<_>>>()?;
        slots.insert(name.to_string(), children);
    }

    debug!(component = %node.component, "Rendering node");
    Ok(schema.kind.render(&effective, &slots))
}
