//! # Pagecraft Renderer
//!
//! Turns page documents into virtual visual trees.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: PageDocument / ComponentTree      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ registry: type name → schema                │
//! │  - editable fields per component            │
//! │  - default props for new nodes              │
//! │  - render dispatch (exhaustive variant)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: tree walk → VisualDocument        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The registry is the only place that knows what a component type means.
//! The renderer resolves props (defaults ⊕ node values), renders slot
//! subtrees, and dispatches; it special-cases nothing per type.

pub mod components;
pub mod props;
pub mod registry;
pub mod renderer;
pub mod style;
pub mod vdom;


#[cfg(test)]
mod tests_renderer;

#[cfg(test)]
mod tests_style;

pub use components::RenderedSlots;
pub use props::PropsExt;
pub use registry::{ComponentKind, ComponentSchema, Field, FieldKind, Registry, SelectOption};
pub use renderer::{render_document, render_node, RenderError, RenderResult};
pub use style::{derive_box_style, fmt_number};
pub use vdom::{VNode, VisualDocument};

// Re-export the model types most callers need alongside the renderer.
pub use pagecraft_document::{ComponentNode, ComponentTree, PageDocument, Props};
