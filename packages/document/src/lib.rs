//! # Pagecraft Document Model
//!
//! The page-document data model shared by every other package.
//!
//! A [`PageDocument`] is one page composed in the visual editor: an id, a
//! user-facing name, and an optional [`ComponentTree`] of placed
//! components. The tree is the wire format of the remote collection
//! endpoint and of the local file store, so everything here serializes
//! with serde.
//!
//! ## Ownership
//!
//! A [`ComponentNode`] owns its slot children exclusively; there are no
//! cross-node references, so the tree is acyclic by construction and
//! `Clone` is a deep copy. Duplicating a subtree is `node.clone()`.

mod node;
mod page;

pub use node::{ComponentNode, ComponentTree, Props};
pub use page::{new_page_id, PageDocument};
