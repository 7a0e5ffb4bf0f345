use crate::node::ComponentTree;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh page id.
pub fn new_page_id() -> String {
    Uuid::new_v4().to_string()
}

/// One page in the collection.
///
/// `id` is assigned at creation and immutable afterwards; `name` is a
/// user-facing label with no uniqueness constraint. `content` is `None`
/// until the editor first publishes the page, which is distinct from an
/// empty tree (a published page with every component removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ComponentTree>,
}

impl PageDocument {
    /// New unsaved page with a generated id and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_page_id(),
            name: name.into(),
            content: None,
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: ComponentTree) -> Self {
        self.content = Some(content);
        self
    }
}
