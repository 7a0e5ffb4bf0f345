//! # Edit Session
//!
//! The core-side contract with the external visual editor.
//!
//! The editor owns the drag-and-drop surface; the session owns the page
//! being edited. The editor hands a fresh component tree to
//! [`EditSession::set_content`] on every change and asks for a commit via
//! [`EditSession::publish`], which upserts the page into the synchronized
//! collection and writes it through. The session accepts any tree the
//! editor produces (slot-nested, acyclic, exclusively owned) however it
//! was assembled.

use crate::sync::{RemoteCollection, Synchronizer};
use pagecraft_document::{ComponentTree, PageDocument};

#[derive(Debug, Clone)]
pub struct EditSession {
    page: PageDocument,
    dirty: bool,
}

impl EditSession {
    /// Start editing an existing page.
    pub fn new(page: PageDocument) -> Self {
        Self { page, dirty: false }
    }

    /// Start a brand-new page with a generated id. It exists only in the
    /// session until the first publish.
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            page: PageDocument::new(name),
            dirty: true,
        }
    }

    pub fn page(&self) -> &PageDocument {
        &self.page
    }

    /// Unpublished edits pending?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The editor's `onChange`: replace the working tree.
    pub fn set_content(&mut self, tree: ComponentTree) {
        self.page.content = Some(tree);
        self.dirty = true;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.page.name = name.into();
        self.dirty = true;
    }

    /// The editor's `onPublish`: commit the working page, update when
    /// the id exists, create otherwise, and write the collection
    /// through. Publishing after every edit commit is what bounds the
    /// save-dispatch race documented on the synchronizer.
    pub async fn publish<R: RemoteCollection>(&mut self, sync: &mut Synchronizer<R>) {
        sync.upsert(self.page.clone()).await;
        self.dirty = false;
    }
}
