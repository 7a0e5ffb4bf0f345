//! In-memory page collection.
//!
//! The single source of truth for the editor and the renderer: an ordered
//! sequence of [`PageDocument`]s with synchronous CRUD. Persistence is
//! layered on top (the synchronizer for remote mode, [`crate::LocalStore`]
//! for the file-backed mode); the collection itself never does I/O and is
//! a well-formed `Vec<PageDocument>` after every operation, whatever the
//! caller interleaving.

use crate::error::StoreError;
use pagecraft_document::{new_page_id, PageDocument};

#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: Vec<PageDocument>,
}

impl PageStore {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    pub fn from_pages(pages: Vec<PageDocument>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageDocument] {
        &self.pages
    }

    /// Owned copy of the collection, e.g. a save payload.
    pub fn snapshot(&self) -> Vec<PageDocument> {
        self.pages.clone()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.iter().any(|p| p.id == id)
    }

    /// Append a new page. Ids are unique within the collection; a
    /// collision is reported, never auto-renamed.
    pub fn create(&mut self, page: PageDocument) -> Result<(), StoreError> {
        if self.contains(&page.id) {
            return Err(StoreError::DuplicateId { id: page.id });
        }
        self.pages.push(page);
        Ok(())
    }

    pub fn read(&self, id: &str) -> Option<&PageDocument> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Whole-document replacement: the caller supplies the complete
    /// desired document, unchanged fields included. No field-level merge.
    pub fn update(&mut self, page: PageDocument) -> Result<(), StoreError> {
        match self.pages.iter_mut().find(|p| p.id == page.id) {
            Some(slot) => {
                *slot = page;
                Ok(())
            }
            None => Err(StoreError::NotFound { id: page.id }),
        }
    }

    /// Remove a page and its entire subtree. Deleting an absent id is a
    /// no-op, not an error; returns whether the collection changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| p.id != id);
        self.pages.len() != before
    }

    /// Deep-copy a page under a fresh id and a derived name, append it,
    /// and return the copy. The copy is fully independent of the original.
    pub fn duplicate(&mut self, id: &str) -> Result<PageDocument, StoreError> {
        let original = self
            .read(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let mut copy = original.clone();
        copy.id = new_page_id();
        copy.name = format!("{} (Copy)", copy.name);

        self.pages.push(copy.clone());
        Ok(copy)
    }

    /// Replace the whole collection, e.g. with a fetched or echoed one.
    pub fn replace_all(&mut self, pages: Vec<PageDocument>) {
        self.pages = pages;
    }
}
