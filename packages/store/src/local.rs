//! Local-file deployment mode.
//!
//! Instead of the remote endpoint, the collection lives in one JSON file
//! under a fixed name in a caller-supplied directory. Reads happen once
//! at open; every mutation writes the whole collection back synchronously.
//! There is no loading or error phase in this mode; failures come back
//! directly from the mutating call.

use crate::error::LocalError;
use crate::store::PageStore;
use pagecraft_document::PageDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fixed key the collection is stored under.
const STORAGE_KEY: &str = "pages.json";

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    store: PageStore,
}

impl LocalStore {
    /// Open the collection stored in `dir`. A missing file is a first
    /// run; an unreadable or malformed one falls back to an empty
    /// collection rather than blocking startup.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(STORAGE_KEY);

        let store = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Vec<PageDocument>>(&data) {
                Ok(pages) => PageStore::from_pages(pages),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Stored collection is malformed, starting empty");
                    PageStore::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => PageStore::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Stored collection is unreadable, starting empty");
                PageStore::new()
            }
        };

        Self { path, store }
    }

    pub fn pages(&self) -> &[PageDocument] {
        self.store.pages()
    }

    pub fn read(&self, id: &str) -> Option<&PageDocument> {
        self.store.read(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn create(&mut self, page: PageDocument) -> Result<(), LocalError> {
        self.store.create(page)?;
        self.write_through()
    }

    pub fn update(&mut self, page: PageDocument) -> Result<(), LocalError> {
        self.store.update(page)?;
        self.write_through()
    }

    pub fn delete(&mut self, id: &str) -> Result<bool, LocalError> {
        let removed = self.store.delete(id);
        if removed {
            self.write_through()?;
        }
        Ok(removed)
    }

    pub fn duplicate(&mut self, id: &str) -> Result<PageDocument, LocalError> {
        let copy = self.store.duplicate(id)?;
        self.write_through()?;
        Ok(copy)
    }

    fn write_through(&self) -> Result<(), LocalError> {
        let data = serde_json::to_string_pretty(self.store.pages())?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
