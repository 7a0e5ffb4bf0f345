//! # Persistence Synchronizer
//!
//! Reconciles the in-memory [`PageStore`] with a remote collection store
//! under optimistic local mutation.
//!
//! ## State machine
//!
//! Each synchronization request drives one explicit phase transition:
//!
//! ```text
//! Idle → Pending → Fulfilled
//!                → Rejected(message)
//! ```
//!
//! `loading` and `error` are derived views of the phase, not separate
//! flags, so tests assert on transitions directly.
//!
//! ## Optimistic mutation
//!
//! Mutations apply to the local collection first and the full collection
//! is then written through. A failed save leaves the optimistic local
//! state in place (no automatic rollback) and the failure is observable
//! only through the phase. A successful save installs the collection the
//! remote echoes back: the remote is authoritative for the canonical
//! stored shape, not the locally-sent value.
//!
//! ## Ordering
//!
//! `save_all` snapshots the collection at dispatch. Mutations issued
//! after dispatch but before resolution are not part of that payload;
//! the editor re-publishes on every edit commit, which is the documented
//! answer to that race. One outstanding request is modeled per instance;
//! concurrent writers to the shared remote resource resolve last-write-
//! wins, an accepted limitation of the replace-all contract.

use crate::error::{RemoteError, StoreError};
use crate::store::PageStore;
use async_trait::async_trait;
use pagecraft_document::PageDocument;
use tracing::{debug, info, warn};

/// Synchronization request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(String),
}

impl SyncPhase {
    pub fn loading(&self) -> bool {
        matches!(self, SyncPhase::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SyncPhase::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

/// The remote collection store: fetch-all / replace-all, nothing finer.
///
/// `replace` echoes the collection as stored; the echo is what the
/// synchronizer installs locally on success.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PageDocument>, RemoteError>;

    async fn replace(&self, pages: Vec<PageDocument>)
        -> Result<Vec<PageDocument>, RemoteError>;
}

/// Owns the collection and keeps it consistent with a remote backend.
#[derive(Debug)]
pub struct Synchronizer<R> {
    store: PageStore,
    remote: R,
    phase: SyncPhase,
}

impl<R: RemoteCollection> Synchronizer<R> {
    pub fn new(remote: R) -> Self {
        Self {
            store: PageStore::new(),
            remote,
            phase: SyncPhase::Idle,
        }
    }

    pub fn with_store(store: PageStore, remote: R) -> Self {
        Self {
            store,
            remote,
            phase: SyncPhase::Idle,
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn phase(&self) -> &SyncPhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.phase.error()
    }

    /// Replace the local collection with the remote one. On failure the
    /// local collection is left untouched.
    pub async fn fetch_all(&mut self) {
        self.phase = SyncPhase::Pending;

        match self.remote.fetch().await {
            Ok(pages) => {
                info!(pages = pages.len(), "Fetched remote collection");
                self.store.replace_all(pages);
                self.phase = SyncPhase::Fulfilled;
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed, keeping local collection");
                self.phase = SyncPhase::Rejected(e.to_string());
            }
        }
    }

    /// Write the full collection through and install the remote's echo.
    /// On failure the optimistic local state stays as-is.
    pub async fn save_all(&mut self) {
        self.phase = SyncPhase::Pending;

        // Snapshot at dispatch: later mutations wait for the next save.
        let payload = self.store.snapshot();
        debug!(pages = payload.len(), "Dispatching collection save");

        match self.remote.replace(payload).await {
            Ok(echoed) => {
                info!(pages = echoed.len(), "Collection saved");
                self.store.replace_all(echoed);
                self.phase = SyncPhase::Fulfilled;
            }
            Err(e) => {
                warn!(error = %e, "Save failed, keeping optimistic local state");
                self.phase = SyncPhase::Rejected(e.to_string());
            }
        }
    }

    /// Append a page, then write through.
    pub async fn create(&mut self, page: PageDocument) -> Result<(), StoreError> {
        self.store.create(page)?;
        self.save_all().await;
        Ok(())
    }

    /// Replace a page wholesale, then write through.
    pub async fn update(&mut self, page: PageDocument) -> Result<(), StoreError> {
        self.store.update(page)?;
        self.save_all().await;
        Ok(())
    }

    /// Update the page if it exists, create it otherwise, then write
    /// through. The editor publish path: the same commit serves both a
    /// first publish and every later one.
    pub async fn upsert(&mut self, page: PageDocument) {
        if self.store.contains(&page.id) {
            // A present id can't be NotFound; a missing one can't collide.
            let _ = self.store.update(page);
        } else {
            let _ = self.store.create(page);
        }
        self.save_all().await;
    }

    /// Delete a page, then write through. Deleting an absent id changes
    /// nothing and dispatches nothing.
    pub async fn delete(&mut self, id: &str) -> bool {
        let removed = self.store.delete(id);
        if removed {
            self.save_all().await;
        }
        removed
    }

    /// Duplicate a page, then write through. Returns the copy.
    pub async fn duplicate(&mut self, id: &str) -> Result<PageDocument, StoreError> {
        let copy = self.store.duplicate(id)?;
        self.save_all().await;
        Ok(copy)
    }
}
