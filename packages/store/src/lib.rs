//! # Pagecraft Store
//!
//! The page collection and its persistence.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ PageStore: in-memory ordered collection     │
//! │  - create / read / update / delete /        │
//! │    duplicate, synchronous                   │
//! └─────────────────────────────────────────────┘
//!            ↓ remote mode          ↓ local mode
//! ┌──────────────────────────┐ ┌──────────────────────┐
//! │ Synchronizer             │ │ LocalStore           │
//! │  - optimistic mutation   │ │  - fixed-key JSON    │
//! │  - full write-through    │ │    file              │
//! │  - Idle/Pending/         │ │  - synchronous       │
//! │    Fulfilled/Rejected    │ │    write-through     │
//! └──────────────────────────┘ └──────────────────────┘
//!            ↓
//! ┌──────────────────────────┐
//! │ RemoteCollection backend │
//! │  - HttpRemote (GET/PUT)  │
//! └──────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The store is the source of truth** for the editor and renderer;
//!    remote state only replaces it through `fetch_all` or a save echo.
//! 2. **Optimistic clients**: mutations land locally first; a failed save
//!    keeps them and reports through the phase.
//! 3. **Remote authority on shape**: a successful save installs the
//!    echoed collection, not the locally-sent one.

mod error;
mod local;
mod remote;
mod session;
mod store;
mod sync;

#[cfg(test)]
mod tests_sync;

pub use error::{LocalError, RemoteError, StoreError};
pub use local::LocalStore;
pub use remote::{HttpRemote, RemoteConfig, ACCESS_KEY_HEADER};
pub use session::EditSession;
pub use store::PageStore;
pub use sync::{RemoteCollection, SyncPhase, Synchronizer};

// Re-export the model types the store API speaks in.
pub use pagecraft_document::{ComponentNode, ComponentTree, PageDocument};
