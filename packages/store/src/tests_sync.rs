/// Tests for the synchronizer state machine: optimistic mutation,
/// write-through, echo authority, and failure transitions.
use crate::error::RemoteError;
use crate::session::EditSession;
use crate::sync::{RemoteCollection, SyncPhase, Synchronizer};
use async_trait::async_trait;
use pagecraft_document::{ComponentNode, ComponentTree, PageDocument};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory stand-in for the remote collection endpoint.
#[derive(Default)]
struct MockRemote {
    stored: Mutex<Vec<PageDocument>>,
    fail_fetch: AtomicBool,
    fail_replace: AtomicBool,
    replace_calls: AtomicUsize,
}

impl MockRemote {
    fn with_pages(pages: Vec<PageDocument>) -> Self {
        Self {
            stored: Mutex::new(pages),
            ..Default::default()
        }
    }

    fn stored(&self) -> Vec<PageDocument> {
        self.stored.lock().unwrap().clone()
    }

    fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCollection for MockRemote {
    async fn fetch(&self) -> Result<Vec<PageDocument>, RemoteError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(RemoteError::Status { status: 503 });
        }
        Ok(self.stored())
    }

    async fn replace(
        &self,
        pages: Vec<PageDocument>,
    ) -> Result<Vec<PageDocument>, RemoteError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_replace.load(Ordering::SeqCst) {
            return Err(RemoteError::Status { status: 503 });
        }
        *self.stored.lock().unwrap() = pages.clone();
        Ok(pages)
    }
}

/// A remote that canonicalizes what it stores: names come back trimmed.
/// Exercises "the echo is authoritative, not the locally-sent value".
#[derive(Default)]
struct CanonicalizingRemote;

#[async_trait]
impl RemoteCollection for CanonicalizingRemote {
    async fn fetch(&self) -> Result<Vec<PageDocument>, RemoteError> {
        Ok(Vec::new())
    }

    async fn replace(
        &self,
        mut pages: Vec<PageDocument>,
    ) -> Result<Vec<PageDocument>, RemoteError> {
        for page in &mut pages {
            page.name = page.name.trim().to_string();
        }
        Ok(pages)
    }
}

fn sample(id: &str, name: &str) -> PageDocument {
    PageDocument::with_id(id, name)
}

#[test]
fn test_new_synchronizer_is_idle() {
    let sync = Synchronizer::new(MockRemote::default());

    assert_eq!(sync.phase(), &SyncPhase::Idle);
    assert!(!sync.loading());
    assert!(sync.error().is_none());
    assert!(sync.store().is_empty());
}

#[tokio::test]
async fn test_fetch_all_replaces_the_collection() {
    let remote = MockRemote::with_pages(vec![sample("r1", "Remote Home")]);
    let mut sync = Synchronizer::new(remote);

    sync.fetch_all().await;

    assert_eq!(sync.phase(), &SyncPhase::Fulfilled);
    assert!(!sync.loading());
    assert_eq!(sync.store().len(), 1);
    assert_eq!(sync.store().read("r1").unwrap().name, "Remote Home");
}

#[tokio::test]
async fn test_fetch_failure_keeps_local_collection() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.create(sample("p1", "Home")).await.unwrap();

    sync.remote().fail_fetch.store(true, Ordering::SeqCst);
    sync.fetch_all().await;

    // Local pages intact, failure observable, request settled.
    assert_eq!(sync.store().len(), 1);
    assert!(sync.store().contains("p1"));
    assert!(!sync.error().unwrap().is_empty());
    assert!(!sync.loading());
}

#[tokio::test]
async fn test_create_writes_the_full_collection_through() {
    let mut sync = Synchronizer::new(MockRemote::default());

    sync.create(sample("p1", "Home")).await.unwrap();
    sync.create(sample("p2", "About")).await.unwrap();

    assert_eq!(sync.phase(), &SyncPhase::Fulfilled);
    assert_eq!(sync.remote().replace_calls(), 2);
    assert_eq!(sync.remote().stored(), sync.store().snapshot());
}

#[tokio::test]
async fn test_duplicate_id_is_reported_and_nothing_is_dispatched() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.create(sample("p1", "Home")).await.unwrap();

    let err = sync.create(sample("p1", "Other")).await.unwrap_err();

    assert_eq!(err.to_string(), "page 'p1' already exists");
    assert_eq!(sync.remote().replace_calls(), 1);
    assert_eq!(sync.store().len(), 1);
}

#[tokio::test]
async fn test_save_failure_keeps_the_optimistic_mutation() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.remote().fail_replace.store(true, Ordering::SeqCst);

    sync.create(sample("p1", "Home")).await.unwrap();

    // The local mutation stands, the failure lives in the phase, and the
    // remote never saw the page.
    assert!(sync.store().contains("p1"));
    assert!(matches!(sync.phase(), SyncPhase::Rejected(_)));
    assert!(sync.remote().stored().is_empty());

    // Retry by re-issuing: same call, now succeeding.
    sync.remote().fail_replace.store(false, Ordering::SeqCst);
    sync.save_all().await;
    assert_eq!(sync.phase(), &SyncPhase::Fulfilled);
    assert_eq!(sync.remote().stored().len(), 1);
}

#[tokio::test]
async fn test_save_echo_is_authoritative() {
    let mut sync = Synchronizer::new(CanonicalizingRemote);

    sync.create(sample("p1", "  Home  ")).await.unwrap();

    assert_eq!(sync.store().read("p1").unwrap().name, "Home");
}

#[tokio::test]
async fn test_saving_a_saved_collection_is_idempotent() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.create(sample("p1", "Home")).await.unwrap();
    let first = sync.remote().stored();

    sync.save_all().await;

    assert_eq!(sync.remote().stored(), first);
    assert_eq!(sync.store().snapshot(), first);
    assert_eq!(sync.phase(), &SyncPhase::Fulfilled);
}

#[tokio::test]
async fn test_noop_delete_dispatches_nothing() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.create(sample("p1", "Home")).await.unwrap();

    assert!(!sync.delete("ghost").await);
    assert_eq!(sync.remote().replace_calls(), 1);

    assert!(sync.delete("p1").await);
    assert_eq!(sync.remote().replace_calls(), 2);
    assert!(sync.remote().stored().is_empty());
}

#[tokio::test]
async fn test_duplicate_persists_the_copy() {
    let mut sync = Synchronizer::new(MockRemote::default());
    sync.create(sample("p1", "Home")).await.unwrap();

    let copy = sync.duplicate("p1").await.unwrap();

    assert_eq!(copy.name, "Home (Copy)");
    let stored = sync.remote().stored();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|p| p.id == copy.id));
}

#[tokio::test]
async fn test_upsert_creates_then_updates() {
    let mut sync = Synchronizer::new(MockRemote::default());

    sync.upsert(sample("p1", "Home")).await;
    assert_eq!(sync.store().len(), 1);

    sync.upsert(sample("p1", "Home v2")).await;
    assert_eq!(sync.store().len(), 1);
    assert_eq!(sync.store().read("p1").unwrap().name, "Home v2");
    assert_eq!(sync.remote().replace_calls(), 2);
}

#[tokio::test]
async fn test_edit_session_publish_commits_and_clears_dirty() {
    let mut sync = Synchronizer::new(MockRemote::default());

    let mut session = EditSession::create("Landing");
    assert!(session.is_dirty());

    session.set_content(
        ComponentTree::new().with_node(ComponentNode::new("Heading").with_prop("children", "Hi")),
    );
    session.publish(&mut sync).await;

    assert!(!session.is_dirty());
    let stored = sync.store().read(&session.page().id).unwrap();
    assert_eq!(stored.name, "Landing");
    assert_eq!(stored.content.as_ref().unwrap().nodes[0].component, "Heading");

    // A second publish of further edits updates in place.
    session.set_content(ComponentTree::new());
    session.publish(&mut sync).await;
    assert_eq!(sync.store().len(), 1);
    assert!(sync
        .store()
        .read(&session.page().id)
        .unwrap()
        .content
        .as_ref()
        .unwrap()
        .is_empty());
}
