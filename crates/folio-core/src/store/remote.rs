// ── Generic remote collection ──
//
// One fetch/loading/error/refresh state machine shared by every content
// resource. State changes are pushed to subscribers through a `watch`
// channel; each load publishes `Loading` then `Ready` or `Failed`.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::Ordered;
use crate::section::{Resource, SectionState};
use crate::stream::SyncStream;

/// Shown when a failed read carries no message of its own.
pub const LOAD_FAILED_FALLBACK: &str = "Failed to load content";

type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<T>, CoreError>> + Send + Sync>;

/// Lifecycle of a collection's most recent read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Constructed, nothing requested yet.
    #[default]
    Idle,
    /// A read is outstanding.
    Loading,
    /// The last read to resolve succeeded.
    Ready,
    /// The last read to resolve failed with this message.
    Failed(String),
}

impl SyncStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Point-in-time view of a collection: status plus the ordered items from
/// the last successful read.
pub struct SyncSnapshot<T> {
    pub status: SyncStatus,
    pub items: Arc<Vec<Arc<T>>>,
}

impl<T> SyncSnapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The single state a section view renders for this snapshot.
    pub fn section(&self) -> SectionState<'_, T> {
        SectionState::derive(&self.status, &self.items)
    }
}

impl<T> Clone for SyncSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status.clone(),
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for SyncSnapshot<T> {
    fn default() -> Self {
        Self {
            status: SyncStatus::Idle,
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T> fmt::Debug for SyncSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncSnapshot")
            .field("status", &self.status)
            .field("items", &self.items.len())
            .finish()
    }
}

/// A reactive, remotely-backed collection for a single entity type.
///
/// Overlapping loads are not de-duplicated or cancelled: whichever read
/// resolves last determines the published state.
pub struct RemoteCollection<T: Ordered + Send + Sync + 'static> {
    resource: Resource,
    fetch: Fetcher<T>,
    state: watch::Sender<SyncSnapshot<T>>,
}

impl<T: Ordered + Send + Sync + 'static> RemoteCollection<T> {
    /// Create an idle collection backed by `fetch`.
    pub fn new<F, Fut>(resource: Resource, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, CoreError>> + Send + 'static,
    {
        let (state, _) = watch::channel(SyncSnapshot::default());
        Self {
            resource,
            fetch: Arc::new(move || Box::pin(fetch())),
            state,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Issue one read and publish the outcome.
    ///
    /// Moves to `Loading` without touching the current items. On success the
    /// items are replaced (sorted by `order_index`) and the status becomes
    /// `Ready`; on failure the status becomes `Failed` and the previous items
    /// are kept.
    pub async fn load(&self) {
        self.state.send_modify(|s| s.status = SyncStatus::Loading);
        debug!(resource = %self.resource, "loading");

        match (self.fetch)().await {
            Ok(mut items) => {
                items.sort_by_key(|item| item.order_index());
                let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
                debug!(resource = %self.resource, count = items.len(), "loaded");
                self.state.send_modify(|s| {
                    s.status = SyncStatus::Ready;
                    s.items = Arc::new(items);
                });
            }
            Err(e) => {
                let message = e.message_or(LOAD_FAILED_FALLBACK);
                warn!(resource = %self.resource, error = %e, "load failed");
                self.state
                    .send_modify(|s| s.status = SyncStatus::Failed(message));
            }
        }
    }

    /// Re-read after a mutation. Same semantics as [`load`](Self::load);
    /// the view reflects the store once this returns.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> SyncSnapshot<T> {
        self.state.borrow().clone()
    }

    /// Number of items from the last successful read.
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> SyncStream<T> {
        SyncStream::new(self.state.subscribe())
    }
}
