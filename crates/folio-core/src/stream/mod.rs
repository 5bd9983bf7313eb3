// ── Reactive collection streams ──
//
// Subscription types for consuming collection changes.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::SyncSnapshot;

/// A subscription to one remote collection.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct SyncStream<T: Send + Sync + 'static> {
    current: SyncSnapshot<T>,
    receiver: watch::Receiver<SyncSnapshot<T>>,
}

impl<T: Send + Sync + 'static> SyncStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<SyncSnapshot<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or at the last `changed()`).
    pub fn current(&self) -> &SyncSnapshot<T> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> SyncSnapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the collection has been dropped.
    pub async fn changed(&mut self) -> Option<SyncSnapshot<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` that yields the current snapshot first and
    /// then every subsequent change.
    pub fn into_stream(self) -> SyncWatchStream<T> {
        SyncWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct SyncWatchStream<T: Send + Sync + 'static> {
    inner: WatchStream<SyncSnapshot<T>>,
}

impl<T: Send + Sync + 'static> Stream for SyncWatchStream<T> {
    type Item = SyncSnapshot<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::StreamExt;

    use crate::model::{EntityId, Stat};
    use crate::section::Resource;
    use crate::store::{RemoteCollection, SyncStatus};

    #[tokio::test]
    async fn stream_yields_initial_then_updates() {
        let collection = RemoteCollection::new(Resource::Stats, || async {
            Ok(vec![Stat {
                id: EntityId::new(1),
                number: "5+".into(),
                label: "Years".into(),
                order_index: 0,
            }])
        });

        let mut stream = collection.subscribe().into_stream();
        let first = stream.next().await.unwrap();
        assert_eq!(first.status, SyncStatus::Idle);

        collection.load().await;
        let next = stream.next().await.unwrap();
        assert_eq!(next.status, SyncStatus::Ready);
        assert_eq!(next.items[0].number, "5+");
    }
}
