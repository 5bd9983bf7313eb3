// ── Reactive remote data ──

mod remote;

pub use remote::{RemoteCollection, SyncSnapshot, SyncStatus};
