mod arc_shared;
mod spin_sync_mutex;
mod weak_shared;

pub use arc_shared::ArcShared;
pub use spin_sync_mutex::SpinSyncMutex;
pub use weak_shared::WeakShared;
