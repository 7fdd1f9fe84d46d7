pub mod aggregator;
pub mod scheduler;
pub mod snapshot;

pub use aggregator::SyncHandle;
pub use scheduler::SyncController;
pub use snapshot::{DashboardSnapshot, SnapshotStore};
