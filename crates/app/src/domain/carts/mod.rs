//! Carts

pub mod snapshot;
pub mod store;

pub use snapshot::{CartSnapshotStore, FsCartSnapshotStore, SnapshotError};
pub use store::CartStore;
