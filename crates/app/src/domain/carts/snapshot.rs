//! Durable cart snapshot storage.

use std::{fs, io, path::PathBuf};

use mockall::automock;
use thiserror::Error;

/// Storage key the cart snapshot is saved under.
pub const CART_SNAPSHOT_KEY: &str = "carddz_cart";

/// Errors raised by snapshot storage.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot i/o failed")]
    Io(#[from] io::Error),
}

/// Key-value persistence for the serialized cart snapshot.
///
/// The blob is opaque here; [`super::CartStore`] owns its format. Reads
/// happen once at startup, writes after every cart mutation.
#[automock]
pub trait CartSnapshotStore: Send + Sync {
    /// Reads the saved snapshot, if one exists.
    fn load(&self) -> Result<Option<String>, SnapshotError>;

    /// Replaces the saved snapshot.
    fn save(&self, blob: &str) -> Result<(), SnapshotError>;

    /// Deletes the saved snapshot.
    fn clear(&self) -> Result<(), SnapshotError>;
}

/// File-backed snapshot store keeping the blob at `<dir>/carddz_cart.json`.
#[derive(Debug, Clone)]
pub struct FsCartSnapshotStore {
    path: PathBuf,
}

impl FsCartSnapshotStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{CART_SNAPSHOT_KEY}.json"));
        Self { path }
    }
}

impl CartSnapshotStore for FsCartSnapshotStore {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, blob: &str) -> Result<(), SnapshotError> {
        fs::write(&self.path, blob).map_err(Into::into)
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn load_without_a_saved_snapshot_is_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FsCartSnapshotStore::new(dir.path());

        assert!(store.load()?.is_none());

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FsCartSnapshotStore::new(dir.path());

        store.save("{\"lines\":[]}")?;

        assert_eq!(store.load()?.as_deref(), Some("{\"lines\":[]}"));

        Ok(())
    }

    #[test]
    fn clear_removes_the_snapshot_and_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FsCartSnapshotStore::new(dir.path());

        store.save("{}")?;
        store.clear()?;
        store.clear()?;

        assert!(store.load()?.is_none());

        Ok(())
    }
}
