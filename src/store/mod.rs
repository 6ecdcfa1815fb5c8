/// Snapshot persistence layer
use crate::domain::ChannelSchedule;
use crate::errors::ApiResult;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed store for the EPG snapshot.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// concurrent reader always sees either the previous or the new snapshot,
/// never a partially written one.
#[derive(Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored snapshot wholesale.
    pub async fn write(&self, snapshot: &[ChannelSchedule]) -> ApiResult<()> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Raw snapshot file content, or `None` if no snapshot exists yet.
    pub async fn read_bytes(&self) -> ApiResult<Option<Vec<u8>>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parsed snapshot, or `None` if no snapshot exists yet.
    pub async fn read(&self) -> ApiResult<Option<Vec<ChannelSchedule>>> {
        match self.read_bytes().await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}
