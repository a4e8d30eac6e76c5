use local_store::LocalArtifactDir;
use object_store::{ObjectStore, PutPayload, memory::InMemory, path::Path};
use smart_irrigation_types::{Bytes, Result};
use std::{path::PathBuf, sync::Arc};
pub mod local_store;

/// Where trained artifacts live. Local disk in production, memory in tests.
#[derive(Clone, Debug)]
pub enum ArtifactStore {
    Local(Arc<LocalArtifactDir>),
    Memory(Arc<InMemory>),
}

impl std::fmt::Display for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactStore::Local(dir) => write!(f, "{dir}"),
            ArtifactStore::Memory(_) => write!(f, "InMemory"),
        }
    }
}

impl ArtifactStore {
    pub fn local(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(ArtifactStore::Local(Arc::new(LocalArtifactDir::new(root)?)))
    }

    pub fn memory() -> Self {
        ArtifactStore::Memory(Arc::new(InMemory::new()))
    }

    pub fn as_generic(&self) -> Arc<dyn ObjectStore> {
        match self {
            ArtifactStore::Local(dir) => dir.store() as Arc<dyn ObjectStore>,
            ArtifactStore::Memory(store) => store.clone() as Arc<dyn ObjectStore>,
        }
    }

    /// Replace the object at `path`. Readers see either the old or the new bytes.
    pub async fn put(&self, path: &Path, bytes: Bytes) -> Result<()> {
        let size = bytes.len();
        self.as_generic()
            .put(path, PutPayload::from(bytes))
            .await?;
        tracing::debug!(store = %self, %path, size, "artifact written");
        Ok(())
    }

    /// Fetch an object. A missing object is `None`, every other failure is an error.
    pub async fn get(&self, path: &Path) -> Result<Option<Bytes>> {
        let store = self.as_generic();
        match store.get(path).await {
            Ok(result) => Ok(Some(result.bytes().await?)),
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Direct child "directories" of `prefix`.
    pub async fn list_dirs(&self, prefix: &Path) -> Result<Vec<Path>> {
        let listing = self.as_generic().list_with_delimiter(Some(prefix)).await?;
        Ok(listing.common_prefixes)
    }

    /// Delete every object directly under `prefix`.
    pub async fn delete_dir(&self, prefix: &Path) -> Result<()> {
        let store = self.as_generic();
        let listing = store.list_with_delimiter(Some(prefix)).await?;
        for object in listing.objects {
            match store.delete(&object.location).await {
                Ok(()) | Err(object_store::Error::NotFound { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
        tracing::debug!(store = %self, %prefix, "artifact dir removed");
        Ok(())
    }
}

/// Content digest used to tie artifacts written by the same run together.
pub fn digest(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_lowercase()
}
