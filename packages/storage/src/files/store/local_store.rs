use object_store::local::LocalFileSystem;
use smart_irrigation_types::{Result, anyhow};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Artifact directory on the local filesystem.
///
/// Writes go through [`LocalFileSystem`], which stages every object in a
/// temporary file next to its destination and renames it into place, so a
/// reader never observes a half-written artifact.
#[derive(Debug)]
pub struct LocalArtifactDir {
    root: PathBuf,
    store: Arc<LocalFileSystem>,
}

impl std::fmt::Display for LocalArtifactDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalFileSystem({})", self.root.display())
    }
}

impl LocalArtifactDir {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| {
                anyhow!("Failed to create artifact dir {}: {}", root.display(), e)
            })?;
        }

        let store = LocalFileSystem::new_with_prefix(&root)?.with_automatic_cleanup(true);
        Ok(Self {
            root,
            store: Arc::new(store),
        })
    }

    pub fn store(&self) -> Arc<LocalFileSystem> {
        self.store.clone()
    }
}
