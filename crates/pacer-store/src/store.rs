//! Flat keyed JSON blob store for the project collection.
//!
//! Two keys exist: `projects.json` holds the full project collection
//! (tasks included) and `last_active` holds the id of the most recently
//! used project. Every save overwrites the whole blob for its key.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::models::Project;

const PROJECTS_KEY: &str = "projects.json";
const LAST_ACTIVE_KEY: &str = "last_active";

/// Errors from reading or writing the blob store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },
}

/// Handle to the on-disk store rooted at a data directory.
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Write {
            path: root.display().to_string(),
            source: e,
        })?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Load the full project collection. A missing blob is an empty
    /// collection, not an error.
    pub fn load(&self) -> Result<Vec<Project>, StoreError> {
        let path = self.key_path(PROJECTS_KEY);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = read(&path)?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Overwrite the project collection blob with `projects`.
    pub fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        let path = self.key_path(PROJECTS_KEY);
        let contents = serde_json::to_string_pretty(projects).map_err(|e| StoreError::Corrupt {
            path: path.display().to_string(),
            source: e,
        })?;
        write(&path, &contents)?;
        tracing::debug!(count = projects.len(), "saved project collection");
        Ok(())
    }

    /// Load the last-active project id, if one was saved and still parses.
    /// Best-effort: a missing or mangled blob reads as `None`.
    pub fn load_last_active(&self) -> Option<Uuid> {
        let path = self.key_path(LAST_ACTIVE_KEY);
        let contents = fs::read_to_string(path).ok()?;
        contents.trim().parse().ok()
    }

    /// Record `id` as the last-active project.
    pub fn save_last_active(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.key_path(LAST_ACTIVE_KEY), &id.to_string())
    }

    /// Forget the last-active project, if any.
    pub fn clear_last_active(&self) -> Result<(), StoreError> {
        let path = self.key_path(LAST_ACTIVE_KEY);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StoreError::Write {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Remove one project (and, structurally, all its tasks) from the
    /// collection. Clears the last-active marker if it pointed at the
    /// removed project. Returns whether the project existed.
    pub fn delete_project(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut projects = self.load()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Ok(false);
        }
        self.save(&projects)?;
        if self.load_last_active() == Some(id) {
            self.clear_last_active()?;
        }
        Ok(true)
    }
}

fn read(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.display().to_string(),
        source: e,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), StoreError> {
    fs::write(path, contents).map_err(|e| StoreError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_empty_store_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ProjectStore::open(dir.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn last_active_missing_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ProjectStore::open(dir.path()).unwrap();
        assert_eq!(store.load_last_active(), None);
    }

    #[test]
    fn last_active_roundtrip_and_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ProjectStore::open(dir.path()).unwrap();
        let id = Uuid::new_v4();

        store.save_last_active(id).unwrap();
        assert_eq!(store.load_last_active(), Some(id));

        store.clear_last_active().unwrap();
        assert_eq!(store.load_last_active(), None);
    }

    #[test]
    fn mangled_last_active_reads_as_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ProjectStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join(LAST_ACTIVE_KEY), "not-a-uuid").unwrap();
        assert_eq!(store.load_last_active(), None);
    }

    #[test]
    fn corrupt_projects_blob_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ProjectStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join(PROJECTS_KEY), "{{{").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
