//! Destinations for generated artifacts.
//!
//! The emitter never touches the filesystem directly; it is handed an
//! [`OutputSink`]. Paths given to a sink are relative to the sink's root.

use crate::error::Error;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where generated artifacts are written.
pub trait OutputSink {
    /// Create a directory and any missing parents. Existing directories are fine.
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error>;

    /// Write a file, replacing any previous contents.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error>;
}

/// Sink rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirSink {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        let full = self.root.join(path);
        fs::create_dir_all(&full).map_err(|e| Error::io(&full, e))
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        let full = self.root.join(path);
        tracing::debug!(path = %full.display(), bytes = contents.len(), "writing artifact");
        fs::write(&full, contents).map_err(|e| Error::io(&full, e))
    }
}

/// In-memory sink. Writing into a directory that was never created fails,
/// the same way it would on disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.contains(path.as_ref())
    }
}

impl OutputSink for MemorySink {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        for dir in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            self.dirs.insert(dir.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(Error::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
            ));
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
