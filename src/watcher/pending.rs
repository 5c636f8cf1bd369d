//! Files waiting for the next build

use std::collections::BTreeSet;
use std::mem;
use std::path::PathBuf;

/// Set of absolute source paths pending rebuild.
///
/// Filled by add/change events; emptied in one swap when the tick fires.
#[derive(Debug, Default)]
pub struct PendingBuilds {
    files: BTreeSet<PathBuf>,
}

impl PendingBuilds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a file. Returns `false` if it was already queued.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.files.insert(path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, path: &std::path::Path) -> bool {
        self.files.contains(path)
    }

    /// Swap the set for an empty one and return the distinct paths, sorted.
    pub fn take(&mut self) -> Vec<PathBuf> {
        mem::take(&mut self.files).into_iter().collect()
    }
}
