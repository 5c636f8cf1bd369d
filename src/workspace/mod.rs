//! Workspace package enumeration
//!
//! A workspace is a monorepo root with one or more package container
//! directories (`packages/` by default). Every direct subdirectory of a
//! container is a package.

mod root;

pub use root::discover_workspace_root;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WorkspaceConfig;
use crate::error::PkgwatchResult;

/// One package of the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    root: PathBuf,
    src_dir: PathBuf,
    build_dir: PathBuf,
}

impl Package {
    /// Create a package rooted at `root` with the given source/output dir names.
    pub fn new(root: impl Into<PathBuf>, src_dir: &str, build_dir: &str) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self {
            src_dir: root.join(src_dir),
            build_dir: root.join(build_dir),
            name,
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Whether the source directory exists right now
    pub fn has_src_dir(&self) -> bool {
        self.src_dir.is_dir()
    }

    /// Map a file under `src/` to its counterpart under `build/`.
    ///
    /// Returns `None` for paths outside the source directory.
    pub fn artifact_for(&self, source: &Path) -> Option<PathBuf> {
        let relative = source.strip_prefix(&self.src_dir).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        Some(self.build_dir.join(relative))
    }
}

/// Monorepo workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    layout: WorkspaceConfig,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, layout: WorkspaceConfig) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// List all packages, sorted by path.
    ///
    /// Missing container directories contribute nothing. Hidden entries and
    /// plain files inside a container are skipped.
    pub fn packages(&self) -> PkgwatchResult<Vec<Package>> {
        let mut packages = Vec::new();

        for container in &self.layout.packages {
            let dir = self.root.join(container);
            if !dir.is_dir() {
                continue;
            }

            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                if entry.file_name().to_string_lossy().starts_with('.') {
                    continue;
                }
                if !entry.file_type()?.is_dir() {
                    continue;
                }
                packages.push(Package::new(
                    entry.path(),
                    &self.layout.src_dir,
                    &self.layout.build_dir,
                ));
            }
        }

        packages.sort_by(|a, b| a.root.cmp(&b.root));
        packages.dedup_by(|a, b| a.root == b.root);
        Ok(packages)
    }
}
