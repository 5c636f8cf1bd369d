//! Watch session: applies filesystem changes and fires builds on tick

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::workspace::Package;

use super::build::BuildRunner;
use super::event::{FsChangeKind, WatchEvent};
use super::pending::PendingBuilds;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing pending
    Idle,
    /// Build ran successfully for this many files
    Built(usize),
    /// Build ran and failed; the error was reported as an event
    Failed(usize),
}

/// State owned by the watch loop.
///
/// Events and ticks are applied from one thread, so the pending set needs
/// no locking.
#[derive(Debug)]
pub struct WatchSession {
    packages: Vec<Package>,
    pending: PendingBuilds,
}

impl WatchSession {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages,
            pending: PendingBuilds::new(),
        }
    }

    pub fn pending(&self) -> &PendingBuilds {
        &self.pending
    }

    /// Apply one filesystem change.
    ///
    /// A file that is already pending is not reported again until the next build.
    pub fn handle_change(
        &mut self,
        kind: FsChangeKind,
        path: &Path,
        on_event: &impl Fn(WatchEvent),
    ) {
        let Some(package) = self.package_for(path) else {
            return;
        };

        match kind {
            FsChangeKind::Add | FsChangeKind::Change => {
                // Gone or replaced by a directory before we got to it.
                if !is_regular_file(path) {
                    return;
                }
                let relative = display_relative(path, package.src_dir());
                let name = package.name().to_string();
                // Already queued for this tick; log each file once per build.
                if !self.pending.insert(path.to_path_buf()) {
                    return;
                }
                on_event(WatchEvent::FileChanged {
                    kind,
                    package: name,
                    path: relative,
                });
            }
            FsChangeKind::Unlink => {
                if let Some(event) = remove_artifact(package, path) {
                    on_event(event);
                }
            }
        }
    }

    /// Run the build once for everything pending, then clear the set.
    pub fn tick<R: BuildRunner + ?Sized>(
        &mut self,
        runner: &mut R,
        on_event: &impl Fn(WatchEvent),
    ) -> TickOutcome {
        if self.pending.is_empty() {
            return TickOutcome::Idle;
        }

        let files = self.pending.take();
        let count = files.len();
        on_event(WatchEvent::BuildStarted {
            files: files.iter().map(|p| p.display().to_string()).collect(),
        });

        match runner.run(&files) {
            Ok(()) => {
                on_event(WatchEvent::BuildComplete { files: count });
                TickOutcome::Built(count)
            }
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                TickOutcome::Failed(count)
            }
        }
    }

    /// Package whose source dir is the longest prefix of `path`
    fn package_for(&self, path: &Path) -> Option<&Package> {
        self.packages
            .iter()
            .filter(|p| path.starts_with(p.src_dir()) && path != p.src_dir())
            .max_by_key(|p| p.src_dir().components().count())
    }
}

/// Delete the build output matching a removed source file.
///
/// An artifact that is already gone (or is a directory) is not an error.
fn remove_artifact(package: &Package, source: &Path) -> Option<WatchEvent> {
    let artifact = package.artifact_for(source)?;
    if artifact.is_dir() {
        return None;
    }

    match fs::remove_file(&artifact) {
        Ok(()) => {
            let base = package.root().parent().unwrap_or(package.root());
            Some(WatchEvent::ArtifactDeleted {
                path: display_relative(&artifact, base),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(WatchEvent::Error {
            message: format!("failed to delete {}: {}", artifact.display(), e),
        }),
    }
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn display_relative(path: &Path, base: &Path) -> String {
    let relative: PathBuf = path
        .strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf());
    relative.display().to_string()
}
