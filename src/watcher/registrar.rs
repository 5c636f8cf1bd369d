//! Watch registration and raw event classification

use std::path::PathBuf;

use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, RecursiveMode, Watcher};

use crate::workspace::Package;

use super::event::{FsChangeKind, WatchEvent};

/// Register a recursive watch on each package's source directory.
///
/// Packages without a source directory are skipped with a `PackageSkipped`
/// event. A registration failure is reported as a non-fatal `Error` and the
/// package is left unwatched. Returns the packages actually being watched.
pub fn register_packages<W: Watcher>(
    watcher: &mut W,
    packages: &[Package],
    on_event: &impl Fn(WatchEvent),
) -> Vec<Package> {
    let mut watched = Vec::with_capacity(packages.len());

    for package in packages {
        if !package.has_src_dir() {
            on_event(WatchEvent::PackageSkipped {
                package: package.name().to_string(),
            });
            continue;
        }

        match watcher.watch(package.src_dir(), RecursiveMode::Recursive) {
            Ok(()) => watched.push(package.clone()),
            Err(e) => on_event(WatchEvent::Error {
                message: format!("failed to watch {}: {}", package.src_dir().display(), e),
            }),
        }
    }

    watched
}

/// Map a raw `notify` event onto the add/change/unlink changes the watcher acts on.
///
/// Directory events and access notifications produce nothing.
pub fn classify(event: &Event) -> Vec<(FsChangeKind, PathBuf)> {
    let all = |kind: FsChangeKind| -> Vec<(FsChangeKind, PathBuf)> {
        event.paths.iter().map(|p| (kind, p.clone())).collect()
    };

    match &event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => all(FsChangeKind::Add),

        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::To => all(FsChangeKind::Add),
            RenameMode::From => all(FsChangeKind::Unlink),
            RenameMode::Both => {
                let mut changes = Vec::with_capacity(2);
                if let Some(from) = event.paths.first() {
                    changes.push((FsChangeKind::Unlink, from.clone()));
                }
                if let Some(to) = event.paths.get(1) {
                    changes.push((FsChangeKind::Add, to.clone()));
                }
                changes
            }
            // Backend could not tell which side of the rename this is.
            RenameMode::Any | RenameMode::Other => event
                .paths
                .iter()
                .map(|p| {
                    let kind = if p.is_file() {
                        FsChangeKind::Add
                    } else {
                        FsChangeKind::Unlink
                    };
                    (kind, p.clone())
                })
                .collect(),
        },
        EventKind::Modify(_) => all(FsChangeKind::Change),

        EventKind::Remove(RemoveKind::Folder) => Vec::new(),
        EventKind::Remove(_) => all(FsChangeKind::Unlink),

        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}
