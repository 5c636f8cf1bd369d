//! pkgwatch - monorepo package watcher
//!
//! Watches the `src/` directory of every workspace package and hands changed
//! files to an external build command, coalesced on a fixed tick. Removed
//! sources have their `build/` counterparts deleted.

pub mod config;
pub mod error;
pub mod presentation;
pub mod watcher;
pub mod workspace;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{PkgwatchError, PkgwatchResult};
pub use watcher::{
    BuildRunner, CommandBuildRunner, FsChangeKind, WatchEvent, WatchOptions, WatchSession,
    WatchUseCase,
};
pub use workspace::{discover_workspace_root, Package, Workspace};
