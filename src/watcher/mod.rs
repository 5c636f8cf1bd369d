//! Package source watcher
//!
//! Watches the `src/` directory of every workspace package and rebuilds
//! changed files:
//! - `registrar` subscribes to one recursive `notify` watch per package
//! - `session` applies add/change/unlink events and owns the pending set
//! - the tick (100ms by default) hands all pending files to the build
//!   command in a single invocation
//!
//! Every observable action is reported as a [`WatchEvent`] through a
//! callback, so the binary decides how to render it (text or NDJSON).

mod build;
mod event;
mod pending;
mod registrar;
mod session;
mod use_case;

pub use build::{BuildRunner, CommandBuildRunner};
pub use event::{FsChangeKind, WatchEvent, WatchOptions, DEFAULT_INTERVAL_MS};
pub use pending::PendingBuilds;
pub use registrar::{classify, register_packages};
pub use session::{TickOutcome, WatchSession};
pub use use_case::WatchUseCase;
