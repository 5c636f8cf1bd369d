//! Watch event types and options

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::config::{Config, WorkspaceConfig};

/// Default tick period in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Filesystem change as seen by the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FsChangeKind {
    /// File created (or renamed into place)
    Add,
    /// File contents changed
    Change,
    /// File removed (or renamed away)
    Unlink,
}

impl fmt::Display for FsChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FsChangeKind::Add => "add",
            FsChangeKind::Change => "change",
            FsChangeKind::Unlink => "unlink",
        };
        f.write_str(s)
    }
}

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Workspace root (build command runs here)
    pub root: PathBuf,
    /// Package layout
    pub layout: WorkspaceConfig,
    /// Build program followed by its fixed arguments
    pub build_command: Vec<String>,
    /// Tick period
    pub interval: Duration,
}

impl WatchOptions {
    /// Create new watch options with default layout and build command
    pub fn new(root: PathBuf) -> Self {
        Self::from_config(root, &Config::default())
    }

    /// Build options from a loaded configuration
    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        Self {
            root,
            layout: config.workspace.clone(),
            build_command: config.build.command.clone(),
            interval: Duration::from_millis(config.watch.interval_ms),
        }
    }

    /// Human-readable build command, without file arguments
    pub fn command_line(&self) -> String {
        self.build_command.join(" ")
    }

    /// Override the tick period
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Watch event types for text and NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watches registered
    WatchStarted {
        root: String,
        build_command: String,
        watching: Vec<String>,
    },
    /// Package has no source directory
    PackageSkipped { package: String },
    /// Source file added or changed and queued for rebuild
    FileChanged {
        kind: FsChangeKind,
        package: String,
        path: String,
    },
    /// Build output removed after its source was removed
    ArtifactDeleted { path: String },
    /// Build command invoked
    BuildStarted { files: Vec<String> },
    /// Build command exited successfully
    BuildComplete { files: usize },
    /// Non-fatal error; watching continues
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
