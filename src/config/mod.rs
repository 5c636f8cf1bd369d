//! Configuration module for pkgwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PKGWATCH_*)
//! 3. Project config (<workspace>/pkgwatch.toml)
//! 4. User config (~/.config/pkgwatch/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, WatchConfig, WorkspaceConfig};
