//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{PkgwatchError, PkgwatchResult};
use crate::watcher::DEFAULT_INTERVAL_MS;

use super::loader::{self, ConfigWarning};

/// Workspace layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Directories (relative to the workspace root) whose children are packages
    #[serde(default = "default_packages")]
    pub packages: Vec<PathBuf>,

    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    #[serde(default = "default_build_dir")]
    pub build_dir: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
            src_dir: default_src_dir(),
            build_dir: default_build_dir(),
        }
    }
}

fn default_packages() -> Vec<PathBuf> {
    vec![PathBuf::from("packages")]
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_build_dir() -> String {
    "build".to_string()
}

/// Build command configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Program followed by its fixed arguments; changed files are appended
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
        }
    }
}

fn default_build_command() -> Vec<String> {
    vec!["node".to_string(), "scripts/build.js".to_string()]
}

/// Watch loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load project config, falling back to user config, then defaults.
    ///
    /// Environment overrides are applied on top of whichever file won.
    pub fn load_layered(workspace_root: &Path) -> PkgwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(workspace_root)
    }

    /// Reject values the watch loop cannot run with.
    ///
    /// `src_dir` and `build_dir` must stay inside the package and must not
    /// contain one another, so artifact deletion never leaves `build_dir`
    /// and build output never lands in a watched directory.
    pub fn validate(&self, origin: &Path) -> PkgwatchResult<()> {
        let invalid = |message: &str| PkgwatchError::InvalidConfig {
            file: origin.to_path_buf(),
            message: message.to_string(),
        };

        if self.watch.interval_ms == 0 {
            return Err(invalid("watch.interval_ms must be greater than 0"));
        }

        let src = package_relative(&self.workspace.src_dir).ok_or_else(|| {
            invalid("workspace.src_dir must be a relative path inside the package")
        })?;
        let build = package_relative(&self.workspace.build_dir).ok_or_else(|| {
            invalid("workspace.build_dir must be a relative path inside the package")
        })?;
        if build.starts_with(&src) || src.starts_with(&build) {
            return Err(invalid(
                "workspace.build_dir and workspace.src_dir must not contain each other",
            ));
        }

        Ok(())
    }
}

/// `value` as a path below the package root, with `.` segments dropped.
///
/// Empty, absolute, and `..` paths yield `None`.
fn package_relative(value: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(value).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!relative.as_os_str().is_empty()).then_some(relative)
}
