//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PkgwatchError, PkgwatchResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the workspace root
pub const PROJECT_CONFIG_FILE: &str = "pkgwatch.toml";

/// User config file, relative to the platform config dir
const USER_CONFIG_FILE: &str = "pkgwatch/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PkgwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PkgwatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// A config file that exists but fails to parse or validate is an error; a
/// missing one is not.
pub fn load_layered(workspace_root: &Path) -> PkgwatchResult<(Config, Vec<ConfigWarning>)> {
    load_layered_from(workspace_root, dirs::config_dir().as_deref(), |key| {
        std::env::var(key).ok()
    })
}

/// `load_layered` with the user config dir and environment supplied by the caller.
pub(crate) fn load_layered_from(
    workspace_root: &Path,
    user_config_dir: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> PkgwatchResult<(Config, Vec<ConfigWarning>)> {
    let project_config = workspace_root.join(PROJECT_CONFIG_FILE);
    let user_config = user_config_dir.map(|d| d.join(USER_CONFIG_FILE));

    let (config, warnings) = if project_config.is_file() {
        load_validated(&project_config)?
    } else if let Some(user_config) = user_config.filter(|p| p.is_file()) {
        load_validated(&user_config)?
    } else {
        (Config::default(), Vec::new())
    };

    let config = with_env_overrides(config, get_env)?;
    Ok((config, warnings))
}

fn load_validated(path: &Path) -> PkgwatchResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = load_with_warnings(path)?;
    config.validate(path)?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (PKGWATCH_* prefix)
///
/// Unparseable values are ignored. A zero interval is rejected.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> PkgwatchResult<Config> {
    // PKGWATCH_BUILD_CMD (whitespace-separated program and arguments)
    if let Some(cmd) = get_env("PKGWATCH_BUILD_CMD") {
        let parts: Vec<String> = cmd.split_whitespace().map(str::to_string).collect();
        if !parts.is_empty() {
            config.build.command = parts;
        }
    }

    // PKGWATCH_INTERVAL_MS
    if let Some(interval) = get_env("PKGWATCH_INTERVAL_MS") {
        match interval.trim().parse::<u64>() {
            Ok(0) => {
                return Err(PkgwatchError::InvalidEnv {
                    var: "PKGWATCH_INTERVAL_MS".to_string(),
                    message: "must be greater than 0".to_string(),
                })
            }
            Ok(ms) => config.watch.interval_ms = ms,
            Err(_) => {}
        }
    }

    // PKGWATCH_COLOR
    if let Some(color) = get_env("PKGWATCH_COLOR") {
        if let Some(mode) = ColorMode::parse(&color) {
            config.output.color = mode;
        }
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "workspace",
        "packages",
        "src_dir",
        "build_dir",
        "build",
        "command",
        "watch",
        "interval_ms",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
