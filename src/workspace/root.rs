use std::path::{Path, PathBuf};

/// Discover the workspace root from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `pkgwatch.toml`
/// - `package.json` next to a `packages/` directory (JS monorepo root)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub fn discover_workspace_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(crate::config::PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("package.json").is_file() && dir.join("packages").is_dir() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
