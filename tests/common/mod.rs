//! Common test utilities for pkgwatch CLI tests.
//!
//! Provides `TestEnv`: an isolated monorepo in a temp directory, plus
//! helpers to run the `pkgwatch` binary against it in the background.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Output of a stopped `pkgwatch` process
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated monorepo with temp HOME
pub struct TestEnv {
    _root_dir: TempDir,
    home_dir: TempDir,
    /// Canonical workspace root (notify reports canonical paths)
    root: PathBuf,
}

impl TestEnv {
    /// Empty monorepo: `package.json` plus `packages/`
    pub fn new() -> Self {
        let root_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home_dir = tempfile::tempdir().expect("Failed to create temp home");
        let root = root_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        fs::write(root.join("package.json"), "{\"private\": true}\n").unwrap();
        fs::create_dir_all(root.join("packages")).unwrap();
        Self {
            _root_dir: root_dir,
            home_dir,
            root,
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file relative to the workspace root, creating parents
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Build command that appends each invocation's arguments to `calls.log`,
    /// one per line, followed by a `---` separator.
    pub fn recording_build_command(&self) -> Vec<String> {
        let log = self.path("calls.log");
        vec![
            "sh".to_string(),
            "-c".to_string(),
            format!(
                "printf '%s\\n' \"$@\" >> '{}'; echo --- >> '{}'",
                log.display(),
                log.display()
            ),
            "build".to_string(),
        ]
    }

    /// Recorded build invocations, each a list of file arguments
    pub fn recorded_builds(&self) -> Vec<Vec<String>> {
        let content = fs::read_to_string(self.path("calls.log")).unwrap_or_default();
        content
            .split("---\n")
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| chunk.lines().map(str::to_string).collect())
            .collect()
    }

    /// Start `pkgwatch` with `args` in the workspace root
    pub fn spawn(&self, args: &[&str]) -> WatchProcess {
        let child = Command::new(env!("CARGO_BIN_EXE_pkgwatch"))
            .current_dir(&self.root)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("PKGWATCH_BUILD_CMD")
            .env_remove("PKGWATCH_INTERVAL_MS")
            .env_remove("PKGWATCH_COLOR")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start pkgwatch");
        WatchProcess { child }
    }
}

/// Running `pkgwatch` process
pub struct WatchProcess {
    child: Child,
}

impl WatchProcess {
    /// Whether the process exited on its own within `timeout`
    pub fn exited_within(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(Some(_)) = self.child.try_wait() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        false
    }

    /// Send SIGINT, as Ctrl+C would, then collect output once it exits
    pub fn interrupt(mut self) -> TestResult {
        let sent = Command::new("kill")
            .args(["-INT", &self.child.id().to_string()])
            .status()
            .expect("Failed to run kill");
        assert!(sent.success(), "kill -INT failed");
        self.exited_within(Duration::from_secs(5));
        self.stop()
    }

    /// Kill (if still running) and collect output
    pub fn stop(mut self) -> TestResult {
        let _ = self.child.kill();
        let status = self.child.wait().expect("Failed to wait for pkgwatch");

        let mut stdout = String::new();
        let mut stderr = String::new();
        if let Some(mut out) = self.child.stdout.take() {
            let _ = out.read_to_string(&mut stdout);
        }
        if let Some(mut err) = self.child.stderr.take() {
            let _ = err.read_to_string(&mut stderr);
        }

        TestResult {
            success: status.success(),
            stdout,
            stderr,
        }
    }
}

/// Poll `condition` until it holds or `timeout` elapses
pub fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(25));
    }
    condition()
}
