//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, Watcher};

use crate::error::PkgwatchResult;
use crate::workspace::Workspace;

use super::build::{BuildRunner, CommandBuildRunner};
use super::event::{WatchEvent, WatchOptions};
use super::registrar::{classify, register_packages};
use super::session::WatchSession;

/// Upper bound on how long the loop blocks before re-checking the stop flag
const POLL_MS: u64 = 50;

/// Watch Use Case
///
/// Orchestrates package watching and debounced rebuilds.
/// This is the main entry point for the `pkgwatch` binary.
pub struct WatchUseCase<R: BuildRunner> {
    options: WatchOptions,
    runner: R,
}

impl WatchUseCase<CommandBuildRunner> {
    /// Create a use case that spawns the configured build command
    pub fn from_options(options: WatchOptions) -> PkgwatchResult<Self> {
        let runner = CommandBuildRunner::new(&options.build_command, &options.root)?;
        Ok(Self::new(options, runner))
    }
}

impl<R: BuildRunner> WatchUseCase<R> {
    pub fn new(options: WatchOptions, runner: R) -> Self {
        Self { options, runner }
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events. Build and unlink failures are
    /// reported as `WatchEvent::Error` and never end the loop; only startup
    /// failures (unreadable workspace, watcher backend) return `Err`.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F) -> PkgwatchResult<()>
    where
        F: Fn(WatchEvent),
    {
        // notify reports canonical paths on some platforms (e.g. /private/var on macOS)
        let root = self
            .options
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.options.root.clone());
        let packages = Workspace::new(&root, self.options.layout.clone()).packages()?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let watched = register_packages(&mut watcher, &packages, &on_event);

        on_event(WatchEvent::WatchStarted {
            root: root.display().to_string(),
            build_command: self.options.command_line(),
            watching: watched
                .iter()
                .map(|p| p.src_dir().display().to_string())
                .collect(),
        });

        let mut session = WatchSession::new(watched);
        let interval = self.options.interval;
        let mut next_tick = Instant::now() + interval;

        while running.load(Ordering::SeqCst) {
            let wait = next_tick
                .saturating_duration_since(Instant::now())
                .min(Duration::from_millis(POLL_MS));

            match rx.recv_timeout(wait) {
                Ok(Ok(event)) => {
                    for (kind, path) in classify(&event) {
                        session.handle_change(kind, &path, &on_event);
                    }
                }
                Ok(Err(e)) => on_event(WatchEvent::Error {
                    message: format!("watcher error: {}", e),
                }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if Instant::now() >= next_tick {
                // Blocks while the build runs; events queue up in the channel.
                session.tick(&mut self.runner, &on_event);
                next_tick = Instant::now() + interval;
            }
        }

        drop(watcher);
        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
