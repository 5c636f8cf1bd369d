use pkgwatch::watcher::WatchEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn files(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", n)
    }
}

/// Render one watch event as a console line.
///
/// Returns `None` for events hidden at the current verbosity.
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    let rendered = match event {
        WatchEvent::WatchStarted {
            build_command,
            watching,
            ..
        } => {
            let mut out = format!(
                "{} {} {}\n",
                prefix,
                Icon::Pointer.colored(supports_color, supports_unicode),
                ColoredText::info("Watching for changes...")
                    .bold()
                    .render(supports_color)
            );
            for dir in watching {
                out.push_str(&format!(
                    "   {}\n",
                    ColoredText::dim(dir.as_str()).render(supports_color)
                ));
            }
            if verbose > 0 {
                out.push_str(&format!("   Build: {}\n", build_command));
            }
            out
        }
        WatchEvent::PackageSkipped { package } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "{} {} {}\n",
                prefix,
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim(format!("{} has no source directory, skipped", package))
                    .render(supports_color)
            )
        }
        WatchEvent::FileChanged { kind, path, .. } => format!(
            "{} {} {}: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            kind,
            path
        ),
        WatchEvent::ArtifactDeleted { path } => format!(
            "{} {} {} (deleted)\n",
            prefix,
            Icon::Bullet.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildStarted { files: paths } => format!(
            "{} {} Building {}...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode),
            files(paths.len())
        ),
        WatchEvent::BuildComplete { files: count } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "{} {} Built {}\n",
                prefix,
                Icon::Success.colored(supports_color, supports_unicode),
                files(*count)
            )
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    };

    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgwatch::watcher::FsChangeKind;

    fn plain(event: &WatchEvent, verbose: u8) -> Option<String> {
        render_watch_event("12:00:00", event, verbose, false, false)
    }

    #[test]
    fn renders_change_with_arrow() {
        let event = WatchEvent::FileChanged {
            kind: FsChangeKind::Change,
            package: "pkg-a".to_string(),
            path: "index.js".to_string(),
        };
        assert_eq!(
            plain(&event, 0).as_deref(),
            Some("[12:00:00] -> change: index.js\n")
        );
    }

    #[test]
    fn renders_deleted_artifact() {
        let event = WatchEvent::ArtifactDeleted {
            path: "pkg-a/build/x.js".to_string(),
        };
        assert_eq!(
            plain(&event, 0).as_deref(),
            Some("[12:00:00] * pkg-a/build/x.js (deleted)\n")
        );
    }

    #[test]
    fn renders_banner_with_watched_dirs() {
        let event = WatchEvent::WatchStarted {
            root: "/repo".to_string(),
            build_command: "node scripts/build.js".to_string(),
            watching: vec![
                "/repo/packages/pkg-a/src".to_string(),
                "/repo/packages/pkg-c/src".to_string(),
            ],
        };
        assert_eq!(
            plain(&event, 0).as_deref(),
            Some(
                "[12:00:00] -> Watching for changes...\n   /repo/packages/pkg-a/src\n   /repo/packages/pkg-c/src\n"
            )
        );

        let verbose = plain(&event, 1).unwrap();
        assert!(verbose.ends_with("   Build: node scripts/build.js\n"));
    }

    #[test]
    fn hides_skips_and_completion_unless_verbose() {
        let skipped = WatchEvent::PackageSkipped {
            package: "pkg-b".to_string(),
        };
        let complete = WatchEvent::BuildComplete { files: 2 };

        assert_eq!(plain(&skipped, 0), None);
        assert_eq!(plain(&complete, 0), None);
        assert_eq!(
            plain(&complete, 1).as_deref(),
            Some("[12:00:00] [OK] Built 2 files\n")
        );
    }

    #[test]
    fn renders_build_started_count() {
        let event = WatchEvent::BuildStarted {
            files: vec!["/repo/packages/pkg-a/src/index.js".to_string()],
        };
        assert_eq!(
            plain(&event, 0).as_deref(),
            Some("[12:00:00] [..] Building 1 file...\n")
        );
    }
}
