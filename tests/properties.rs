//! Property tests for pkgwatch.
//!
//! Run with: `cargo test --test properties`

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use pkgwatch::watcher::{BuildRunner, FsChangeKind, TickOutcome, WatchSession};
use pkgwatch::{Package, PkgwatchResult};

#[derive(Default)]
struct RecordingRunner {
    calls: Vec<Vec<PathBuf>>,
}

impl BuildRunner for RecordingRunner {
    fn run(&mut self, files: &[PathBuf]) -> PkgwatchResult<()> {
        self.calls.push(files.to_vec());
        Ok(())
    }
}

const FILES: &[&str] = &["index.js", "a.js", "b.js", "lib/c.js", "lib/deep/d.js"];

fn touch_sequence() -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((0..FILES.len(), any::<bool>()), 1..32)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any burst of add/change events within one window yields
    /// exactly one build whose arguments are the distinct touched files,
    /// and each distinct file is logged once.
    #[test]
    fn property_one_build_per_window(touches in touch_sequence()) {
        let dir = tempfile::tempdir().unwrap();
        let package = Package::new(dir.path().join("pkg-a"), "src", "build");
        for name in FILES {
            let path = package.src_dir().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, name).unwrap();
        }

        let src = package.src_dir().to_path_buf();
        let mut session = WatchSession::new(vec![package]);
        let mut runner = RecordingRunner::default();
        let logged = RefCell::new(0usize);

        let mut expected = BTreeSet::new();
        for (index, is_add) in &touches {
            let path = src.join(FILES[*index]);
            let kind = if *is_add { FsChangeKind::Add } else { FsChangeKind::Change };
            session.handle_change(kind, &path, &|_| *logged.borrow_mut() += 1);
            expected.insert(path);
        }

        let outcome = session.tick(&mut runner, &|_| {});

        prop_assert_eq!(outcome, TickOutcome::Built(expected.len()));
        prop_assert_eq!(runner.calls.len(), 1);
        prop_assert_eq!(*logged.borrow(), expected.len());
        prop_assert_eq!(&runner.calls[0], &expected.into_iter().collect::<Vec<_>>());
        prop_assert!(session.pending().is_empty());
        prop_assert_eq!(session.tick(&mut runner, &|_| {}), TickOutcome::Idle);
    }

    /// PROPERTY: unlink never panics or errors, whether or not the artifact exists.
    #[test]
    fn property_unlink_is_idempotent(
        index in 0..FILES.len(),
        artifact_exists in any::<bool>(),
        repeats in 1usize..4,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let package = Package::new(dir.path().join("pkg-a"), "src", "build");
        fs::create_dir_all(package.src_dir()).unwrap();
        let source = package.src_dir().join(FILES[index]);
        let artifact = package.build_dir().join(FILES[index]);
        if artifact_exists {
            fs::create_dir_all(artifact.parent().unwrap()).unwrap();
            fs::write(&artifact, "compiled").unwrap();
        }

        let mut session = WatchSession::new(vec![package]);
        let errors = RefCell::new(0usize);
        for _ in 0..repeats {
            session.handle_change(FsChangeKind::Unlink, &source, &|event| {
                if matches!(event, pkgwatch::WatchEvent::Error { .. }) {
                    *errors.borrow_mut() += 1;
                }
            });
        }

        prop_assert!(!artifact.exists());
        prop_assert_eq!(*errors.borrow(), 0);
        prop_assert!(session.pending().is_empty());
    }
}
