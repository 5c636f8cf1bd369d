use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use pkgwatch::presentation::Cli;
use pkgwatch::watcher::{WatchEvent, WatchOptions, WatchUseCase};
use pkgwatch::{discover_workspace_root, Config};

use crate::ui::context::UiContext;
use crate::ui::output::render_config_warnings;
use crate::ui::views::watch::render_watch_event;

fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(match &cli.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => cwd.join(root),
        None => discover_workspace_root(&cwd),
    })
}

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let root = resolve_root(cli)?;

    let (mut config, warnings) = Config::load_layered(&root)
        .with_context(|| format!("failed to load configuration for {}", root.display()))?;
    cli.apply_to(&mut config);

    let ui = UiContext::new(cli.json, cli.verbose, &config);
    if !ui.json && !warnings.is_empty() {
        eprint!(
            "{}",
            render_config_warnings(&warnings, ui.color, ui.unicode)
        );
    }

    let options = WatchOptions::from_config(root, &config);
    let mut use_case = WatchUseCase::from_options(options)?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    use_case.start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let Some(rendered) =
                render_watch_event(&timestamp, &event, ui.verbose, ui.color, ui.unicode)
            else {
                return;
            };

            match event {
                WatchEvent::Error { .. } => eprint!("{rendered}"),
                _ => print!("{rendered}"),
            }
        }
        // The build command shares stdout; keep our lines ahead of its output.
        let _ = std::io::stdout().flush();
    })?;

    Ok(())
}
