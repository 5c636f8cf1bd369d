//! pkgwatch CLI - rebuild monorepo package sources on change
//!
//! Usage: pkgwatch [OPTIONS] [-- <BUILD_CMD>...]

use anyhow::Result;
use clap::Parser;

use pkgwatch::presentation::Cli;

mod commands;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::watch::cmd_watch(&cli)
}
