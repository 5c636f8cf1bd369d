//! CLI Argument Parsing
//!
//! ## Design Notes
//!
//! - Flags override environment and config file values
//! - Everything after `--` is the build command; changed files are appended to it

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// pkgwatch - rebuild monorepo package sources on change
#[derive(Parser, Debug)]
#[command(name = "pkgwatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: pkgwatch -- node scripts/build.js")]
pub struct Cli {
    /// Workspace root (defaults to the nearest monorepo root above the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory holding packages, relative to the root (repeatable)
    #[arg(long = "packages", value_name = "DIR")]
    pub packages: Vec<PathBuf>,

    /// Rebuild tick period in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Build command; changed file paths are appended as arguments
    #[arg(last = true, value_name = "BUILD_CMD")]
    pub build_cmd: Vec<String>,
}

impl Cli {
    /// Apply flag values on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if !self.packages.is_empty() {
            config.workspace.packages = self.packages.clone();
        }
        if let Some(ms) = self.interval_ms {
            config.watch.interval_ms = ms;
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
        if !self.build_cmd.is_empty() {
            config.build.command = self.build_cmd.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_command_after_separator() {
        let cli = Cli::try_parse_from([
            "pkgwatch",
            "--interval-ms",
            "250",
            "--",
            "node",
            "scripts/build.js",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.interval_ms, Some(250));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.build_cmd, vec!["node", "scripts/build.js", "--verbose"]);
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(Cli::try_parse_from(["pkgwatch", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "pkgwatch",
            "--packages",
            "libs",
            "--color",
            "never",
            "--",
            "make",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(config.workspace.packages, vec![PathBuf::from("libs")]);
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.build.command, vec!["make"]);
        assert_eq!(config.watch.interval_ms, 100);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::try_parse_from(["pkgwatch"]).unwrap();
        let mut config = Config::default();
        config.build.command = vec!["yarn".to_string(), "build".to_string()];
        cli.apply_to(&mut config);

        assert_eq!(config.build.command, vec!["yarn", "build"]);
        assert_eq!(config.workspace.packages, vec![PathBuf::from("packages")]);
    }
}
