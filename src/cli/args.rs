//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};
use dailyfolder::consts::DEFAULT_PREVIEW_LIMIT;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "dailyfolder")]
#[command(about = "Keep a folder for every day on your desktop", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory holding the daily folders (defaults to the desktop)
    #[arg(short = 'b', long, global = true, value_name = "PATH")]
    pub(crate) base_dir: Option<PathBuf>,

    /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Timezone that decides the current date (e.g., "Europe/Berlin", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for folder listings
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Enable trace logging on stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Number of entries shown per folder preview
    #[arg(skip = DEFAULT_PREVIEW_LIMIT)]
    pub(crate) preview_limit: usize,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Enums only take the config value while the CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.base_dir.is_none() {
            self.base_dir = config.base_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if let Some(limit) = config.preview_limit {
            self.preview_limit = limit;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::TRACE
        } else if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["dailyfolder"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_without_config() {
        let cli = parse(&[]).with_config(&Config::default());
        assert!(cli.command.is_none());
        assert_eq!(cli.order, SortOrder::Asc);
        assert_eq!(cli.preview_limit, DEFAULT_PREVIEW_LIMIT);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            base_dir: Some(PathBuf::from("/tmp/desk")),
            timezone: Some("UTC".to_string()),
            order: Some(ConfigSortOrder::Desc),
            debug: true,
            preview_limit: Some(3),
            ..Config::default()
        };
        let cli = parse(&["list"]).with_config(&config);
        assert_eq!(cli.base_dir.as_deref(), Some(std::path::Path::new("/tmp/desk")));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.preview_limit, 3);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn cli_values_beat_config() {
        let config = Config {
            base_dir: Some(PathBuf::from("/tmp/desk")),
            color: Some(ConfigColorMode::Always),
            ..Config::default()
        };
        let cli = parse(&["--base-dir", "/srv/days", "--color", "never"]).with_config(&config);
        assert_eq!(cli.base_dir.as_deref(), Some(std::path::Path::new("/srv/days")));
        assert_eq!(cli.color, ColorMode::Never);
        assert!(!cli.use_color());
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn verbose_beats_debug() {
        let cli = parse(&["--debug", "-v"]);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }
}
