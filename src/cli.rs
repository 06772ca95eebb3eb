//! Command-line interface for termwin.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// termwin - window host for a terminal emulator
#[derive(Parser, Debug)]
#[command(name = "termwin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Appearance config file (default: ~/.config/termwin/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Window settings store (default: ~/.config/termwin/window.json)
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Renderer entry file loaded into the window (default: dist/index.html next to the binary)
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Log level, overrides RUST_LOG and DEBUG_LEVEL
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from the CLI to the application.
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    pub state_path: Option<PathBuf>,
    pub content_path: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            state_path: cli.state,
            content_path: cli.content,
            log_level: cli.log_level.map(LevelFilter::from),
        }
    }
}

/// Parse the process arguments.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let options: RuntimeOptions = Cli::try_parse_from(["termwin"]).unwrap().into();
        assert!(options.config_path.is_none());
        assert!(options.log_level.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "termwin",
            "--config",
            "/tmp/c.yaml",
            "--state",
            "/tmp/w.json",
            "--content",
            "/tmp/index.html",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let options = RuntimeOptions::from(cli);
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/c.yaml")));
        assert_eq!(options.state_path, Some(PathBuf::from("/tmp/w.json")));
        assert_eq!(options.content_path, Some(PathBuf::from("/tmp/index.html")));
        assert_eq!(options.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["termwin", "--log-level", "loud"]).is_err());
    }
}
