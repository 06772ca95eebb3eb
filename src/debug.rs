//! Logging for termwin.
//!
//! All `log::*!` output goes to a debug file so that nothing is printed over
//! the terminal the user launched us from:
//!
//! - Unix/macOS: `/tmp/termwin_debug.log`
//! - Windows: `%TEMP%\termwin_debug.log`
//!
//! When `RUST_LOG` is set, records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then `DEBUG_LEVEL`
//! (0 = off .. 4 = trace), then `info`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/termwin_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("termwin_debug.log")
    }
}

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Map `DEBUG_LEVEL` values onto log levels.
pub fn level_from_debug_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse::<u8>().ok()? {
        0 => Some(LevelFilter::Off),
        1 => Some(LevelFilter::Error),
        2 => Some(LevelFilter::Info),
        3 => Some(LevelFilter::Debug),
        4 => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Resolve the effective level from the CLI flag and the environment.
pub fn resolve_level(
    cli_level: Option<LevelFilter>,
    rust_log: Option<&str>,
    debug_level: Option<&str>,
) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(|v| v.trim().parse().ok()))
        .or_else(|| debug_level.and_then(level_from_debug_level))
        .unwrap_or(LevelFilter::Info)
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let debug_level = std::env::var("DEBUG_LEVEL").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), debug_level.as_deref());

    let bridge = BRIDGE.get_or_init(|| {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        LogBridge {
            file: Mutex::new(file),
            mirror_stderr: rust_log.is_some(),
        }
    });

    // Fails only if another logger was installed first; keep that one.
    let _ = log::set_logger(bridge);
    log::set_max_level(level);
    log::info!(
        "termwin {} logging to {:?} (level={})",
        crate::VERSION,
        log_path(),
        level
    );
}

// Category-tagged logging: the category becomes the record target so the
// debug file can be grepped per subsystem.
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!(target: $category, $($arg)*)
    };
}
