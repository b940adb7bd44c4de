//! Log bridge for term-shortcuts.
//!
//! Routes every `log::info!()` etc. to a debug log file so diagnostic output
//! never lands in the terminal UI being driven:
//!
//! - Unix/macOS: `/tmp/term_shortcuts_debug.log`
//! - Windows: `%TEMP%\term_shortcuts_debug.log`
//!
//! When `RUST_LOG` is set (to anything), records are mirrored to stderr as
//! well. Its level is taken from a bare level name (`debug`) or from a
//! `term_shortcuts*=level` directive; other directives are ignored.
//!
//! Level precedence: explicit level passed to [`init_log_bridge`] (CLI flag),
//! then `RUST_LOG`, then the config value applied later via [`set_level`].

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use term_shortcuts_config::LogLevel;

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn write_line(&self, line: &str) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_line(&format_record(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();
/// Set once a CLI flag or RUST_LOG picked the level; config must not override it.
static LEVEL_PINNED: OnceLock<bool> = OnceLock::new();

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/term_shortcuts_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("term_shortcuts_debug.log")
    }
}

/// Install the log bridge as the global `log` logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_log_bridge(level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_level = rust_log.as_deref().and_then(level_from_rust_log);
    let pinned = level.or(env_level);
    let effective = pinned.unwrap_or_default();

    let bridge = BRIDGE.get_or_init(|| {
        let file = if effective == LogLevel::Off {
            None
        } else {
            // Silently continue without a file rather than disturb the UI
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok()
        };
        LogBridge {
            file: Mutex::new(file),
            mirror_stderr: rust_log.is_some(),
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(effective.to_level_filter());
        let _ = LEVEL_PINNED.set(pinned.is_some());
        bridge.write_line(&format!(
            "{}\nterm-shortcuts debug session started at {} (level={:?})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            effective,
            "=".repeat(80)
        ));
    }
}

/// Apply the level from config, unless a CLI flag or `RUST_LOG` already chose one.
pub fn set_level(level: LogLevel) {
    if LEVEL_PINNED.get().copied().unwrap_or(false) {
        return;
    }
    log::set_max_level(level.to_level_filter());
}

/// Level for this crate from a `RUST_LOG` value. A `term_shortcuts*=level`
/// directive beats a bare level name.
fn level_from_rust_log(value: &str) -> Option<LogLevel> {
    let mut bare = None;
    let mut targeted = None;
    for directive in value.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if target.trim().starts_with("term_shortcuts") => {
                targeted = LogLevel::from_name(level.trim()).or(targeted);
            }
            Some(_) => {}
            None => bare = LogLevel::from_name(directive).or(bare),
        }
    }
    targeted.or(bare)
}

fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
