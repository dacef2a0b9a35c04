// crates/cli/src/logging.rs
//! flexi_logger によるログ初期化

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Fallback when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Start the global logger.
///
/// Level precedence is `log_level`, then `RUST_LOG`, then [`DEFAULT_LEVEL`].
/// Logs go to stderr, or to `log_file` when set.
///
/// # Errors
/// Returns an error for an invalid level spec or an unusable log file path.
pub fn init_logging(log_level: Option<&str>, log_file: Option<&Path>) -> crate::error::Result<()> {
    let mut logger = match log_level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_LEVEL)?,
    }
    .format(simple_format);

    if let Some(path) = log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(path)?)
            .write_mode(WriteMode::Direct);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));
    Ok(())
}

const fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

/// `YYYY-MM-DD HH:MM:SS.mmm LVL message (target:line)`
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let target = format_target(record.target(), record.line());
    write!(
        w,
        "{} {} {} ({target})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
    )
}

// ambar_engine::processor -> engine/processor.rs:42
fn format_target(target: &str, line: Option<u32>) -> String {
    let path_like = target.strip_prefix("ambar_").map_or_else(
        || target.replace("::", "/"),
        |rest| rest.replace("::", "/") + ".rs",
    );
    match line {
        Some(n) => format!("{path_like}:{n}"),
        None => path_like,
    }
}
