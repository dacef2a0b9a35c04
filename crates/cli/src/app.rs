// crates/cli/src/app.rs
use crate::config::{AppConfig, STDIN_NAME};
use crate::error::Result;
use crate::presentation;
use ambar_core::Severity;
use ambar_engine::error::EngineError;
use ambar_engine::processor::process_reader;
use ambar_engine::stats::{FileReport, RunResult};
use std::path::{Path, PathBuf};

/// Scan stdin (when requested) and every configured root.
///
/// The stdin document, if any, comes first.
///
/// # Errors
/// Propagates engine failures; per-file errors stay in `RunResult::errors`.
pub fn collect(config: &AppConfig) -> Result<RunResult> {
    let mut result = if config.engine.walk.roots.is_empty() {
        RunResult::default()
    } else {
        ambar_engine::run(&config.engine)?
    };

    if config.read_stdin {
        let stdin = std::io::stdin();
        let report = process_reader(Path::new(STDIN_NAME), stdin.lock())?;
        result.reports.insert(0, report);
    }

    Ok(result)
}

/// Whether any issue reaches `fail_on`. Display filtering does not apply here.
#[must_use]
pub fn threshold_reached(reports: &[FileReport], fail_on: Option<Severity>) -> bool {
    let Some(threshold) = fail_on else {
        return false;
    };
    reports
        .iter()
        .flat_map(|r| &r.issues)
        .any(|i| i.severity >= threshold)
}

pub fn report_errors(errors: &[(PathBuf, EngineError)]) {
    for (path, err) in errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
}

/// One full cycle: scan, print, judge.
///
/// Returns `true` when the `--fail-on` threshold was reached.
///
/// # Errors
/// Engine or output failures.
pub fn analyze(config: &AppConfig) -> Result<bool> {
    let result = collect(config)?;
    report_errors(&result.errors);

    let visible = presentation::visible_reports(&result.reports, config.output.min_severity);
    presentation::print_results(&visible, &config.output)?;

    Ok(threshold_reached(&result.reports, config.output.fail_on))
}
