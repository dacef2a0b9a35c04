// crates/engine/src/lib.rs
//! ファイル探索と並列スキャン
//!
//! Discovers C/C++ files under the configured roots, scans each one with
//! [`ambar_core::scan`] on the rayon pool and gathers per-file reports.
use rayon::iter::Either;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod language;
pub mod processor;
pub mod stats;
pub mod watch;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileReport, RunResult};

/// Scan every file reachable from `config.walk.roots`.
///
/// Reports come back sorted by path.
///
/// # Errors
///
/// Invalid roots and glob patterns fail up front. In strict mode the first
/// per-file or walk error is returned; otherwise those errors are collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    crate::filesystem::validate_roots(&config.walk, &config.filter)?;
    crate::filesystem::PathFilter::new(&config.filter)?;

    let (tx, rx) = crossbeam_channel::bounded(1024);
    // 探索中のエラーで walker を止めない
    let (err_tx, err_rx) = crossbeam_channel::unbounded();

    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();

    std::thread::spawn(move || {
        if let Err(e) = crate::filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx, &err_tx) {
            let _ = err_tx.send(e);
        }
    });

    let iter = rx.into_iter().par_bridge();

    let mut result = if config.strict {
        let reports = iter
            .map(|item| processor::process_file(item, config))
            .collect::<Result<Vec<_>>>()?;
        RunResult {
            reports,
            errors: Vec::new(),
        }
    } else {
        let (reports, errors): (Vec<FileReport>, Vec<(PathBuf, EngineError)>) =
            iter.partition_map(|item| {
                let path = item.0.clone();
                match processor::process_file(item, config) {
                    Ok(report) => Either::Left(report),
                    Err(e) => {
                        log::warn!("{e}");
                        Either::Right((path, e))
                    }
                }
            });
        RunResult { reports, errors }
    };

    // the walker thread has exited once `rx` is drained
    for walk_err in err_rx.try_iter() {
        if config.strict {
            return Err(walk_err);
        }
        let path = walk_err
            .path()
            .map_or_else(|| PathBuf::from("<walk>"), Path::to_path_buf);
        result.errors.push((path, walk_err));
    }

    result.reports.sort_by(|a, b| a.path.cmp(&b.path));
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));

    log::info!(
        "scanned {} files, {} issues, {} errors",
        result.reports.len(),
        result.issue_count(),
        result.errors.len()
    );

    Ok(result)
}
