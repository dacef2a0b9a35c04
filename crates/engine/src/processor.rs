use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::language::SourceLanguage;
use crate::stats::FileReport;
use ambar_core::ScanSummary;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Leading bytes inspected for NUL when deciding whether a file is binary.
pub const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Read and scan a single file.
///
/// # Errors
/// Returns `FileTooLarge` when the file exceeds `filter.max_size`, or `FileRead`
/// when it cannot be read.
pub fn process_file(
    (path, meta): (PathBuf, std::fs::Metadata),
    config: &Config,
) -> Result<FileReport> {
    let size = meta.len();
    if let Some(max) = config.filter.max_size
        && size > max
    {
        return Err(EngineError::FileTooLarge { path, size, max });
    }

    let bytes = std::fs::read(&path).map_err(|e| EngineError::FileRead {
        path: path.clone(),
        source: e,
    })?;

    let language = SourceLanguage::from_path(&path, &config.filter.map_ext);
    Ok(process_bytes(path, language, &bytes))
}

/// Scan raw bytes as a document named `path`.
///
/// Binary content (NUL in the first [`BINARY_SNIFF_LEN`] bytes) yields an empty report.
#[must_use]
pub fn process_bytes(path: PathBuf, language: Option<SourceLanguage>, bytes: &[u8]) -> FileReport {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if head.contains(&0) {
        log::warn!("skipping binary file {}", path.display());
        let mut report = FileReport::new(path);
        report.language = language;
        report.is_binary = true;
        return report;
    }

    // 非UTF-8のファイルも置換文字で読み進める
    let text = String::from_utf8_lossy(bytes);
    process_text(path, language, &text)
}

/// Scan already decoded text as a document named `name`.
#[must_use]
pub fn process_text(
    name: impl Into<PathBuf>,
    language: Option<SourceLanguage>,
    text: &str,
) -> FileReport {
    let mut report = FileReport::new(name.into());
    report.language = language;
    report.lines = text.split('\n').count();
    report.issues = ambar_core::scan(text);
    report.summary = ScanSummary::from_issues(&report.issues);
    log::debug!(
        "{}: {} lines, {} issues",
        report.path.display(),
        report.lines,
        report.issues.len()
    );
    report
}

/// Read everything from `reader` and scan it as one document.
///
/// # Errors
/// Returns `FileRead` (attributed to `name`) if reading fails.
pub fn process_reader<R: Read>(name: &Path, mut reader: R) -> Result<FileReport> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| EngineError::FileRead {
            path: name.to_path_buf(),
            source: e,
        })?;
    Ok(process_bytes(
        name.to_path_buf(),
        Some(SourceLanguage::Cpp),
        &buf,
    ))
}
