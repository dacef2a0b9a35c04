// crates/cli/src/presentation.rs
use crate::config::OutputSettings;
use crate::diagnostics::{self, DIAGNOSTIC_SOURCE, DiagnosticLevel, SeverityRanges};
use crate::error::Result;
use crate::options::OutputFormat;
use ambar_core::{ScanSummary, Severity};
use ambar_engine::language::SourceLanguage;
use ambar_engine::stats::FileReport;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Drop issues below `min` and recompute the summary.
#[must_use]
pub fn filter_report(report: &FileReport, min: Severity) -> FileReport {
    let mut filtered = report.clone();
    filtered.issues.retain(|i| i.severity >= min);
    filtered.summary = ScanSummary::from_issues(&filtered.issues);
    filtered
}

/// Reports as they will be shown: severity-filtered, binaries removed.
#[must_use]
pub fn visible_reports(reports: &[FileReport], min: Severity) -> Vec<FileReport> {
    reports
        .iter()
        .filter(|r| !r.is_binary)
        .map(|r| filter_report(r, min))
        .collect()
}

#[must_use]
pub fn total_summary(reports: &[FileReport]) -> ScanSummary {
    let mut total = ScanSummary::default();
    for report in reports {
        total.merge(&report.summary);
    }
    total
}

/// Render `reports` (already filtered) in the configured format.
///
/// # Errors
/// Returns an error if writing or serialisation fails.
pub fn write_results<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    settings: &OutputSettings,
) -> Result<()> {
    match settings.format {
        OutputFormat::Text => write_text(out, reports),
        OutputFormat::Table => write_table(out, reports),
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Jsonl => write_jsonl(out, reports),
        OutputFormat::Yaml => write_yaml(out, reports),
        OutputFormat::Ranges => write_ranges(out, reports),
    }
}

/// Convenience wrapper writing to stdout.
///
/// # Errors
/// See [`write_results`].
pub fn print_results(reports: &[FileReport], settings: &OutputSettings) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_results(&mut lock, reports, settings)?;
    lock.flush()?;
    Ok(())
}

pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn write_text<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    for report in reports {
        let path = display_path(&report.path);
        for diag in diagnostics::diagnostics(&report.issues) {
            let message = diag.message.replace('\n', "\n    ");
            writeln!(
                out,
                "{path}:{}:{}: {}: {message}",
                diag.range.line + 1,
                diag.range.start + 1,
                diag.level
            )?;
        }
    }

    let total = total_summary(reports);
    if total.issues > 0 {
        writeln!(out)?;
    }
    writeln!(
        out,
        "{} issues ({} high, {} medium, {} low) in {} files · total score {}",
        total.issues,
        total.high,
        total.medium,
        total.low,
        reports.len(),
        total.total_score
    )?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{ContentArrangement, Table};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "File", "Lang", "Line", "Col", "Severity", "Category", "Score", "Message",
        ]);

    for report in reports {
        let path = display_path(&report.path);
        let lang = report.language.map_or("-", SourceLanguage::id);
        for issue in &report.issues {
            table.add_row(vec![
                path.clone(),
                lang.to_string(),
                (issue.line + 1).to_string(),
                (issue.column + 1).to_string(),
                issue.severity.to_string(),
                issue.category.to_string(),
                format!("{}/10", issue.score),
                issue.message.clone(),
            ]);
        }
    }

    writeln!(out, "ambar v{} · {DIAGNOSTIC_SOURCE}", crate::VERSION)?;
    writeln!(out, "{table}")?;

    let total = total_summary(reports);
    writeln!(
        out,
        "TOTAL: {} issues ({} high, {} medium, {} low) in {} files",
        total.issues,
        total.high,
        total.medium,
        total.low,
        reports.len()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct Document<'a> {
    version: &'static str,
    source: &'static str,
    files: &'a [FileReport],
    summary: ScanSummary,
}

impl<'a> Document<'a> {
    fn new(reports: &'a [FileReport]) -> Self {
        Self {
            version: crate::VERSION,
            source: DIAGNOSTIC_SOURCE,
            files: reports,
            summary: total_summary(reports),
        }
    }
}

fn write_json<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Document::new(reports))?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    serde_yaml::to_writer(&mut *out, &Document::new(reports))?;
    Ok(())
}

#[derive(Serialize)]
struct IssueRecord<'a> {
    r#type: &'static str,
    path: &'a Path,
    level: DiagnosticLevel,
    #[serde(flatten)]
    issue: &'a ambar_core::Issue,
}

fn write_jsonl<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    for report in reports {
        for issue in &report.issues {
            let record = IssueRecord {
                r#type: "issue",
                path: &report.path,
                level: issue.severity.into(),
                issue,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": reports.len(),
        "summary": total_summary(reports),
    });
    writeln!(out, "{total}")?;
    Ok(())
}

#[derive(Serialize)]
struct FileRanges<'a> {
    path: &'a Path,
    #[serde(flatten)]
    ranges: SeverityRanges,
}

fn write_ranges<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    let files: Vec<FileRanges<'_>> = reports
        .iter()
        .map(|r| FileRanges {
            path: &r.path,
            ranges: SeverityRanges::from_issues(&r.issues),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &files)?;
    writeln!(out)?;
    Ok(())
}
