//! Directory scans through `ambar_engine::run`.

use ambar_engine::config::{Config, FilterConfig, WalkOptions};
use ambar_engine::error::EngineError;
use ambar_engine::language::SourceLanguage;
use ambar_engine::run;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(roots: Vec<PathBuf>) -> Config {
    Config {
        walk: WalkOptions {
            roots,
            threads: 2,
            // tempdirs may live under a directory with its own ignore rules
            git_ignore: false,
            ..WalkOptions::default()
        },
        ..Config::default()
    }
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/alloc.cpp", "void f() {\n    int* p = new int;\n    delete p;\n}\n");
    write(dir.path(), "src/loops.c", "for (;;) {\n    for (;;) {\n    }\n}\n");
    write(dir.path(), "include/clean.hpp", "#pragma once\nint add(int a, int b);\n");
    write(dir.path(), "README.md", "int* p = new int;\n");
    write(dir.path(), "vendor/lib.cc", "std::list<int> xs;\n");
    dir
}

fn names(reports: &[ambar_engine::stats::FileReport], root: &Path) -> Vec<String> {
    reports
        .iter()
        .map(|r| {
            r.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scans_only_c_and_cpp_sorted_by_path() {
    let dir = project();
    let result = run(&config_for(vec![dir.path().to_path_buf()])).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(
        names(&result.reports, dir.path()),
        vec!["include/clean.hpp", "src/alloc.cpp", "src/loops.c", "vendor/lib.cc"]
    );

    let summary = result.summary();
    assert_eq!(summary.issues, 4);
    assert_eq!(summary.high, 2);
    assert_eq!(summary.medium, 2);
    assert_eq!(result.issue_count(), 4);

    let loops = &result.reports[2];
    assert_eq!(loops.language, Some(SourceLanguage::C));
    assert_eq!(loops.issues.len(), 1);
    assert_eq!(loops.issues[0].line, 1);
}

#[test]
fn exclude_patterns_prune_directories() {
    let dir = project();
    let mut config = config_for(vec![dir.path().to_path_buf()]);
    config.filter = FilterConfig {
        exclude_patterns: vec!["**/vendor/**".to_string()],
        ..FilterConfig::default()
    };

    let result = run(&config).unwrap();
    assert!(
        !names(&result.reports, dir.path())
            .iter()
            .any(|n| n.starts_with("vendor"))
    );
}

#[test]
fn extension_mapping_adds_languages() {
    let dir = project();
    write(dir.path(), "kernels/add.cu", "float* d = new float[n];\n");

    let mut config = config_for(vec![dir.path().join("kernels")]);
    config.filter.map_ext.insert("cu".to_string(), "cpp".to_string());

    let result = run(&config).unwrap();
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.reports[0].language, Some(SourceLanguage::Cpp));
    assert_eq!(result.reports[0].issues.len(), 1);
}

#[test]
fn explicit_file_root_is_scanned() {
    let dir = project();
    let file = dir.path().join("src/alloc.cpp");
    let result = run(&config_for(vec![file.clone()])).unwrap();
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.reports[0].path, file);
    assert_eq!(result.reports[0].issues.len(), 2);
}

#[test]
fn missing_root_is_an_error() {
    let dir = project();
    let err = run(&config_for(vec![dir.path().join("nope")])).unwrap_err();
    assert!(matches!(err, EngineError::MissingPath(_)));
}

#[test]
fn explicit_non_source_file_is_rejected() {
    let dir = project();
    let err = run(&config_for(vec![dir.path().join("README.md")])).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedLanguage(_)));
}

#[test]
fn oversized_explicit_file_is_collected_as_error() {
    let dir = project();
    let file = dir.path().join("src/alloc.cpp");
    let mut config = config_for(vec![file.clone()]);
    config.filter.max_size = Some(4);

    let result = run(&config).unwrap();
    assert!(result.reports.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, file);

    config.strict = true;
    assert!(matches!(
        run(&config),
        Err(EngineError::FileTooLarge { max: 4, .. })
    ));
}

#[cfg(unix)]
#[test]
fn unreadable_walk_entries_are_collected_as_errors() {
    let dir = project();
    std::os::unix::fs::symlink(dir.path().join("gone.cpp"), dir.path().join("src/dangling.cpp"))
        .unwrap();
    let mut config = config_for(vec![dir.path().to_path_buf()]);
    config.walk.follow_links = true;

    let result = run(&config).unwrap();
    assert_eq!(result.reports.len(), 4);
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0].1, EngineError::Walk(_)));

    config.strict = true;
    assert!(matches!(run(&config), Err(EngineError::Walk(_))));
}

#[test]
fn binary_sources_produce_no_issues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob.cpp");
    fs::write(&path, b"int* p = new int;\x00\x00").unwrap();

    let result = run(&config_for(vec![dir.path().to_path_buf()])).unwrap();
    assert_eq!(result.reports.len(), 1);
    assert!(result.reports[0].is_binary);
    assert!(result.reports[0].issues.is_empty());
}

#[test]
fn reports_serialize_to_json() {
    let dir = project();
    let file = dir.path().join("src/loops.c");
    let result = run(&config_for(vec![file])).unwrap();

    let json = serde_json::to_value(&result.reports[0]).unwrap();
    assert_eq!(json["language"], "c");
    assert_eq!(json["issues"][0]["category"], "Algorithmic Complexity");
    assert_eq!(json["issues"][0]["severity"], "medium");
    assert_eq!(json["summary"]["algorithmic_complexity"], 1);
}
