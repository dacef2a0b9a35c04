use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crate::language::SourceLanguage;
use crossbeam_channel::Sender;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Compiled include/exclude globs plus the language gate.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
    max_size: Option<u64>,
    map_ext: hashbrown::HashMap<String, String>,
}

impl PathFilter {
    /// # Errors
    /// Returns `Glob` if any pattern fails to compile.
    pub fn new(filters: &FilterConfig) -> Result<Self> {
        let include = if filters.include_patterns.is_empty() {
            None
        } else {
            Some(build_globset(&filters.include_patterns)?)
        };
        Ok(Self {
            include,
            exclude: build_globset(&filters.exclude_patterns)?,
            max_size: filters.max_size,
            map_ext: filters.map_ext.clone(),
        })
    }

    /// ディレクトリに降りるかどうか
    #[must_use]
    pub fn allows_dir(&self, path: &Path) -> bool {
        !self.exclude.is_match(path)
    }

    /// Whether a file should be sent to the scanner (size aside).
    #[must_use]
    pub fn allows_file(&self, path: &Path) -> bool {
        if SourceLanguage::from_path(path, &self.map_ext).is_none() {
            return false;
        }
        if self.exclude.is_match(path) {
            return false;
        }
        self.include.as_ref().is_none_or(|set| set.is_match(path))
    }

    #[must_use]
    pub fn allows_size(&self, size: u64) -> bool {
        self.max_size.is_none_or(|max| size <= max)
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Check roots before walking.
///
/// Missing paths are rejected, and so is a file named explicitly that is not C/C++.
///
/// # Errors
/// `MissingPath` or `UnsupportedLanguage`.
pub fn validate_roots(options: &WalkOptions, filters: &FilterConfig) -> Result<()> {
    for root in &options.roots {
        if !root.exists() {
            return Err(EngineError::MissingPath(root.clone()));
        }
        if root.is_file() && SourceLanguage::from_path(root, &filters.map_ext).is_none() {
            return Err(EngineError::UnsupportedLanguage(root.clone()));
        }
    }
    Ok(())
}

/// Parallel recursive directory walk.
///
/// Sends `(path, metadata)` for every C/C++ file that passes the filters.
/// Files given directly as roots bypass the filters; oversized ones fail later in `process_file`.
/// Entries the walker cannot read go to `errors` as [`EngineError::Walk`] and the walk goes on.
///
/// # Errors
/// Returns an error if a root is invalid or a glob pattern does not compile.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    tx: &Sender<(PathBuf, std::fs::Metadata)>,
    errors: &Sender<EngineError>,
) -> Result<()> {
    if options.roots.is_empty() {
        return Ok(());
    }

    validate_roots(options, filters)?;
    let filter = PathFilter::new(filters)?;

    let (files, dirs): (Vec<&PathBuf>, Vec<&PathBuf>) =
        options.roots.iter().partition(|root| root.is_file());

    for file in files {
        let meta = std::fs::metadata(file).map_err(|e| EngineError::FileRead {
            path: file.clone(),
            source: e,
        })?;
        let _ = tx.send((file.clone(), meta));
    }

    let Some((first, rest)) = dirs.split_first() else {
        return Ok(());
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let entry_filter = filter.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return entry_filter.allows_dir(entry.path());
        }
        entry_filter.allows_file(entry.path())
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let errors = errors.clone();
        let filter = filter.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    if let Ok(meta) = entry.metadata() {
                        if filter.allows_size(meta.len()) {
                            if tx.send((entry.path().to_owned(), meta)).is_err() {
                                return ignore::WalkState::Quit;
                            }
                        } else {
                            log::debug!("skipping {} (exceeds max size)", entry.path().display());
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("walk: {e}");
                    let _ = errors.send(EngineError::Walk(e));
                }
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}
