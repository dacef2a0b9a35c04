use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("Path does not exist: {}", .0.display())]
    MissingPath(PathBuf),

    #[error("Not a C/C++ source file: {}", .0.display())]
    UnsupportedLanguage(PathBuf),

    #[error("File '{}' is {size} bytes, larger than maximum {max}", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl EngineError {
    /// The file or directory the error is about, when known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. } | Self::FileTooLarge { path, .. } => Some(path.as_path()),
            Self::MissingPath(path) | Self::UnsupportedLanguage(path) => Some(path.as_path()),
            Self::Walk(err) => walk_error_path(err),
            Self::Watch(_) | Self::Glob(_) => None,
        }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
