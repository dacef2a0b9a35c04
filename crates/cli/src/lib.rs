// crates/cli/src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// bitflags: same-file(1.x) vs notify(2.x)
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    /// `--fail-on` threshold reached.
    pub const THRESHOLD: u8 = 1;
    pub const APP_ERROR: u8 = 2;
}
