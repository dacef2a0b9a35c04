use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// Quiet period used to coalesce bursts of file-system events in watch mode.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Glob patterns a file must match (any of them) to be scanned.
    #[builder(default)]
    pub include_patterns: Vec<String>,
    /// Glob patterns that exclude a file.
    #[builder(default)]
    pub exclude_patterns: Vec<String>,
    #[builder(default)]
    pub max_size: Option<u64>,
    /// Extension remapping applied before language detection (e.g. `cu` -> `cpp`).
    #[builder(default)]
    pub map_ext: hashbrown::HashMap<String, String>,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,

    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "DEFAULT_DEBOUNCE")]
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            strict: false,
            watch: false,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}
