// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use ambar_core::Severity;
pub use ambar_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Roots named `-` stand for standard input.
pub const STDIN_PATH: &str = "-";
/// Display name of the stdin document.
pub const STDIN_NAME: &str = "<stdin>";

/// How results are shown and judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub min_severity: Severity,
    pub fail_on: Option<Severity>,
}

/// Everything `main` needs: engine configuration plus CLI-only settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub output: OutputSettings,
    /// `-` appeared among the paths.
    pub read_stdin: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let read_stdin = args.paths.iter().any(|p| is_stdin(p));
        let file_paths: Vec<PathBuf> = args
            .paths
            .iter()
            .filter(|p| !is_stdin(p))
            .cloned()
            .collect();

        if read_stdin && args.behavior.watch {
            return Err(AppError::Config(
                "--watch cannot be combined with reading from stdin".to_string(),
            ));
        }

        // `-` だけなら走査はしない
        let roots = if file_paths.is_empty() && !read_stdin {
            vec![PathBuf::from(".")]
        } else {
            file_paths
        };

        let walk = walk_options_from_args(&args, roots)?;
        let filter = filter_config_from_args(&args)?;

        let engine = ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .strict(args.behavior.strict)
            .watch(args.behavior.watch)
            .debounce(Duration::from_millis(args.behavior.debounce_ms))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let output = OutputSettings {
            format: args.output.format,
            min_severity: args.output.min_severity.into(),
            fail_on: args.output.fail_on.map(Severity::from),
        };

        Ok(Self {
            engine,
            output,
            read_stdin,
        })
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn walk_options_from_args(args: &Args, roots: Vec<PathBuf>) -> Result<WalkOptions> {
    let scan = &args.scan;
    let threads = scan.jobs.unwrap_or_else(num_cpus::get);

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(threads)
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig> {
    let opts = &args.filter;
    let map_ext: hashbrown::HashMap<String, String> = opts.map_ext.iter().cloned().collect();

    FilterConfigBuilder::default()
        .include_patterns(opts.include.clone())
        .exclude_patterns(opts.exclude.clone())
        .max_size(opts.max_size.map(|s| s.0))
        .map_ext(map_ext)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
