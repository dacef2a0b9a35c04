// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};

use crate::options::{OutputFormat, SeverityArg};
use crate::parsers::{self, SizeArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ambar",
    version = crate::VERSION,
    about = "C/C++ ソースのエネルギー効率の問題を行単位で検出します",
    long_about = None
)]
pub struct Args {
    /// 解析するファイルまたはディレクトリ（`-` で標準入力）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub log: LogOptions,
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// この重大度未満の問題は表示しない
    #[arg(long, value_enum, default_value = "low", help_heading = "出力")]
    pub min_severity: SeverityArg,

    /// この重大度以上の問題があれば終了コード 1 を返す
    #[arg(long, value_enum, help_heading = "出力")]
    pub fail_on: Option<SeverityArg>,
}

/// Filter-related options
#[derive(ClapArgs, Debug)]
pub struct FilterOptions {
    /// 含めるパスの glob（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub include: Vec<String>,

    /// 除外するパスの glob（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude: Vec<String>,

    /// 拡張子の読み替え（例: cu=cpp, ino=cpp）
    #[arg(long, value_parser = parsers::parse_key_val, help_heading = "フィルタ")]
    pub map_ext: Vec<(String, String)>,

    /// この大きさを超えるファイルは解析しない（例: 512K, 2M）
    #[arg(long, help_heading = "フィルタ")]
    pub max_size: Option<SizeArg>,
}

/// Directory-walk options
#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査")]
    pub hidden: bool,

    /// .gitignore を無視する
    #[arg(long, help_heading = "走査")]
    pub no_gitignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// 最大探索深さ
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// 走査スレッド数（未指定は CPU 数）
    #[arg(short = 'j', long, value_parser = parsers::parse_positive_usize, help_heading = "走査")]
    pub jobs: Option<usize>,
}

/// Run-mode options
#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 最初のエラーで停止する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 変更を監視して再解析する
    #[arg(long, help_heading = "動作")]
    pub watch: bool,

    /// 監視時の再解析までの待ち時間（ミリ秒）
    #[arg(
        long,
        value_parser = parsers::parse_debounce_ms,
        default_value_t = 500,
        requires = "watch",
        help_heading = "動作"
    )]
    pub debounce_ms: u64,
}

/// Logging options
#[derive(ClapArgs, Debug)]
pub struct LogOptions {
    /// ログレベル（例: info, debug, ambar_engine=trace）。未指定は RUST_LOG か warn
    #[arg(long, help_heading = "ログ")]
    pub log_level: Option<String>,

    /// ログの出力先ファイル
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "ログ")]
    pub log_file: Option<PathBuf>,
}
