use ambar_cli::app;
use ambar_cli::args::Args;
use ambar_cli::config::AppConfig;
use ambar_cli::exit_code;
use ambar_cli::logging;
use ambar_cli::presentation;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.log.log_level.as_deref(), args.log.log_file.as_deref())
    {
        eprintln!("{e}");
        return ExitCode::from(exit_code::APP_ERROR);
    }

    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::from(exit_code::APP_ERROR);
        }
    };

    if config.engine.watch {
        // 毎回画面を消して結果全体を置き換える
        let run_cycle = || {
            presentation::print_clear_screen();
            if let Err(e) = app::analyze(&config) {
                eprintln!("Error in watch cycle: {e}");
            }
        };

        if let Err(e) = ambar_engine::watch::watch_loop(&config.engine, run_cycle) {
            eprintln!("Watch Error: {e}");
            ExitCode::from(exit_code::APP_ERROR)
        } else {
            ExitCode::SUCCESS
        }
    } else {
        match app::analyze(&config) {
            Ok(false) => ExitCode::from(exit_code::SUCCESS),
            Ok(true) => ExitCode::from(exit_code::THRESHOLD),
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::from(exit_code::APP_ERROR)
            }
        }
    }
}
