use clap::Parser;
use ifacegen::cli::{execute, Cli, CommandStatus};
use ifacegen::logging::{init_logging, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_config = LogConfig::from_env();
    let log_config = if cli.verbose {
        LogConfig {
            format: env_config.format,
            target_filter: env_config.target_filter,
            ..LogConfig::default_dev()
        }
    } else {
        env_config
    };
    if let Err(err) = init_logging(&log_config) {
        eprintln!("Warning: {err:#}");
    }

    match execute(&cli) {
        Ok(CommandStatus::Success) => ExitCode::SUCCESS,
        Ok(CommandStatus::LintFailed) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("❌ {err:#}");
            ExitCode::from(2)
        }
    }
}
