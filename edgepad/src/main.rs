use std::process::ExitCode;

use clap::Parser;
use edgepad::app::{self, AppError};
use edgepad::cli::Cli;
use edgepad::logger::SessionLogger;
use log::LevelFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(base) = cli.base_dir() else {
        let logger = SessionLogger::new(LevelFilter::Error);
        log::error!(logger: &logger, "{}", AppError::BasePath);
        return ExitCode::from(AppError::BasePath.exit_code());
    };

    let settings = cli.into_settings(&base);
    let logger = match &settings.log_file {
        Some(path) => SessionLogger::with_file(settings.log_level, path),
        None => SessionLogger::new(settings.log_level),
    };

    match app::run(&settings.config, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
