//! Day & Night entry point
//!
//! Sets up logging, picks a seed and hands control to the platform loop.

use std::process::ExitCode;

use day_night::{AppResult, Settings, platform};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Day & Night starting (seed {})", seed);

    match platform::run(settings, seed) {
        Ok(AppResult::Failure) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
