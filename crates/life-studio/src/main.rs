mod app;
mod config;
mod frame;

use std::process::ExitCode;

use life_engine::logging::{init_logging, LoggingConfig};
use life_engine::window::Runtime;

use crate::app::LifeApp;
use crate::config::StudioConfig;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(StudioConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: StudioConfig) -> anyhow::Result<()> {
    let app = LifeApp::new(config.clone())?;
    Runtime::run(config.runtime_config(), config.gpu_init(), app)
}
