use std::process::ExitCode;

use pice::prelude::*;
use pice::{logging, parser};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let config = match MonitorConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Wrong parameter format. {}", e);
            return ExitCode::FAILURE;
        }
    };
    parser::init();

    let mut monitor = Monitor::new(Box::new(FileMetricSource::new(&config.thermal_zone)));
    let sampler = Sampler::new(Box::new(CommandMetricSource::new(&config.firmware_command)));
    let mut controller = Controller::new(&config, std::io::stdout());

    let result = controller.run(&mut monitor, &sampler, shutdown_signal()).await;
    monitor.close();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "monitoring aborted");
            ExitCode::FAILURE
        }
    }
}
