mod config;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use config::AppConfig;
use restyle_adapters::{HttpImageProcessor, ImageCratePreviewDecoder};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    log::info!("starting restyle (endpoint: {})", config.endpoint);

    let processor = Arc::new(HttpImageProcessor::new(config.endpoint.clone()));
    let decoder = Arc::new(ImageCratePreviewDecoder);

    match ui::launch_window(processor, decoder) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("failed to start restyle: {error}");
            ExitCode::from(1)
        }
    }
}
