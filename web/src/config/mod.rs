pub mod config;
pub mod resolve_file_path;

use config::AppConfig;
use log::debug;
use resolve_file_path::resolve_config_file_path;
use std::error::Error;
use std::fs::File;

const FALLBACK_CONFIG_PATHS: [&str; 1] = ["config.json"];

pub fn load_app_config(args: &[String]) -> Result<AppConfig, Box<dyn Error>> {
    let config_path = resolve_config_file_path(args, &FALLBACK_CONFIG_PATHS)?;
    debug!("Using configuration file: {:?}", config_path);

    let config: AppConfig = serde_json::from_reader(File::open(&config_path)?)
        .map_err(|e| format!("Invalid configuration file {}: {}", config_path.display(), e))?;
    debug!("Loaded config: {:#?}", config);
    Ok(config)
}
