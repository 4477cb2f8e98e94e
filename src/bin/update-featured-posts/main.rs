use anyhow::{Context, Result};
use chrono::Utc;
use spdlog::{debug, info, warn};

use blogdex::blog_index::update_featured;
use blogdex::config::{open_config, CFG_FILE_NAME};
use blogdex::logger::configure_logger;

fn main() -> Result<()> {
    let (config, config_path) = open_config()?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using default logger instead. Desc={}", err);
    }

    match config_path {
        Some(path) => info!("Reading config from {}", path.display()),
        None => debug!("No {} found, using defaults", CFG_FILE_NAME),
    }

    update_featured(&config, Utc::now().date_naive())
        .with_context(|| format!("Could not update featured posts of {}", config.paths.index_path().display()))?;

    Ok(())
}
