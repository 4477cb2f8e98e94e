use anyhow::{Context, Result};
use chrono::Utc;
use spdlog::{debug, info, warn};

use blogdex::blog_index::generate_index;
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

    let now = Utc::now();
    generate_index(&config, now.date_naive(), &now.naive_utc())
        .with_context(|| format!("Could not generate the blog index in {}", config.paths.blog_dir.display()))?;

    Ok(())
}
