pub mod generate;
pub mod info;

use crate::cli::parser::ConfigArgs;
use anyhow::{Context, Result};
use std::path::Path;
use vergen::Config;

/// Defaults, then the config file, then command line overrides.
pub fn load_config(args: &ConfigArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if Path::new(Config::FILENAME).exists() => {
            log::debug!("using {}", Config::FILENAME);
            Config::load(Path::new(Config::FILENAME))
                .with_context(|| format!("Failed to load config {}", Config::FILENAME))?
        }
        None => Config::default(),
    };
    args.apply_to(&mut config);
    Ok(config)
}
