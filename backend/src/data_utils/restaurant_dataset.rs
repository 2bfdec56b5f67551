//! Process-wide restaurant dataset, loaded once at startup.

use std::{path::Path, sync::OnceLock};

use anyhow::Context;
use common::{geo::UserCoordinate, restaurant::RestaurantRecord};
use tracing::{info, warn};

use crate::config::DirectoryConfig;

#[derive(Debug)]
pub struct RestaurantDirectory {
    pub config: DirectoryConfig,
    pub records: Vec<RestaurantRecord>,
}

static DIRECTORY: OnceLock<RestaurantDirectory> = OnceLock::new();

/// Loads the dataset named by `config`. Any failure here means the server cannot serve.
///
/// Repeated calls with the same config return the loaded directory; a different config is an error.
pub fn init_directory(config: DirectoryConfig) -> anyhow::Result<&'static RestaurantDirectory> {
    if let Some(directory) = DIRECTORY.get() {
        return ensure_same_config(directory, &config);
    }
    let records = load_restaurants(&config.data_path)?;
    info!(
        "Loaded {} restaurants from {} (proximity mode: {})",
        records.len(),
        config.data_path.display(),
        config.proximity_mode
    );
    install_directory(&DIRECTORY, RestaurantDirectory { config, records })
}

fn install_directory(
    cell: &OnceLock<RestaurantDirectory>,
    directory: RestaurantDirectory,
) -> anyhow::Result<&RestaurantDirectory> {
    match cell.set(directory) {
        Ok(()) => cell.get().context("Restaurant dataset has not been loaded"),
        Err(rejected) => {
            warn!(
                "Restaurant dataset was loaded concurrently, discarding the second load from {}",
                rejected.config.data_path.display()
            );
            let existing = cell.get().context("Restaurant dataset has not been loaded")?;
            ensure_same_config(existing, &rejected.config)
        }
    }
}

fn ensure_same_config<'a>(
    directory: &'a RestaurantDirectory,
    config: &DirectoryConfig,
) -> anyhow::Result<&'a RestaurantDirectory> {
    if directory.config != *config {
        anyhow::bail!(
            "Restaurant dataset already loaded with {:?}, cannot switch to {:?}",
            directory.config,
            config
        );
    }
    Ok(directory)
}

pub fn get_directory() -> anyhow::Result<&'static RestaurantDirectory> {
    DIRECTORY.get().context("Restaurant dataset has not been loaded")
}

pub fn load_restaurants(path: &Path) -> anyhow::Result<Vec<RestaurantRecord>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read restaurant data from {}", path.display()))?;
    parse_restaurants(&data).with_context(|| format!("Invalid restaurant data in {}", path.display()))
}

pub fn parse_restaurants(data: &str) -> anyhow::Result<Vec<RestaurantRecord>> {
    let records: Vec<RestaurantRecord> = serde_json::from_str(data)?;
    for (index, record) in records.iter().enumerate() {
        if UserCoordinate::new(record.lat, record.lng).is_none() {
            anyhow::bail!(
                "Record {} ({:?}) has invalid coordinates: {}, {}",
                index,
                record.name,
                record.lat,
                record.lng
            );
        }
    }
    Ok(records)
}
