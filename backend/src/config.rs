//! Directory configuration read from the environment.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use common::proximity::ProximityMode;
use tracing::{info, warn};

pub const DEFAULT_DATA_PATH: &str = "data/restaurants.json";

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub data_path: PathBuf,
    pub proximity_mode: ProximityMode,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            proximity_mode: ProximityMode::default(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            data_path: try_load("RESTAURANTS_DATA_PATH", DEFAULT_DATA_PATH)?,
            proximity_mode: try_load("RESTAURANTS_PROXIMITY_MODE", &ProximityMode::default().to_string())?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("Invalid {key} value {raw:?}: {e}")
    })
}
