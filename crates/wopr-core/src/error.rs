use thiserror::Error;

use crate::enums::Side;

#[derive(Error, Debug)]
pub enum WoprError {
    #[error("Target catalog is empty")]
    EmptyCatalog,

    #[error("Side {0} has no city targets")]
    MissingCity(Side),

    #[error("City target has no population: {0}")]
    InvalidPopulation(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WoprError>;
