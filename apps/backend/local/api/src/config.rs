use smart_irrigation_api::DEFAULT_CORS_ORIGINS;
use std::{env, net::IpAddr, path::PathBuf};

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the model and label encoder artifacts
    pub model_dir: PathBuf,
    /// CSV used for startup training and `POST /api/ml/train`
    pub dataset_path: PathBuf,
    pub cors_origins: Vec<String>,
    /// Train from `dataset_path` when no model has been saved yet
    pub train_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?;

        let cors_origins: Vec<String> = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };
        if cors_origins.is_empty() {
            return Err(ConfigError::InvalidValue("CORS_ORIGINS".to_string()));
        }

        let train_on_startup = match lookup("TRAIN_ON_STARTUP").as_deref().map(str::trim) {
            None => true,
            Some("1" | "true" | "yes" | "on") => true,
            Some("0" | "false" | "no" | "off") => false,
            Some(_) => return Err(ConfigError::InvalidValue("TRAIN_ON_STARTUP".to_string())),
        };

        Ok(Config {
            host,
            port,
            model_dir: lookup("MODEL_DIR")
                .unwrap_or_else(|| "./models".to_string())
                .into(),
            dataset_path: lookup("DATASET_PATH")
                .unwrap_or_else(|| "Crop_recommendation.csv".to_string())
                .into(),
            cors_origins,
            train_on_startup,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(var) => write!(f, "Invalid value for: {}", var),
        }
    }
}

impl std::error::Error for ConfigError {}
