use crate::processing::MetricsProfile;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not valid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub profile: MetricsProfile,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read configuration through `get` so tests do not touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let raw_addr = get("RUSTYSTEP_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "RUSTYSTEP_ADDR",
            value: raw_addr.clone(),
        })?;

        let mut profile = MetricsProfile::default();
        if let Some(value) = read_f64(&mut get, "RUSTYSTEP_STEP_LENGTH")? {
            profile.fixed_step_length = value;
        }
        if let Some(value) = read_f64(&mut get, "RUSTYSTEP_STEP_COEFFICIENT")? {
            profile.step_length_coefficient = value;
        }
        if let Some(value) = read_f64(&mut get, "RUSTYSTEP_WALKING_COEFFICIENT")? {
            profile.walking_calories_coefficient = value;
        }

        Ok(Self { addr, profile })
    }
}

fn read_f64<F>(get: &mut F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}
