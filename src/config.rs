//! Environment configuration
//!
//! Everything comes from the process environment, optionally seeded from a
//! `.env` file. The API URL and token are required; target overrides are not.

use std::env;

use crate::models::Targets;

pub const API_URL_KEY: &str = "WELLNEST_API_URL";
pub const API_TOKEN_KEY: &str = "WELLNEST_API_TOKEN";
pub const USERNAME_KEY: &str = "WELLNEST_USERNAME";

const TARGET_KEYS: [&str; 7] = [
  "WELLNEST_TARGET_CALORIES",
  "WELLNEST_TARGET_PROTEIN",
  "WELLNEST_TARGET_CARBS",
  "WELLNEST_TARGET_FATS",
  "WELLNEST_TARGET_WATER",
  "WELLNEST_TARGET_WORKOUTS",
  "WELLNEST_TARGET_SLEEP",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  #[error("Missing configuration: {0}")]
  Missing(&'static str),

  #[error("Invalid value for {key}: {value:?}")]
  Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_url: String,
  pub api_token: String,
  pub username: Option<String>,
  pub targets: Targets,
}

impl AppConfig {
  /// Load `.env` (if any) and read the environment
  pub fn load() -> Result<Self, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
      log::debug!("Loaded environment from {}", path.display());
    }
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    Ok(Self {
      api_url: required(API_URL_KEY)?,
      api_token: required(API_TOKEN_KEY)?,
      username: optional(USERNAME_KEY),
      targets: targets_from_env()?,
    })
  }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
  optional(key).ok_or(ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
  env::var(key)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

fn targets_from_env() -> Result<Targets, ConfigError> {
  let defaults = Targets::default();
  let mut values = [
    defaults.calories,
    defaults.protein,
    defaults.carbs,
    defaults.fats,
    defaults.water,
    defaults.workouts,
    defaults.sleep,
  ];

  for (&key, slot) in TARGET_KEYS.iter().zip(values.iter_mut()) {
    if let Some(raw) = optional(key) {
      *slot = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => return Err(ConfigError::Invalid { key, value: raw }),
      };
    }
  }

  let [calories, protein, carbs, fats, water, workouts, sleep] = values;
  Ok(Targets {
    calories,
    protein,
    carbs,
    fats,
    water,
    workouts,
    sleep,
  })
}
