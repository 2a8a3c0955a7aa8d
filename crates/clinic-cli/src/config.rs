//! Console configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Runtime settings for the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numeric code that unlocks admin mode
    pub admin_code: i32,
    /// Wrong attempts allowed before admin mode closes
    pub max_password_tries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_code: 1234,
            max_password_tries: 3,
        }
    }
}

impl Config {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_password_tries == 0 {
            bail!("max_password_tries must be at least 1");
        }
        Ok(())
    }
}
