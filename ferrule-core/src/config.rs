//! Configuration loading from TOML files and environment variables
//!
//! A `ferrule.toml` looks like:
//!
//! ```toml
//! [logistic]
//! supremum = 1.0
//! steepness = 2.0
//! midpoint = 0.0
//! ```
//!
//! Every field is optional. Environment variables (or a `.env` file) take
//! precedence over the file.

use std::env;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::FerruleResult;
use crate::logistic::LogisticCurve;

/// Override for [`LogisticConfig::supremum`]
pub const ENV_LOGISTIC_SUPREMUM: &str = "FERRULE_LOGISTIC_SUPREMUM";
/// Override for [`LogisticConfig::steepness`]
pub const ENV_LOGISTIC_STEEPNESS: &str = "FERRULE_LOGISTIC_STEEPNESS";
/// Override for [`LogisticConfig::midpoint`]
pub const ENV_LOGISTIC_MIDPOINT: &str = "FERRULE_LOGISTIC_MIDPOINT";

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Loads `.env` into the process environment, once
///
/// Binaries that read `FERRULE_*` before building a config (e.g. through
/// clap's `env` attribute) call this first.
#[inline]
pub fn load_dotenv() {
    let _ = &*DOTENV_INIT;
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FerruleConfig {
    /// Logistic curve parameters
    #[serde(default)]
    pub logistic: LogisticConfig,
}

/// Logistic curve section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticConfig {
    /// Upper asymptote (L)
    pub supremum: f64,
    /// Growth rate (k)
    pub steepness: f64,
    /// Sigmoid midpoint (x0)
    pub midpoint: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            supremum: 1.0,
            steepness: 1.0,
            midpoint: 0.0,
        }
    }
}

impl LogisticConfig {
    /// Validated curve for these parameters
    pub fn curve(&self) -> FerruleResult<LogisticCurve<f64>> {
        LogisticCurve::new(self.supremum, self.steepness, self.midpoint)
    }
}

impl FromStr for FerruleConfig {
    type Err = crate::error::FerruleError;

    fn from_str(content: &str) -> FerruleResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl FerruleConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> FerruleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = content.parse()?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// File (if any) or defaults, then environment overrides
    pub fn load(path: Option<&Path>) -> FerruleResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Applies `FERRULE_*` variables from the process environment
    pub fn with_env_overrides(mut self) -> Self {
        load_dotenv();
        self.apply_overrides(|key| env::var(key).ok());
        self
    }

    /// Applies overrides from an arbitrary lookup; unparsable values are ignored
    pub fn apply_overrides<L>(&mut self, lookup: L)
    where
        L: Fn(&str) -> Option<String>,
    {
        let fields = [
            (ENV_LOGISTIC_SUPREMUM, &mut self.logistic.supremum),
            (ENV_LOGISTIC_STEEPNESS, &mut self.logistic.steepness),
            (ENV_LOGISTIC_MIDPOINT, &mut self.logistic.midpoint),
        ];
        for (key, slot) in fields {
            let Some(raw) = lookup(key) else { continue };
            match raw.trim().parse::<f64>() {
                Ok(value) => {
                    tracing::trace!(key, value, "environment override");
                    *slot = value;
                }
                Err(_) => tracing::trace!(key, raw = %raw, "ignoring unparsable override"),
            }
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> FerruleResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::FerruleError::Config(e.to_string()))
    }
}
