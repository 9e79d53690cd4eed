//! Client configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `MEDIQ_*` environment variables (`MEDIQ_BASE_URL`,
//! `MEDIQ_TIMEOUT_SECS`, `MEDIQ_RESPONSE_ORDERING`, `MEDIQ_DEFAULT_MODE`),
//! then an explicit base URL override.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MediqError, Result};
use crate::mode::Mode;
use crate::orchestrator::ResponseOrdering;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/ai";

const ENV_PREFIX: &str = "MEDIQ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base endpoint; operation names are appended as path segments
    pub base_url: String,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout_secs: Option<u64>,
    pub response_ordering: ResponseOrdering,
    pub default_mode: Mode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            response_ordering: ResponseOrdering::default(),
            default_mode: Mode::default(),
        }
    }
}

impl ClientConfig {
    /// Load defaults, `file` if given, then environment overrides
    ///
    /// # Errors
    ///
    /// Returns `MediqError::Config` if the file is missing or unparsable,
    /// a value has the wrong type, or validation fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_base_url(file, None)
    }

    /// Like [`ClientConfig::load`], with `base_url` taking precedence over
    /// the file and the environment
    ///
    /// Validation runs on the merged result, so an override replaces an
    /// invalid lower-layer value instead of failing on it.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::load`].
    pub fn load_with_base_url(file: Option<&Path>, base_url: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );
        if let Some(url) = base_url {
            builder = builder.set_override("base_url", url)?;
        }

        let loaded: ClientConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// # Errors
    ///
    /// Returns `MediqError::Config` for a blank or non-http(s) base URL, or a
    /// zero timeout.
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(MediqError::Config {
                message: "base_url must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(MediqError::Config {
                message: format!("base_url must be an http(s) URL, got '{}'", base),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(MediqError::Config {
                message: "timeout_secs must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
