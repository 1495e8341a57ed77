//! Configuration handling for the lookup client.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary works out of the box and tests can point the client at a
//! local mock catalog by overriding `CATALOG_BASE_URL`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::extractor::labels::{FieldLabels, LabelsError};

/// Environment variable names.
pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
pub const ENV_USER_AGENT: &str = "CATALOG_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CATALOG_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CATALOG_REQUEST_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "CATALOG_MAX_BODY_BYTES";
pub const ENV_OUTPUT_BUFFER: &str = "CATALOG_OUTPUT_BUFFER";
pub const ENV_LABELS_PATH: &str = "CATALOG_LABELS_PATH";

const DEFAULT_BASE_URL: &str = "https://www.dmm.co.jp";
const DEFAULT_USER_AGENT: &str = "catalog-lookup/0.1";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB
const DEFAULT_OUTPUT_BUFFER: usize = 1;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
    user_agent: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    max_body_bytes: u64,
    output_buffer: usize,
    labels_path: Option<PathBuf>,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match env::var(ENV_BASE_URL) {
            Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                field: ENV_BASE_URL,
                reason: e.to_string(),
            })?,
            Err(_) => default_base_url(),
        };
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let connect_timeout = Duration::from_secs(parse_var(
            ENV_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);
        let request_timeout = Duration::from_secs(parse_var(
            ENV_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        let max_body_bytes = parse_var(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?;
        let output_buffer = parse_var(ENV_OUTPUT_BUFFER, DEFAULT_OUTPUT_BUFFER)?;
        if output_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_OUTPUT_BUFFER,
                reason: "must be at least 1".to_string(),
            });
        }
        let labels_path = env::var(ENV_LABELS_PATH).ok().map(PathBuf::from);

        Ok(Self {
            base_url,
            user_agent,
            connect_timeout,
            request_timeout,
            max_body_bytes,
            output_buffer,
            labels_path,
        })
    }

    /// Defaults with a different catalog root. Handy for tests.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Catalog root the search URL is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
    /// Pages larger than this are rejected before decoding.
    pub fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes
    }
    /// Capacity of the metadata channel used by `Searcher::collect`.
    pub fn output_buffer(&self) -> usize {
        self.output_buffer
    }
    pub fn labels_path(&self) -> Option<&PathBuf> {
        self.labels_path.as_ref()
    }

    /// The label table to use: the JSON file at `labels_path` when set,
    /// otherwise the built-in one.
    pub fn load_labels(&self) -> Result<FieldLabels, ConfigError> {
        let Some(path) = &self.labels_path else {
            return Ok(FieldLabels::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LabelsFile {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(FieldLabels::from_json(&raw)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            output_buffer: DEFAULT_OUTPUT_BUFFER,
            labels_path: None,
        }
    }
}

fn default_base_url() -> Url {
    // constant, always parses
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read labels file {path:?}: {reason}")]
    LabelsFile { path: PathBuf, reason: String },

    #[error(transparent)]
    Labels(#[from] LabelsError),
}
