use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::location::{Location, LocationSelector};

/// Filter configuration module
/// This module handles the configuration of the translation filter, including
/// loading it from a JSON file and validating the required settings.
/// Represents the configuration of the Google Translate filter
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilterConfig {
    /// Name/ID of the Google Cloud project
    #[serde(default)]
    pub project_id: Option<String>,

    /// Language the incoming text is in
    #[serde(default)]
    pub source_lang: Option<String>,

    /// Language to translate the text into
    #[serde(default)]
    pub target_lang: Option<String>,

    /// Translate each non-empty line separately
    #[serde(default)]
    pub split_lines: bool,

    /// Which fields of pair/pretrain records get translated
    #[serde(default = "default_locations")]
    pub location: Vec<Location>,

    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// OAuth bearer token; falls back to the environment when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Environment variable consulted when no access token is configured
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

fn default_locations() -> Vec<Location> {
    vec![Location::Any]
}

fn default_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl FilterConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Validate the settings the filter needs before it can translate anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_blank(&self.project_id) {
            return Err(ConfigError::MissingProjectId);
        }
        if is_blank(&self.source_lang) {
            return Err(ConfigError::MissingSourceLanguage);
        }
        if is_blank(&self.target_lang) {
            return Err(ConfigError::MissingTargetLanguage);
        }
        url::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        Ok(())
    }

    /// Location set as a selector
    pub fn location_selector(&self) -> Result<LocationSelector, ConfigError> {
        LocationSelector::new(self.location.iter().copied())
    }

    /// Access token from the configuration, else from the environment
    pub fn resolve_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Default implementation for FilterConfig
impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            project_id: None,
            source_lang: None,
            target_lang: None,
            split_lines: false,
            location: default_locations(),
            endpoint: default_endpoint(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
