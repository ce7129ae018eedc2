/*!
 * Error types for the ldc-google filter.
 *
 * This module contains custom error types for the different layers of the filter,
 * using the thiserror crate for ergonomic error definitions. Every error is fatal
 * for the pipeline run that raised it; nothing here is retried.
 */

use thiserror::Error;

/// Errors raised while building or validating the filter configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No Google Cloud project configured
    #[error("No Google Cloud project ID provided!")]
    MissingProjectId,

    /// No language configured for the incoming text
    #[error("Language for the incoming text not provided!")]
    MissingSourceLanguage,

    /// No language configured to translate into
    #[error("No language specified in which to translate!")]
    MissingTargetLanguage,

    /// A location name outside the fixed enumeration
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// The location set is empty
    #[error("At least one location must be selected")]
    NoLocation,

    /// The service endpoint is not a usable URL
    #[error("Invalid service endpoint: {0}")]
    InvalidEndpoint(String),

    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(String),

    /// The configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors that can occur when talking to the translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting or quota
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while decoding or encoding records
#[derive(Error, Debug)]
pub enum RecordError {
    /// The line is not valid JSON
    #[error("Invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON value does not have the shape of the declared domain
    #[error("Unsupported record for domain '{domain}': {reason}")]
    Unsupported {
        /// Domain the record was decoded for
        domain: String,
        /// What was wrong with the value
        reason: String,
    },
}

/// Errors surfaced by the filter lifecycle
#[derive(Error, Debug)]
pub enum FilterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the translation service
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error decoding or encoding a record
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// `process` was called before `initialize`
    #[error("Filter '{0}' has not been initialized")]
    NotInitialized(String),

    /// A record whose domain the filter does not handle
    #[error("Unhandled data type: {0}")]
    UnsupportedRecord(String),
}

