/*!
 * # ldc-google - Google Cloud filters for LLM dataset curation
 *
 * A Rust library providing a pipeline filter that translates the text of
 * dataset records with the Google Cloud Translation API.
 *
 * ## Features
 *
 * - Translate instruction/input/output pairs, pretraining text and
 *   multi-language translation records
 * - Select which fields get translated (`instruction`, `input`, `output`,
 *   `content` or `any`)
 * - Optionally translate line by line to preserve formatting
 * - Process JSON-lines record streams from the command line
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration loading and validation
 * - `location`: Field roles and location selection
 * - `records`: Record variants and their JSON-lines encoding
 * - `filter`: The filter lifecycle and the Google Translate filter:
 *   - `filter::google_translate`: The translation filter
 * - `providers`: Translation backends:
 *   - `providers::google`: Cloud Translation v3 REST client
 *   - `providers::mock`: In-memory backend for tests
 * - `app_controller`: Drives a filter over a record stream
 * - `language_utils`: Language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod filter;
pub mod language_utils;
pub mod location;
pub mod providers;
pub mod records;

// Re-export main types for easier usage
pub use app_config::FilterConfig;
pub use app_controller::Controller;
pub use errors::{ConfigError, FilterError, ProviderError, RecordError};
pub use filter::Filter;
pub use filter::google_translate::GoogleTranslateFilter;
pub use location::{Location, LocationSelector};
pub use records::{Domain, PairData, PretrainData, Record, TranslationData};
