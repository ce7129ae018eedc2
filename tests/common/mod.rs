/*!
 * Common test utilities for the ldc-google test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use ldc_google::app_config::FilterConfig;
use ldc_google::location::Location;
use ldc_google::providers::mock::MockBackend;
use ldc_google::{Filter, GoogleTranslateFilter};

/// Route library logging through env_logger, once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A complete English to German configuration
pub fn test_config(split_lines: bool, location: Vec<Location>) -> FilterConfig {
    FilterConfig {
        project_id: Some("test-project".to_string()),
        source_lang: Some("en".to_string()),
        target_lang: Some("de".to_string()),
        split_lines,
        location,
        ..FilterConfig::default()
    }
}

/// An initialized filter backed by the given mock
pub async fn initialized_filter(config: FilterConfig, backend: &MockBackend) -> Result<GoogleTranslateFilter> {
    init_logging();
    let mut filter = GoogleTranslateFilter::new(config)?.with_backend(backend.clone());
    filter.initialize().await?;
    Ok(filter)
}
