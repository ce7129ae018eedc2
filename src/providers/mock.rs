/*!
 * Mock translation backend for testing.
 *
 * This module provides a backend that never touches the network:
 * - `MockBackend::working()` - Tags every segment with the target language
 * - `MockBackend::empty()` - Returns zero translated segments
 * - `MockBackend::failing()` - Always fails with an API error
 *
 * Every request is recorded so tests can inspect exactly what was sent.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{TranslateTextRequest, TranslateTextResponse, TranslationBackend};

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, one translated segment per input segment
    Working,
    /// Succeeds with no translated segments
    Empty,
    /// Always fails with an error
    Failing,
}

/// Mock backend for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Requests received so far, shared between clones
    requests: Arc<Mutex<Vec<TranslateTextRequest>>>,
    /// Custom segment translator (optional)
    custom_translation: Option<fn(&str, &str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_translation: None,
        }
    }

    /// Create a working mock backend
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock backend that answers with no segments
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a failing mock backend
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Translate each segment with `f(segment, target_language)` instead of the default tag
    pub fn with_custom_translation(mut self, f: fn(&str, &str) -> String) -> Self {
        self.custom_translation = Some(f);
        self
    }

    /// Default translation of a segment
    pub fn tag(segment: &str, target_language: &str) -> String {
        format!("[{}] {}", target_language, segment)
    }

    /// Snapshot of all requests received
    pub fn requests(&self) -> Vec<TranslateTextRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse, ProviderError> {
        self.requests.lock().push(request.clone());

        match self.behavior {
            MockBehavior::Working => {
                let translate = self.custom_translation.unwrap_or(Self::tag);
                Ok(TranslateTextResponse::from_texts(
                    request
                        .contents
                        .iter()
                        .map(|segment| translate(segment, &request.target_language_code)),
                ))
            }

            MockBehavior::Empty => Ok(TranslateTextResponse::default()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated backend failure".to_string(),
                status_code: 500,
            }),
        }
    }
}
