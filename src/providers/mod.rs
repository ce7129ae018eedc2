/*!
 * Translation backends.
 *
 * This module contains the clients the filter can delegate translation to:
 * - Google: Cloud Translation API v3 over REST
 * - Mock: in-memory backend that records requests, for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Mime type marker for plain text content
pub const MIME_TYPE_PLAIN: &str = "text/plain";

/// One "translate text" call: an ordered batch of segments in one language pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextRequest {
    /// Resource the request is billed to, `projects/{id}/locations/{location}`
    #[serde(skip)]
    pub parent: String,

    /// Text segments, translated independently
    pub contents: Vec<String>,

    /// Format of the segments
    pub mime_type: String,

    /// Language of the segments
    pub source_language_code: String,

    /// Language to translate into
    pub target_language_code: String,
}

impl TranslateTextRequest {
    /// Create a plain-text request for the global location of a project
    pub fn new(
        project_id: &str,
        contents: Vec<String>,
        source_language_code: impl Into<String>,
        target_language_code: impl Into<String>,
    ) -> Self {
        Self {
            parent: format!("projects/{}/locations/global", project_id),
            contents,
            mime_type: MIME_TYPE_PLAIN.to_string(),
            source_language_code: source_language_code.into(),
            target_language_code: target_language_code.into(),
        }
    }
}

/// A single translated segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// The translated text
    #[serde(default)]
    pub translated_text: String,

    /// Language detected by the service, only set when no source was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language_code: Option<String>,
}

/// Result of a "translate text" call, order-preserving with the request contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TranslateTextResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl TranslateTextResponse {
    /// Build a response from plain strings
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            translations: texts
                .into_iter()
                .map(|text| Translation {
                    translated_text: text.into(),
                    detected_language_code: None,
                })
                .collect(),
        }
    }

    /// Translated segments joined by newlines, or `None` when the service returned nothing
    pub fn joined_text(&self) -> Option<String> {
        if self.translations.is_empty() {
            return None;
        }
        Some(
            self.translations
                .iter()
                .map(|t| t.translated_text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Common trait for translation backends
///
/// The filter holds one backend for its whole lifetime and calls it once per
/// translated field. Implementations report failures as `ProviderError`; the
/// caller does not retry.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate a batch of text segments
    ///
    /// # Arguments
    /// * `request` - The segments and language pair to translate
    ///
    /// # Returns
    /// * `Result<TranslateTextResponse, ProviderError>` - Translated segments in request order, or an error
    async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse, ProviderError>;
}

pub mod google;
pub mod mock;
