use async_trait::async_trait;
use log::{info, trace, warn};
use std::time::Duration;

use crate::app_config::FilterConfig;
use crate::errors::{ConfigError, FilterError};
use crate::filter::Filter;
use crate::language_utils;
use crate::location::{Location, LocationSelector};
use crate::providers::google::GoogleTranslate;
use crate::providers::{TranslateTextRequest, TranslationBackend};
use crate::records::{Domain, Record};

const NAME: &str = "google-translate";

const DESCRIPTION: &str = "Translates text using Google's Translate API. The 'project_id' refers to your project ID in the \
     Google Cloud console (http://console.cloud.google.com/). The Google Translate API must be enabled. \
     Requests are authenticated with an OAuth access token (config 'access_token' or the \
     GOOGLE_OAUTH_ACCESS_TOKEN environment variable, e.g. from 'gcloud auth print-access-token').";

static DOMAINS: [Domain; 3] = [Domain::Pairs, Domain::Pretrain, Domain::Translation];

/// Settings fixed at initialization
#[derive(Debug, Clone)]
struct Session {
    project_id: String,
    source_lang: String,
    target_lang: String,
}

/// Filter that replaces record text with its Google Translate translation
#[derive(Debug)]
pub struct GoogleTranslateFilter {
    config: FilterConfig,
    locations: LocationSelector,
    backend: Option<Box<dyn TranslationBackend>>,
    session: Option<Session>,
    /// Characters submitted since initialization
    count: usize,
}

impl GoogleTranslateFilter {
    /// Create the filter; the location set is checked here, the rest at `initialize`
    pub fn new(config: FilterConfig) -> Result<Self, ConfigError> {
        let locations = config.location_selector()?;
        Ok(Self {
            config,
            locations,
            backend: None,
            session: None,
            count: 0,
        })
    }

    /// Use the given backend instead of creating a Google client at initialization
    pub fn with_backend(mut self, backend: impl TranslationBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of characters submitted for translation since initialization
    pub fn chars_translated(&self) -> usize {
        self.count
    }

    fn create_client(config: &FilterConfig, project_id: &str) -> Result<GoogleTranslate, ConfigError> {
        let mut client = GoogleTranslate::new(&config.endpoint, Duration::from_secs(config.timeout_secs))?
            .with_quota_project(project_id);
        match config.resolve_access_token() {
            Some(token) => client = client.with_access_token(token),
            None => warn!(
                "No access token configured; requests to {} will be unauthenticated",
                config.endpoint
            ),
        }
        Ok(client)
    }

    /// Split text into the segments submitted in one request
    ///
    /// Only exactly-empty lines are dropped. Whitespace-only lines and a
    /// trailing `'\r'` are sent unchanged.
    pub fn segments(&self, s: &str) -> Vec<String> {
        if self.config.split_lines {
            s.split('\n')
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            vec![s.to_string()]
        }
    }

    /// Translate the text
    ///
    /// Blank text comes back unchanged without a request. If the service
    /// returns no segments the original text is returned.
    pub async fn translate(&mut self, s: &str) -> Result<String, FilterError> {
        if s.trim().is_empty() {
            return Ok(s.to_string());
        }

        let session = self
            .session
            .clone()
            .ok_or_else(|| FilterError::NotInitialized(NAME.to_string()))?;
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| FilterError::NotInitialized(NAME.to_string()))?;

        let request = TranslateTextRequest::new(
            &session.project_id,
            self.segments(s),
            session.source_lang,
            session.target_lang,
        );
        self.count += s.chars().count();
        let response = backend.translate_text(request).await?;

        let result = match response.joined_text() {
            Some(text) => text,
            None => {
                warn!("No translation returned, keeping original text: {}", s);
                s.to_string()
            }
        };

        trace!("{} -> {}", s, result);
        Ok(result)
    }
}

#[async_trait]
impl Filter for GoogleTranslateFilter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn domains(&self) -> &'static [Domain] {
        &DOMAINS
    }

    async fn initialize(&mut self) -> Result<(), FilterError> {
        self.config.validate()?;

        let session = Session {
            project_id: self.config.project_id.clone().unwrap_or_default(),
            source_lang: self.config.source_lang.clone().unwrap_or_default(),
            target_lang: self.config.target_lang.clone().unwrap_or_default(),
        };

        for code in [&session.source_lang, &session.target_lang] {
            if language_utils::validate_language_code(code).is_err() {
                warn!("Language code '{}' is not an ISO 639 code, passing it on unchanged", code);
            }
        }
        if language_utils::language_codes_match(&session.source_lang, &session.target_lang) {
            warn!(
                "Source '{}' and target '{}' name the same language",
                session.source_lang, session.target_lang
            );
        }

        if self.backend.is_none() {
            self.backend = Some(Box::new(Self::create_client(&self.config, &session.project_id)?));
        }

        info!(
            "Translating {} -> {} with project '{}' (locations: {}, split lines: {})",
            language_utils::describe(&session.source_lang),
            language_utils::describe(&session.target_lang),
            session.project_id,
            self.locations,
            self.config.split_lines
        );

        self.session = Some(session);
        self.count = 0;
        Ok(())
    }

    async fn process(&mut self, record: &Record) -> Result<Option<Record>, FilterError> {
        let mut result = record.clone();

        match &mut result {
            Record::Pair(pair) => {
                if self.locations.selects(Location::Instruction) {
                    pair.instruction = self.translate(&pair.instruction).await?;
                }
                if self.locations.selects(Location::Input) {
                    pair.input = self.translate(&pair.input).await?;
                }
                if self.locations.selects(Location::Output) {
                    pair.output = self.translate(&pair.output).await?;
                }
            }
            Record::Pretrain(pretrain) => {
                if self.locations.selects(Location::Content) {
                    pretrain.content = self.translate(&pretrain.content).await?;
                }
            }
            Record::Translation(translation) => {
                let session = self
                    .session
                    .clone()
                    .ok_or_else(|| FilterError::NotInitialized(NAME.to_string()))?;
                if let Some(text) = translation.translations.get(&session.source_lang).cloned() {
                    let translated = self.translate(&text).await?;
                    translation.translations.insert(session.target_lang, translated);
                }
            }
        }

        Ok(Some(result))
    }

    fn finalize(&mut self) {
        info!("# characters: {}", self.count);
    }
}
