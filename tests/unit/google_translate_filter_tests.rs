/*!
 * Tests for the Google Translate filter
 */

use anyhow::Result;
use std::collections::BTreeMap;

use ldc_google::errors::{ConfigError, FilterError, ProviderError};
use ldc_google::location::Location;
use ldc_google::providers::mock::MockBackend;
use ldc_google::{Filter, FilterConfig, GoogleTranslateFilter, PairData, PretrainData, Record, TranslationData};
use crate::common;

fn pair() -> Record {
    Record::Pair(PairData {
        instruction: "Translate the sentence.".to_string(),
        input: "The cat sleeps.".to_string(),
        output: "".to_string(),
    })
}

fn translation(entries: &[(&str, &str)]) -> Record {
    Record::Translation(TranslationData {
        translations: entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    })
}

/// Test that every pair field is translated with the "any" location
#[tokio::test]
async fn test_process_withAnyLocation_shouldTranslateAllPairFields() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let record = Record::Pair(PairData {
        instruction: "Instruction".to_string(),
        input: "Input".to_string(),
        output: "Output".to_string(),
    });
    let processed = filter.process(&record).await?;

    assert_eq!(
        processed,
        Some(Record::Pair(PairData {
            instruction: "[de] Instruction".to_string(),
            input: "[de] Input".to_string(),
            output: "[de] Output".to_string(),
        }))
    );
    assert_eq!(backend.request_count(), 3);

    Ok(())
}

/// Test that the caller's record is left untouched
#[tokio::test]
async fn test_process_shouldNotMutateInputRecord() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let record = pair();
    let snapshot = record.clone();
    let processed = filter.process(&record).await?.expect("record should not be dropped");

    assert_eq!(record, snapshot);
    assert_ne!(processed, record);

    Ok(())
}

/// Test that empty fields are skipped even when selected
#[tokio::test]
async fn test_process_withEmptyOutput_shouldNotSendIt() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let Some(Record::Pair(processed)) = filter.process(&pair()).await? else {
        panic!("expected a pair record");
    };
    assert_eq!(processed.output, "");
    assert_eq!(backend.request_count(), 2);
    assert_eq!(
        filter.chars_translated(),
        "Translate the sentence.".chars().count() + "The cat sleeps.".chars().count()
    );

    Ok(())
}

/// Test that several locations can be combined
#[tokio::test]
async fn test_process_withInstructionAndOutput_shouldSkipInput() -> Result<()> {
    let backend = MockBackend::working();
    let config = common::test_config(false, vec![Location::Instruction, Location::Output]);
    let mut filter = common::initialized_filter(config, &backend).await?;

    let record = Record::Pair(PairData {
        instruction: "a".to_string(),
        input: "b".to_string(),
        output: "c".to_string(),
    });
    let Some(Record::Pair(processed)) = filter.process(&record).await? else {
        panic!("expected a pair record");
    };
    assert_eq!(processed.instruction, "[de] a");
    assert_eq!(processed.input, "b");
    assert_eq!(processed.output, "[de] c");

    Ok(())
}

/// Test translation records gain the target language
#[tokio::test]
async fn test_process_withTranslationRecord_shouldInsertTargetLanguage() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Input]), &backend).await?;

    let record = translation(&[("en", "Good morning"), ("fr", "Bonjour")]);
    let processed = filter.process(&record).await?;

    assert_eq!(
        processed,
        Some(translation(&[("de", "[de] Good morning"), ("en", "Good morning"), ("fr", "Bonjour")]))
    );

    Ok(())
}

/// Test translation records overwrite an existing target entry
#[tokio::test]
async fn test_process_withExistingTarget_shouldOverwriteIt() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let record = translation(&[("de", "alt"), ("en", "Hello")]);
    let processed = filter.process(&record).await?;

    assert_eq!(processed, Some(translation(&[("de", "[de] Hello"), ("en", "Hello")])));

    Ok(())
}

/// Test translation records without the source language are left alone
#[tokio::test]
async fn test_process_withoutSourceLanguage_shouldLeaveMappingUnchanged() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let record = translation(&[("es", "Hola"), ("fr", "Bonjour")]);
    assert_eq!(filter.process(&record).await?, Some(record.clone()));
    assert_eq!(backend.request_count(), 0);

    Ok(())
}

/// Test line splitting on a multi-line pretrain record
#[tokio::test]
async fn test_process_withSplitLines_shouldBatchLinesInOneRequest() -> Result<()> {
    let backend = MockBackend::working().with_custom_translation(|s, _| s.to_uppercase());
    let mut filter = common::initialized_filter(common::test_config(true, vec![Location::Any]), &backend).await?;

    let record = Record::Pretrain(PretrainData {
        content: "# Title\n\nFirst paragraph.\nSecond line.".to_string(),
    });
    let processed = filter.process(&record).await?;

    assert_eq!(
        processed,
        Some(Record::Pretrain(PretrainData {
            content: "# TITLE\nFIRST PARAGRAPH.\nSECOND LINE.".to_string(),
        }))
    );
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].contents, vec!["# Title", "First paragraph.", "Second line."]);

    Ok(())
}

/// Test that an empty response keeps the original text
#[tokio::test]
async fn test_process_withEmptyResponse_shouldKeepOriginalText() -> Result<()> {
    let backend = MockBackend::empty();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    let record = pair();
    assert_eq!(filter.process(&record).await?, Some(record.clone()));
    assert_eq!(backend.request_count(), 2);

    Ok(())
}

/// Test that backend errors propagate unchanged
#[tokio::test]
async fn test_process_withFailingBackend_shouldReturnProviderError() -> Result<()> {
    let backend = MockBackend::failing();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    match filter.process(&pair()).await {
        Err(FilterError::Provider(ProviderError::ApiError { status_code, .. })) => assert_eq!(status_code, 500),
        other => panic!("unexpected result: {:?}", other),
    }
    // Fail fast: the first failing field stops the record
    assert_eq!(backend.request_count(), 1);

    Ok(())
}

/// Test that each missing setting is reported at initialization
#[tokio::test]
async fn test_initialize_withMissingSettings_shouldReturnConfigError() -> Result<()> {
    let cases: [(fn(&mut FilterConfig), ConfigError); 3] = [
        (|c| c.project_id = None, ConfigError::MissingProjectId),
        (|c| c.source_lang = None, ConfigError::MissingSourceLanguage),
        (|c| c.target_lang = None, ConfigError::MissingTargetLanguage),
    ];

    for (unset, expected) in cases {
        let mut config = common::test_config(false, vec![Location::Any]);
        unset(&mut config);
        let mut filter = GoogleTranslateFilter::new(config)?.with_backend(MockBackend::working());

        match filter.initialize().await {
            Err(FilterError::Config(error)) => assert_eq!(error, expected),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    Ok(())
}

/// Test that the counter restarts on initialization
#[tokio::test]
async fn test_initialize_shouldResetCharacterCount() -> Result<()> {
    let backend = MockBackend::working();
    let mut filter = common::initialized_filter(common::test_config(false, vec![Location::Any]), &backend).await?;

    filter.translate("twelve chars").await?;
    assert_eq!(filter.chars_translated(), 12);
    filter.finalize();

    filter.initialize().await?;
    assert_eq!(filter.chars_translated(), 0);

    Ok(())
}
