/*!
 * Tests for language utility functions
 */

use ldc_google::language_utils::{
    LanguageCodeType, describe, get_language_name, language_codes_match, primary_subtag, validate_language_code,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("de").unwrap(), LanguageCodeType::Part1);

    // ISO 639-2/T tests
    assert_eq!(validate_language_code("eng").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("fra").unwrap(), LanguageCodeType::Part2T);

    // ISO 639-2/B tests
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);

    // Region subtags are ignored
    assert_eq!(validate_language_code("zh-CN").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("pt_BR").unwrap(), LanguageCodeType::Part1);

    // Whitespace and case tests
    assert_eq!(validate_language_code(" EN ").unwrap(), LanguageCodeType::Part1);

    // Invalid codes
    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("e").is_err());
}

/// Test extraction of the primary subtag
#[test]
fn test_primary_subtag_shouldDropRegion() {
    assert_eq!(primary_subtag("zh-TW"), "zh");
    assert_eq!(primary_subtag("EN"), "en");
    assert_eq!(primary_subtag(""), "");
}

/// Test matching of different language code formats
#[test]
fn test_language_codes_match_shouldCompareLanguagesOnly() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fre", "fr"));
    assert!(language_codes_match("pt-BR", "pt-PT"));
    assert!(!language_codes_match("en", "de"));
    assert!(!language_codes_match("xx", "xx"));
}

/// Test language names for log output
#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert_eq!(get_language_name("ger").unwrap(), "German");
    assert!(get_language_name("zz").is_err());

    assert_eq!(describe("de"), "German (de)");
    assert_eq!(describe("zz"), "zz");
}
