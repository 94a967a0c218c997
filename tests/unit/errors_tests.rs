/*!
 * Tests for error types and messages
 */

use std::path::PathBuf;

use transcript_vtt::errors::{ConversionError, VttParseError};
use transcript_vtt::validation::check_json_shape;

#[test]
fn test_vttParseError_display_shouldIncludeLine() {
    let error = VttParseError::new(7, "Malformed timing line");
    assert_eq!(error.to_string(), "line 7: Malformed timing line");
}

#[test]
fn test_conversionError_missingInput_shouldMentionFlag() {
    let display = ConversionError::MissingInput.to_string();
    assert!(display.contains("--input"));
}

#[test]
fn test_conversionError_unsupportedExtension_shouldNamePath() {
    let error = ConversionError::UnsupportedExtension { path: PathBuf::from("talk.srt") };
    let display = error.to_string();
    assert!(display.contains("talk.srt"));
    assert!(display.contains(".json or .vtt"));
}

#[test]
fn test_conversionError_invalidJsonShape_shouldIncludeReason() {
    let source = check_json_shape("{}").unwrap_err();
    let error = ConversionError::InvalidJsonShape { path: PathBuf::from("talk.json"), source };
    let display = error.to_string();
    assert!(display.contains("talk.json"));
    assert!(display.contains("missing field"));
}

#[test]
fn test_conversionError_vttFailures_shouldCountErrors() {
    let errors = vec![VttParseError::new(3, "a"), VttParseError::new(6, "b")];
    let source_error = ConversionError::InvalidSourceVtt { path: PathBuf::from("x.vtt"), errors: errors.clone() };
    let generated_error = ConversionError::InvalidGeneratedVtt { path: PathBuf::from("x.json"), errors };

    assert!(source_error.to_string().contains("2 error(s)"));
    assert!(generated_error.to_string().contains("Generated VTT"));
    assert_eq!(source_error.vtt_errors().len(), 2);
    assert!(ConversionError::MissingInput.vtt_errors().is_empty());
}

#[test]
fn test_conversionError_fromIoError_shouldDisplayPathAndCause() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let error = ConversionError::Io { path: PathBuf::from("talk.json"), source };
    let display = error.to_string();
    assert!(display.contains("talk.json"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_conversionError_exitCode_shouldAlwaysBeOne() {
    assert_eq!(ConversionError::MissingInput.exit_code(), 1);
    assert_eq!(ConversionError::UnsupportedExtension { path: PathBuf::new() }.exit_code(), 1);
}
