/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;

use anyhow::Result;
use transcript_vtt::file_utils::{FileManager, FileType};
use crate::common;

#[test]
fn test_detect_file_type_withKnownExtensions_shouldClassify() {
    assert_eq!(FileManager::detect_file_type("talk.json"), FileType::Json);
    assert_eq!(FileManager::detect_file_type("talk.JSON"), FileType::Json);
    assert_eq!(FileManager::detect_file_type("dir/talk.vtt"), FileType::Vtt);
    assert_eq!(FileManager::detect_file_type("talk.Vtt"), FileType::Vtt);
}

#[test]
fn test_detect_file_type_withOtherExtensions_shouldBeUnknown() {
    assert_eq!(FileManager::detect_file_type("talk.srt"), FileType::Unknown);
    assert_eq!(FileManager::detect_file_type("talk"), FileType::Unknown);
    assert_eq!(FileManager::detect_file_type("talk.json.bak"), FileType::Unknown);
}

/// Test that generate_output_path swaps only the final extension
#[test]
fn test_generate_output_path_withJsonInput_shouldReplaceExtension() {
    let output = FileManager::generate_output_path(Path::new("/tmp/in/talk.en.json"), "vtt");
    assert_eq!(output, Path::new("/tmp/in/talk.en.vtt"));
}

#[test]
fn test_read_to_string_withMissingFile_shouldReturnNotFound() {
    let err = FileManager::read_to_string("definitely_missing_12345.json").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_write_atomic_withNewFile_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out.vtt");

    FileManager::write_atomic(&target, "WEBVTT\n\n")?;

    assert_eq!(fs::read_to_string(&target)?, "WEBVTT\n\n");
    Ok(())
}

#[test]
fn test_write_atomic_withExistingFile_shouldReplaceAndLeaveNoTempFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = common::create_test_file(temp_dir.path(), "out.vtt", "old content that is longer")?;

    FileManager::write_atomic(&target, "new")?;

    assert_eq!(fs::read_to_string(&target)?, "new");
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_write_atomic_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("missing").join("out.vtt");

    assert!(FileManager::write_atomic(&target, "WEBVTT\n\n").is_err());
    Ok(())
}
