use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

// @module: File utilities for conversion inputs and outputs

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Classify an input path by its extension (case-insensitive)
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> FileType {
        match path.as_ref().extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                match ext.as_str() {
                    "json" => FileType::Json,
                    "vtt" => FileType::Vtt,
                    _ => FileType::Unknown,
                }
            }
            None => FileType::Unknown,
        }
    }

    // @generates: Sibling path with the extension replaced
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, extension: &str) -> PathBuf {
        input_file.as_ref().with_extension(extension)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Write a string to a file atomically.
    ///
    /// Content goes to a temporary file in the target directory which is
    /// then renamed over `path`, so readers never observe a partial file.
    /// An existing file keeps its permissions.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(path).map_err(|e| e.error)?;
        debug!("Wrote {} bytes to {:?}", content.len(), path);

        Ok(())
    }
}

/// Enum representing the supported input types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Transcription JSON
    Json,
    /// WebVTT subtitle file
    Vtt,
    /// Anything else
    Unknown,
}
