/*!
 * Error types for the transcript-vtt application.
 *
 * This module contains custom error types for the conversion pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single problem reported by the WebVTT grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VttParseError {
    /// 1-based line number where the problem was found
    pub line: usize,
    /// Human-readable description
    pub message: String,
}

impl VttParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for VttParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Reasons a transcription document fails the shape check
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The text is not JSON, or a field is missing or has the wrong type
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that terminate a conversion or validation run
#[derive(Error, Debug)]
pub enum ConversionError {
    /// No input path was supplied on the command line
    #[error("Please provide an input file using --input or -i")]
    MissingInput,

    /// The input is neither `.json` nor `.vtt`
    #[error("Unsupported file extension for {path:?}: expected .json or .vtt")]
    UnsupportedExtension {
        /// Offending input path
        path: PathBuf,
    },

    /// The JSON input does not have the transcription shape
    #[error("Invalid transcription JSON in {path:?}: {source}")]
    InvalidJsonShape {
        /// Offending input path
        path: PathBuf,
        /// Why the shape check failed
        #[source]
        source: ShapeError,
    },

    /// Conversion produced VTT the grammar rejects
    #[error("Generated VTT for {path:?} is invalid ({} error(s)); the transcription segments are inconsistent", .errors.len())]
    InvalidGeneratedVtt {
        /// Input the VTT was generated from
        path: PathBuf,
        /// Grammar errors reported for the generated text
        errors: Vec<VttParseError>,
    },

    /// A `.vtt` input fails grammar validation
    #[error("VTT file {path:?} is invalid ({} error(s))", .errors.len())]
    InvalidSourceVtt {
        /// Offending input path
        path: PathBuf,
        /// Grammar errors reported for the file
        errors: Vec<VttParseError>,
    },

    /// Reading or writing the file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Grammar errors carried by the VTT validation failures
    pub fn vtt_errors(&self) -> &[VttParseError] {
        match self {
            Self::InvalidGeneratedVtt { errors, .. } | Self::InvalidSourceVtt { errors, .. } => errors,
            _ => &[],
        }
    }
}
