/*!
 * # transcript-vtt
 *
 * A Rust library for turning speech-transcription JSON into WebVTT subtitles.
 *
 * ## Features
 *
 * - Convert transcription segments to WebVTT cues
 * - Validate WebVTT files against the standard cue-block grammar
 * - Canonicalize WebVTT formatting (timestamps, line endings, spacing)
 * - Shape-check transcription JSON before conversion
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcription`: Transcription and segment types
 * - `converter`: Timestamp formatting and JSON to VTT rendering
 * - `subtitle_processor`: WebVTT grammar (parser and serializer)
 * - `validation`: JSON shape checks, cue timing checks, and the validation service
 * - `app_controller`: Per-file conversion and validation runs
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod converter;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod transcription;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunMode, RunOutcome};
pub use converter::{format_timestamp, json_to_vtt};
pub use errors::{ConversionError, ShapeError, VttParseError};
pub use subtitle_processor::{ParsedVtt, VttCue, VttGrammar, WebVttParser};
pub use transcription::{Segment, Transcription};
pub use validation::{ValidationService, VttValidation, validate_json_shape};
