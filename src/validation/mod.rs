/*!
 * Validation module for transcription and subtitle content.
 *
 * - `shape`: Checks that JSON input has the transcription shape
 * - `timecodes`: Validates cue timing integrity
 * - `service`: Validates and canonicalizes WebVTT text through a grammar
 */

pub mod shape;
pub mod timecodes;
pub mod service;

// Re-export main types
pub use service::{ValidationService, VttValidation};
pub use shape::{check_json_shape, validate_json_shape};
pub use timecodes::{TimecodeIssue, TimecodeValidator, TimecodeValidatorConfig};
