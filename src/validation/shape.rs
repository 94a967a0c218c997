/*!
 * Shape validation for transcription JSON.
 *
 * Only field presence and types are checked. Cross-field rules such as
 * `end >= start` are left to the VTT grammar.
 */

use log::debug;

use crate::errors::ShapeError;
use crate::transcription::Transcription;

/// Decode `raw` as a transcription, reporting why it was rejected
pub fn check_json_shape(raw: &str) -> Result<Transcription, ShapeError> {
    let transcription: Transcription = serde_json::from_str(raw)?;
    debug!(
        "Transcription shape ok: task={}, language={}, {} segment(s)",
        transcription.task,
        transcription.language,
        transcription.segment_count()
    );
    Ok(transcription)
}

/// Whether `raw` decodes as a transcription
pub fn validate_json_shape(raw: &str) -> bool {
    check_json_shape(raw).is_ok()
}
