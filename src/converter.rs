use crate::transcription::Transcription;

// @module: Transcription to WebVTT conversion

/// WebVTT file signature
pub const VTT_HEADER: &str = "WEBVTT";

/// Format seconds as a WebVTT timestamp (HH:MM:SS.mmm).
///
/// Every component is truncated, never rounded, so sub-millisecond
/// fractions are dropped. Hours grow past two digits when needed.
/// Negative and NaN inputs are clamped to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let millis = ((seconds % 1.0) * 1000.0).floor() as u64;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Render a transcription as WebVTT text.
///
/// Segments are emitted in input order without any ordering or overlap
/// checks; defects surface when the result is validated.
pub fn json_to_vtt(transcription: &Transcription) -> String {
    let mut vtt = format!("{}\n\n", VTT_HEADER);

    for segment in &transcription.segments {
        vtt.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_timestamp(segment.start),
            format_timestamp(segment.end),
            segment.text.trim()
        ));
    }

    vtt
}
