use serde::Deserialize;

// @module: Speech-transcription document model

/// One timed unit of recognized speech
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    // @field: Segment number assigned by the transcription engine; any JSON number
    pub id: f64,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Recognized text, untrimmed
    pub text: String,
}

impl Segment {
    pub fn new(id: f64, start: f64, end: f64, text: impl Into<String>) -> Self {
        Segment {
            id,
            start,
            end,
            text: text.into(),
        }
    }
}

/// A complete transcription response. Fields beyond these five are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transcription {
    /// Task the engine performed, e.g. "transcribe"
    pub task: String,

    /// Detected or requested language code
    pub language: String,

    /// Audio duration in seconds
    pub duration: f64,

    /// Full transcript text
    pub text: String,

    /// Timed segments; order defines cue order
    pub segments: Vec<Segment>,
}

impl Transcription {
    /// Number of segments in the document
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
