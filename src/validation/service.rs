/*!
 * Validation service wrapping a WebVTT grammar.
 *
 * This module provides a single entry point that parses VTT text, reports
 * whether it is valid, and re-renders the parsed cues in canonical form.
 */

use log::{debug, warn};

use crate::errors::VttParseError;
use crate::subtitle_processor::{VttGrammar, WebVttParser};

/// Result of validating and re-serializing a VTT document
#[derive(Debug, Clone)]
pub struct VttValidation {
    /// True when the grammar reported no errors
    pub is_valid: bool,

    /// Grammar errors in document order
    pub errors: Vec<VttParseError>,

    /// Advisory findings, never affecting validity
    pub warnings: Vec<VttParseError>,

    /// Serializer output for the parsed cues
    pub canonical: String,

    /// Number of cues the grammar accepted
    pub cue_count: usize,
}

/// Validates and canonicalizes WebVTT text through a grammar
#[derive(Debug, Clone, Default)]
pub struct ValidationService<G = WebVttParser> {
    grammar: G,
}

impl ValidationService {
    /// Create a service backed by the built-in WebVTT parser
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: VttGrammar> ValidationService<G> {
    /// Create a service backed by a custom grammar
    pub fn with_grammar(grammar: G) -> Self {
        Self { grammar }
    }

    /// Parse `vtt_text`, collect errors, and serialize the parsed cues
    pub fn validate_and_serialize(&self, vtt_text: &str) -> VttValidation {
        let parsed = self.grammar.parse(vtt_text);
        let canonical = self.grammar.serialize(&parsed.cues);

        for warning in &parsed.warnings {
            warn!("VTT {}", warning);
        }

        debug!(
            "VTT validation: {} cue(s), {} error(s)",
            parsed.cues.len(),
            parsed.errors.len()
        );

        VttValidation {
            is_valid: parsed.errors.is_empty(),
            cue_count: parsed.cues.len(),
            errors: parsed.errors,
            warnings: parsed.warnings,
            canonical,
        }
    }
}
