use std::fmt;

use anyhow::{Context, Result, anyhow};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::converter::VTT_HEADER;
use crate::errors::VttParseError;
use crate::validation::timecodes::{TimecodeValidator, TimecodeValidatorConfig};

// @module: WebVTT parsing and serialization

// @const: Cue timing line, "<start> --> <end>" plus optional settings
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)[ \t]+-->[ \t]+(\S+)(?:[ \t]+(.*))?$").unwrap()
});

// @const: WebVTT timestamp, hours optional
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{2,}):)?([0-5]\d):([0-5]\d)\.(\d{3})$").unwrap()
});

// @struct: Single WebVTT cue
#[derive(Debug, Clone, PartialEq)]
pub struct VttCue {
    // @field: Optional cue identifier line
    pub identifier: Option<String>,

    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms
    pub end_ms: u64,

    // @field: Raw cue settings after the end timestamp
    pub settings: Option<String>,

    // @field: Cue payload, lines joined with '\n'
    pub text: String,
}

impl VttCue {
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        VttCue {
            identifier: None,
            start_ms,
            end_ms,
            settings: None,
            text: text.into(),
        }
    }

    /// Parse a WebVTT timestamp (`[hh:]mm:ss.mmm`) to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let caps = TIMESTAMP_REGEX
            .captures(timestamp)
            .ok_or_else(|| anyhow!("Invalid timestamp format: {}", timestamp))?;

        let hours: u64 = match caps.get(1) {
            Some(m) => m.as_str().parse().context("Failed to parse hours")?,
            None => 0,
        };
        let minutes: u64 = caps[2].parse().context("Failed to parse minutes")?;
        let seconds: u64 = caps[3].parse().context("Failed to parse seconds")?;
        let millis: u64 = caps[4].parse().context("Failed to parse milliseconds")?;

        hours
            .checked_mul(3_600_000)
            .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1_000 + millis))
            .ok_or_else(|| anyhow!("Timestamp out of range: {}", timestamp))
    }

    /// Format milliseconds as HH:MM:SS.mmm
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }

    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_ms)
    }

    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_ms)
    }
}

impl fmt::Display for VttCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = &self.identifier {
            writeln!(f, "{}", id)?;
        }
        write!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        if let Some(settings) = &self.settings {
            write!(f, " {}", settings)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Cues and problems found while parsing a WebVTT document
#[derive(Debug, Clone, Default)]
pub struct ParsedVtt {
    /// Cues in document order
    pub cues: Vec<VttCue>,

    /// Grammar errors; any entry makes the document invalid
    pub errors: Vec<VttParseError>,

    /// Advisory findings that do not affect validity
    pub warnings: Vec<VttParseError>,
}

impl ParsedVtt {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A WebVTT grammar: parses text into cues and renders cues back to text
pub trait VttGrammar {
    fn parse(&self, content: &str) -> ParsedVtt;

    fn serialize(&self, cues: &[VttCue]) -> String;
}

/// Minimal standard WebVTT parser and serializer
#[derive(Debug, Clone, Default)]
pub struct WebVttParser {
    timecodes: TimecodeValidator,
}

impl WebVttParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timecode_config(config: TimecodeValidatorConfig) -> Self {
        Self {
            timecodes: TimecodeValidator::with_config(config),
        }
    }

    fn is_signature(line: &str) -> bool {
        match line.strip_prefix(VTT_HEADER) {
            Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t']),
            None => false,
        }
    }

    // NOTE, STYLE and REGION blocks carry no cues
    fn is_non_cue_block(first_line: &str) -> bool {
        ["NOTE", "STYLE", "REGION"].iter().any(|keyword| {
            first_line.strip_prefix(*keyword).is_some_and(|rest| {
                rest.is_empty() || rest.starts_with([' ', '\t'])
            })
        })
    }

    /// Parse one blank-line-delimited block of (line number, text) pairs
    fn parse_block(&self, block: &[(usize, &str)], parsed: &mut ParsedVtt) {
        let Some(&(first_line_no, first_line)) = block.first() else {
            return;
        };

        if Self::is_non_cue_block(first_line) {
            debug!("Skipping {} block at line {}", first_line.split_whitespace().next().unwrap_or(""), first_line_no);
            return;
        }

        let (identifier, timing_idx) = if first_line.contains("-->") {
            (None, 0)
        } else if block.get(1).is_some_and(|(_, line)| line.contains("-->")) {
            (Some(first_line.to_string()), 1)
        } else {
            parsed.errors.push(VttParseError::new(
                first_line_no,
                "Cue identifier cannot be standalone.",
            ));
            return;
        };

        let (timing_line_no, timing_line) = block[timing_idx];
        let Some(caps) = TIMING_REGEX.captures(timing_line.trim()) else {
            parsed.errors.push(VttParseError::new(
                timing_line_no,
                format!("Malformed timing line: {}", timing_line.trim()),
            ));
            return;
        };

        let start_ms = match VttCue::parse_timestamp(&caps[1]) {
            Ok(ms) => ms,
            Err(e) => {
                parsed.errors.push(VttParseError::new(timing_line_no, format!("Invalid start timestamp: {}", e)));
                return;
            }
        };
        let end_ms = match VttCue::parse_timestamp(&caps[2]) {
            Ok(ms) => ms,
            Err(e) => {
                parsed.errors.push(VttParseError::new(timing_line_no, format!("Invalid end timestamp: {}", e)));
                return;
            }
        };

        let mut text_lines = Vec::with_capacity(block.len() - timing_idx - 1);
        for &(line_no, line) in &block[timing_idx + 1..] {
            if line.contains("-->") {
                parsed.errors.push(VttParseError::new(line_no, "Cue text cannot contain \"-->\"."));
            }
            text_lines.push(line);
        }

        let cue = VttCue {
            identifier,
            start_ms,
            end_ms,
            settings: caps.get(3).map(|m| m.as_str().trim().to_string()).filter(|s| !s.is_empty()),
            text: text_lines.join("\n"),
        };

        for issue in self.timecodes.check_cue(&cue, parsed.cues.last()) {
            let entry = VttParseError::new(timing_line_no, issue.to_string());
            if issue.is_error() {
                parsed.errors.push(entry);
            } else {
                parsed.warnings.push(entry);
            }
        }

        parsed.cues.push(cue);
    }
}

impl VttGrammar for WebVttParser {
    fn parse(&self, content: &str) -> ParsedVtt {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut parsed = ParsedVtt::default();

        if !Self::is_signature(lines[0]) {
            parsed.errors.push(VttParseError::new(
                1,
                "No valid signature. (File needs to start with \"WEBVTT\".)",
            ));
            return parsed;
        }

        // Header text runs until the first blank line
        let mut idx = 1;
        while idx < lines.len() && !lines[idx].trim().is_empty() {
            if lines[idx].contains("-->") {
                parsed.errors.push(VttParseError::new(idx + 1, "No blank line after the signature."));
                break;
            }
            idx += 1;
        }

        let mut block: Vec<(usize, &str)> = Vec::new();
        for (i, line) in lines.iter().enumerate().skip(idx) {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    self.parse_block(&block, &mut parsed);
                    block.clear();
                }
            } else {
                block.push((i + 1, *line));
            }
        }
        if !block.is_empty() {
            self.parse_block(&block, &mut parsed);
        }

        debug!(
            "Parsed WebVTT: {} cue(s), {} error(s), {} warning(s)",
            parsed.cues.len(),
            parsed.errors.len(),
            parsed.warnings.len()
        );

        parsed
    }

    fn serialize(&self, cues: &[VttCue]) -> String {
        let mut output = format!("{}\n\n", VTT_HEADER);
        for cue in cues {
            output.push_str(&cue.to_string());
        }
        output
    }
}
