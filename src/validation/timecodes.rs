/*!
 * Timecode validation for WebVTT cues.
 *
 * This module checks that cue timings are:
 * - Logically consistent (start < end)
 * - Ordered by start time across the document
 * - Optionally non-overlapping (advisory only)
 */

use log::debug;

use crate::subtitle_processor::VttCue;

/// Types of timecode issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimecodeIssue {
    /// End time is not after start time
    InvalidTimeRange {
        start_ms: u64,
        end_ms: u64,
    },
    /// Cue starts before the previous cue
    StartBeforePreviousCue {
        start_ms: u64,
        previous_start_ms: u64,
    },
    /// Cue starts before the previous cue ends
    OverlapsWithCue {
        overlap_ms: u64,
    },
}

impl TimecodeIssue {
    /// Whether the issue makes the document invalid
    pub fn is_error(&self) -> bool {
        !matches!(self, TimecodeIssue::OverlapsWithCue { .. })
    }
}

impl std::fmt::Display for TimecodeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimecodeIssue::InvalidTimeRange { start_ms, end_ms } => {
                write!(
                    f,
                    "End timestamp is not greater than start timestamp ({} --> {})",
                    VttCue::format_timestamp(*start_ms),
                    VttCue::format_timestamp(*end_ms)
                )
            }
            TimecodeIssue::StartBeforePreviousCue { start_ms, previous_start_ms } => {
                write!(
                    f,
                    "Start timestamp {} is earlier than the previous cue's start {}",
                    VttCue::format_timestamp(*start_ms),
                    VttCue::format_timestamp(*previous_start_ms)
                )
            }
            TimecodeIssue::OverlapsWithCue { overlap_ms } => {
                write!(f, "Overlaps with the previous cue by {}ms", overlap_ms)
            }
        }
    }
}

/// Configuration for timecode validation
#[derive(Debug, Clone)]
pub struct TimecodeValidatorConfig {
    /// Whether to report overlaps as warnings
    pub check_overlaps: bool,
}

impl Default for TimecodeValidatorConfig {
    fn default() -> Self {
        Self {
            check_overlaps: true,
        }
    }
}

/// Timecode validator for WebVTT cues
#[derive(Debug, Clone, Default)]
pub struct TimecodeValidator {
    config: TimecodeValidatorConfig,
}

impl TimecodeValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TimecodeValidatorConfig) -> Self {
        Self { config }
    }

    /// Check one cue against the cue that precedes it in the document
    pub fn check_cue(&self, cue: &VttCue, previous: Option<&VttCue>) -> Vec<TimecodeIssue> {
        let mut issues = Vec::new();

        if cue.end_ms <= cue.start_ms {
            issues.push(TimecodeIssue::InvalidTimeRange {
                start_ms: cue.start_ms,
                end_ms: cue.end_ms,
            });
        }

        if let Some(previous) = previous {
            if cue.start_ms < previous.start_ms {
                issues.push(TimecodeIssue::StartBeforePreviousCue {
                    start_ms: cue.start_ms,
                    previous_start_ms: previous.start_ms,
                });
            } else if self.config.check_overlaps && previous.end_ms > cue.start_ms {
                issues.push(TimecodeIssue::OverlapsWithCue {
                    overlap_ms: previous.end_ms - cue.start_ms,
                });
            }
        }

        if !issues.is_empty() {
            debug!("Cue at {} has {} timing issue(s)", cue.format_start_time(), issues.len());
        }

        issues
    }
}
