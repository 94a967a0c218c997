use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info};

use crate::app_config::Config;
use crate::converter::json_to_vtt;
use crate::errors::{ConversionError, VttParseError};
use crate::file_utils::{FileManager, FileType};
use crate::subtitle_processor::WebVttParser;
use crate::validation::{ValidationService, VttValidation, check_json_shape};

// @module: Application controller for conversion runs

/// What a run does once its input has been validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Validate, then write the canonical VTT
    Convert,
    /// Validate only; never write
    ValidateOnly,
}

/// Stages a single run passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingState {
    Start,
    Loaded,
    ShapeChecked,
    Converted,
    VttValidated,
    Done,
    Failed,
}

impl fmt::Display for ProcessingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "START",
            Self::Loaded => "LOADED",
            Self::ShapeChecked => "SHAPE_CHECKED",
            Self::Converted => "CONVERTED",
            Self::VttValidated => "VTT_VALIDATED",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        };
        write!(f, "{}", name)
    }
}

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Input file that was processed
    pub input: PathBuf,
    /// Detected input type
    pub file_type: FileType,
    /// File written, if any
    pub output: Option<PathBuf>,
    /// Cues in the validated document
    pub cue_count: usize,
}

// Tracks the current stage and logs every transition
struct StateTracker {
    state: ProcessingState,
}

impl StateTracker {
    fn new() -> Self {
        Self { state: ProcessingState::Start }
    }

    fn advance(&mut self, next: ProcessingState) {
        debug!("State: {} -> {}", self.state, next);
        self.state = next;
    }
}

/// Main application controller for JSON to VTT conversion
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Grammar-backed validator
    validator: ValidationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let validator = ValidationService::with_grammar(
            WebVttParser::with_timecode_config(config.timecode_config()),
        );

        Ok(Self { config, validator })
    }

    /// Process one input file.
    ///
    /// Nothing is written unless every validation step passed and `mode`
    /// is `RunMode::Convert`.
    pub fn run(&self, input: &Path, mode: RunMode) -> Result<RunOutcome, ConversionError> {
        let mut tracker = StateTracker::new();

        let result = match FileManager::detect_file_type(input) {
            FileType::Json => self.process_json(input, mode, &mut tracker),
            FileType::Vtt => self.process_vtt(input, mode, &mut tracker),
            FileType::Unknown => Err(ConversionError::UnsupportedExtension {
                path: input.to_path_buf(),
            }),
        };

        match &result {
            Ok(_) => tracker.advance(ProcessingState::Done),
            Err(_) => tracker.advance(ProcessingState::Failed),
        }

        result
    }

    fn process_json(
        &self,
        input: &Path,
        mode: RunMode,
        tracker: &mut StateTracker,
    ) -> Result<RunOutcome, ConversionError> {
        let raw = Self::load(input)?;
        tracker.advance(ProcessingState::Loaded);

        let transcription = check_json_shape(&raw).map_err(|source| ConversionError::InvalidJsonShape {
            path: input.to_path_buf(),
            source,
        })?;
        tracker.advance(ProcessingState::ShapeChecked);

        info!(
            "Converting {} segment(s) ({}, language: {}, duration: {:.3}s)",
            transcription.segment_count(),
            transcription.task,
            transcription.language,
            transcription.duration
        );
        let vtt = json_to_vtt(&transcription);
        tracker.advance(ProcessingState::Converted);

        let validation = self.validator.validate_and_serialize(&vtt);
        tracker.advance(ProcessingState::VttValidated);

        if !validation.is_valid {
            error!("Generated VTT content has issues; the transcription segments are inconsistent:");
            Self::log_validation_errors(&validation.errors);
            return Err(ConversionError::InvalidGeneratedVtt {
                path: input.to_path_buf(),
                errors: validation.errors,
            });
        }
        info!("VTT content is valid.");

        let output_path = FileManager::generate_output_path(input, &self.config.output_extension);
        self.finish(input, FileType::Json, mode, output_path, validation)
    }

    fn process_vtt(
        &self,
        input: &Path,
        mode: RunMode,
        tracker: &mut StateTracker,
    ) -> Result<RunOutcome, ConversionError> {
        let raw = Self::load(input)?;
        tracker.advance(ProcessingState::Loaded);

        let validation = self.validator.validate_and_serialize(&raw);
        tracker.advance(ProcessingState::VttValidated);

        if !validation.is_valid {
            error!("VTT content has issues:");
            Self::log_validation_errors(&validation.errors);
            return Err(ConversionError::InvalidSourceVtt {
                path: input.to_path_buf(),
                errors: validation.errors,
            });
        }
        info!("VTT content is valid.");

        self.finish(input, FileType::Vtt, mode, input.to_path_buf(), validation)
    }

    fn finish(
        &self,
        input: &Path,
        file_type: FileType,
        mode: RunMode,
        output_path: PathBuf,
        validation: VttValidation,
    ) -> Result<RunOutcome, ConversionError> {
        let output = match mode {
            RunMode::ValidateOnly => {
                debug!("Validate-only mode, skipping write of {:?}", output_path);
                None
            }
            RunMode::Convert => {
                FileManager::write_atomic(&output_path, &validation.canonical)
                    .map_err(|source| ConversionError::Io {
                        path: output_path.clone(),
                        source,
                    })?;
                info!("VTT file has been written: {:?}", output_path);
                Some(output_path)
            }
        };

        Ok(RunOutcome {
            input: input.to_path_buf(),
            file_type,
            output,
            cue_count: validation.cue_count,
        })
    }

    fn load(input: &Path) -> Result<String, ConversionError> {
        debug!("Reading {:?}", input);
        FileManager::read_to_string(input).map_err(|source| ConversionError::Io {
            path: input.to_path_buf(),
            source,
        })
    }

    fn log_validation_errors(errors: &[VttParseError]) {
        for (index, err) in errors.iter().enumerate() {
            error!("{}. {}", index + 1, err);
        }
    }
}
