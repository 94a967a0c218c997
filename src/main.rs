// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};

use transcript_vtt::app_config::{Config, LogLevel};
use transcript_vtt::{ConversionError, Controller, RunMode};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for transcript-vtt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transcript-vtt - speech transcription JSON to WebVTT
///
/// Converts transcription JSON into WebVTT subtitles, and validates or
/// canonicalizes existing WebVTT files.
#[derive(Parser, Debug)]
#[command(name = "transcript-vtt")]
#[command(version)]
#[command(about = "Convert transcription JSON to WebVTT and validate VTT files")]
#[command(long_about = "transcript-vtt converts speech-transcription JSON into WebVTT subtitles.

EXAMPLES:
    transcript-vtt -i talk.json              # Write talk.vtt next to the input
    transcript-vtt -i talk.json -v           # Check the conversion without writing
    transcript-vtt -i talk.vtt               # Validate and rewrite talk.vtt in canonical form
    transcript-vtt -i talk.vtt -v -s         # Validate silently; the exit code is the answer
    transcript-vtt completions bash > transcript-vtt.bash

EXIT CODES:
    0  success, or the input is valid
    1  any failure: missing input, unsupported extension, invalid JSON,
       invalid VTT, or an I/O error")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file (.json transcription or .vtt subtitles)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Only check validity; never write output
    #[arg(short, long)]
    validate: bool,

    /// Suppress all output
    #[arg(short, long)]
    silent: bool,

    /// Optional JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "transcript-vtt", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let initial_level = if cli.silent { LevelFilter::Off } else { LevelFilter::Info };
    // Only fails if a logger is already installed
    let _ = CustomLogger::init(initial_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let code = e
                .downcast_ref::<ConversionError>()
                .map_or(1, ConversionError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(options: CommandLineOptions) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => Config::default(),
    };

    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }
    if !options.silent {
        log::set_max_level(config.log_level.into());
    }

    let input = options.input.ok_or(ConversionError::MissingInput)?;
    let mode = if options.validate { RunMode::ValidateOnly } else { RunMode::Convert };

    let controller = Controller::with_config(config)?;
    let outcome = controller.run(&input, mode)?;

    debug!(
        "Processed {:?} ({:?}): {} cue(s), output: {:?}",
        outcome.input, outcome.file_type, outcome.cue_count, outcome.output
    );

    Ok(())
}
