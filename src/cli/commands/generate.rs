//! Generate command implementation
//!
//! Resolves the overwrite question, prints progress, and streams the lines
//! through an atomic writer.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use camino::Utf8Path;
use tracing::info;

use genlines_lines::{Mode, build_generator};
use genlines_utils::atomic_write::{AtomicFileWriter, ReplacePolicy, is_already_exists};
use genlines_utils::error::{ArgsError, GenLinesError};

use crate::cli::prompt::Prompter;

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub lines: usize,
    pub filename: String,
    pub width: usize,
    pub mode: Mode,
    pub mode_arg: Option<String>,
    /// Pre-answered overwrite question.
    pub overwrite: Option<bool>,
    pub default_width: bool,
    pub default_mode: bool,
}

/// How a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written { bytes: u64, rename_retries: u32 },
    /// The target existed and overwriting was declined.
    Declined,
}

impl GenerateRequest {
    /// Characters the generator will be asked for in total.
    pub fn total_chars(&self) -> Result<usize, ArgsError> {
        self.lines
            .checked_mul(self.width)
            .ok_or(ArgsError::TooManyCharacters {
                lines: self.lines,
                width: self.width,
            })
    }

    fn default_note(&self) -> &'static str {
        match (self.default_width, self.default_mode) {
            (true, true) => " [using default width and mode]",
            (true, false) => " [using default width]",
            (false, true) => " [using default mode]",
            (false, false) => "",
        }
    }
}

/// Execute the generate command.
pub fn execute_generate_command<R: BufRead, W: Write>(
    request: &GenerateRequest,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome, GenLinesError> {
    let total_chars = request.total_chars()?;
    let filename = request.filename.as_str();

    let exists = Path::new(filename).exists();
    let overwrite_granted = if exists {
        match request.overwrite {
            Some(true) => {
                prompter.say(&format!("{filename} already exists. Overwriting..."))?;
                true
            }
            Some(false) => {
                prompter.say(&format!("{filename} already exists. Not overwriting. Exiting."))?;
                return Ok(Outcome::Declined);
            }
            None => {
                let answer = prompter
                    .prompt_yes_no(&format!("{filename} already exists. Overwrite? [y/n]: "))
                    .map_err(|source| GenLinesError::Input {
                        what: "overwrite answer".to_string(),
                        source,
                    })?
                    .ok_or_else(|| ArgsError::InputClosed {
                        what: "overwrite answer".to_string(),
                    })?;
                if !answer {
                    prompter.say("Not overwriting. Exiting.")?;
                    return Ok(Outcome::Declined);
                }
                true
            }
        }
    } else {
        false
    };

    let mut generator = build_generator(request.mode, request.mode_arg.as_deref(), total_chars)?;

    if request.mode == Mode::Pi {
        prompter.say(&format!(
            "Mode=pi will generate {total_chars} digits ({} lines × {} cols)",
            request.lines, request.width
        ))?;
    }
    prompter.say(&format!(
        "Generating {} lines (width={}, mode={}){} -> {filename}",
        request.lines,
        request.width,
        request.mode,
        request.default_note()
    ))?;

    let started = Instant::now();
    let output_error = |err: anyhow::Error| GenLinesError::Output {
        path: filename.to_string(),
        reason: format!("{err:#}"),
    };

    let mut writer = AtomicFileWriter::create(Utf8Path::new(filename)).map_err(output_error)?;
    for _ in 0..request.lines {
        writer
            .write_line(&generator.next_line(request.width))
            .map_err(output_error)?;
    }

    let policy = if overwrite_granted {
        ReplacePolicy::Replace
    } else {
        ReplacePolicy::KeepExisting
    };
    let result = writer.commit(policy).map_err(|err| {
        if is_already_exists(&err) {
            GenLinesError::OutputExists {
                path: filename.to_string(),
            }
        } else {
            output_error(err)
        }
    })?;

    info!(
        path = filename,
        lines = request.lines,
        bytes = result.bytes_written,
        rename_retries = result.rename_retry_count,
        duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "wrote output"
    );
    prompter.say("Done!")?;

    Ok(Outcome::Written {
        bytes: result.bytes_written,
        rename_retries: result.rename_retry_count,
    })
}
