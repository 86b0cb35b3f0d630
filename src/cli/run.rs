//! CLI entry point and dispatch logic
//!
//! `run()` handles every byte of output, including error reports, and returns
//! the exit code for `main` to apply.

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use tracing::debug;

use genlines_config::{CliArgs, Config};
use genlines_utils::error::{ArgsError, GenLinesError};
use genlines_utils::exit_codes::ExitCode;
use genlines_utils::logging::init_tracing;

use super::args::{self, Cli, Trailing};
use super::commands::{GenerateRequest, execute_generate_command};
use super::prompt::Prompter;

/// Main CLI execution function over the process streams.
pub fn run() -> Result<(), ExitCode> {
    let stderr = io::stderr();
    let args = match utf8_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => return Err(report(&err.into(), &mut stderr.lock())),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&args, stdin.lock(), stdout.lock(), &mut stderr.lock())
}

/// Convert raw arguments to strings, refusing any that are not UTF-8.
///
/// A lossy conversion would silently retarget the output file.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(position, arg)| {
            arg.into_string().map_err(|raw| ArgsError::NonUtf8Argument {
                position,
                lossy: raw.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

fn report<E: Write>(err: &GenLinesError, errors: &mut E) -> ExitCode {
    let _ = write!(errors, "{}", err.display_for_user());
    if err.wants_usage_hint() {
        let _ = writeln!(errors, "{}", args::help_hint());
    }
    err.to_exit_code()
}

/// Run with explicit arguments (including the program name) and streams.
pub fn run_with<R: BufRead, W: Write, E: Write>(
    args: &[String],
    input: R,
    output: W,
    errors: &mut E,
) -> Result<(), ExitCode> {
    let mut prompter = Prompter::new(input, output);

    match execute(args, &mut prompter) {
        Ok(()) => Ok(()),
        Err(Failure::Usage(err)) => {
            // clap has already formatted the message
            let _ = write!(errors, "{}", err.render());
            let _ = writeln!(errors, "{}", args::help_hint());
            Err(ExitCode::CLI_ARGS)
        }
        Err(Failure::Run(err)) => {
            let _ = prompter.output().flush();
            Err(report(&err, errors))
        }
    }
}

enum Failure {
    Usage(clap::Error),
    Run(GenLinesError),
}

impl From<GenLinesError> for Failure {
    fn from(err: GenLinesError) -> Self {
        Self::Run(err)
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Self::Run(GenLinesError::Io(err))
    }
}

fn execute<R: BufRead, W: Write>(
    args: &[String],
    prompter: &mut Prompter<R, W>,
) -> Result<(), Failure> {
    if let Some(first) = args.get(1) {
        if args::is_version_request(first) {
            prompter.say(&format!("genlines {}", env!("CARGO_PKG_VERSION")))?;
            return Ok(());
        }
        if args::is_help_request(first) {
            write!(prompter.output(), "{}", args::long_help())?;
            return Ok(());
        }
    }

    let cli = Cli::try_parse_from(args).map_err(Failure::Usage)?;

    if args.len() <= 1 {
        prompter.say(args::help_hint())?;
        prompter.say("")?;
    }

    let trailing = Trailing::sniff(&cli.rest);
    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        width: trailing.width,
        mode: trailing.mode,
        mode_arg: trailing.mode_arg,
        overwrite: trailing.overwrite,
        verbose: cli.verbose.then_some(true),
    };

    let config = Config::discover(&cli_args).map_err(GenLinesError::from)?;

    if let Err(err) = init_tracing(config.verbose()) {
        debug!(error = %err, "tracing already initialised");
    }
    if config.verbose() {
        let mut effective: Vec<_> = config.effective_config().into_iter().collect();
        effective.sort();
        for (key, (value, source)) in effective {
            debug!(%key, %value, %source, "effective configuration");
        }
    }

    let lines_input = match cli.lines {
        Some(lines) => lines,
        None => ask(prompter, "Enter number of lines: ", "number of lines")?,
    };
    let filename_input = match cli.filename {
        Some(filename) => filename,
        None => ask(prompter, "Enter filename: ", "filename")?,
    };

    let lines_input = lines_input.trim();
    let lines = args::parse_positive(lines_input)
        .ok_or_else(|| GenLinesError::from(ArgsError::InvalidLines(lines_input.to_string())))?;
    let filename = filename_input.trim();
    if filename.is_empty() {
        return Err(GenLinesError::from(ArgsError::EmptyFilename).into());
    }

    let request = GenerateRequest {
        lines,
        filename: filename.to_string(),
        width: config.width(),
        mode: config.mode().map_err(GenLinesError::from)?,
        mode_arg: config.mode_arg().map(str::to_string),
        overwrite: config.overwrite(),
        default_width: config.is_default("width"),
        default_mode: config.is_default("mode"),
    };
    debug!(?request, "resolved generate request");

    execute_generate_command(&request, prompter)?;
    Ok(())
}

fn ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    what: &str,
) -> Result<String, GenLinesError> {
    prompter
        .prompt_line(prompt)
        .map_err(|source| GenLinesError::Input {
            what: what.to_string(),
            source,
        })?
        .ok_or_else(|| {
            ArgsError::InputClosed {
                what: what.to_string(),
            }
            .into()
        })
}
