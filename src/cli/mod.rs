//! Command-line interface for genlines
//!
//! ## Module Structure
//!
//! - `args`: clap definitions, trailing-positional sniffing, help text
//! - `prompt`: interactive prompts over any `BufRead`/`Write` pair
//! - `run`: entry point, configuration, error reporting
//! - `commands`: the generate command
//! - `tests`: end-to-end tests of `run_with` (cfg(test) only)

pub mod args;
mod commands;
mod prompt;
mod run;


pub use args::Cli;
pub use commands::{GenerateRequest, Outcome, execute_generate_command};
pub use prompt::Prompter;
pub use run::{run, run_with, utf8_args};
