use std::fmt;
use std::io;
use thiserror::Error;

use crate::exit_codes::ExitCode;

pub use genlines_lines::GeneratorError;

/// Top-level error type for a genlines run.
///
/// Every failure the CLI reports passes through this enum, which provides
/// a user-facing rendering ([`display_for_user`](Self::display_for_user))
/// and the process exit code ([`to_exit_code`](Self::to_exit_code)).
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Arguments, configuration, mode set-up |
/// | 74 | Prompt input, output file |
/// | 1 | Other errors |
///
/// ```rust
/// use genlines_utils::error::{ArgsError, GenLinesError};
/// use genlines_utils::exit_codes::ExitCode;
///
/// let err = GenLinesError::from(ArgsError::InvalidLines("-1".to_string()));
/// assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
/// assert!(err.display_for_user().starts_with("Error: "));
/// ```
#[derive(Error, Debug)]
pub enum GenLinesError {
    #[error("{0}")]
    Args(#[from] ArgsError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Generator(#[from] GeneratorError),

    #[error("Failed to read {what}: {source}")]
    Input {
        what: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {reason}")]
    Output { path: String, reason: String },

    #[error("{path} already exists. Not overwriting. Exiting.")]
    OutputExists { path: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Problems with the positional arguments or interactive answers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("invalid number of lines: {0:?} (expected a positive integer)")]
    InvalidLines(String),

    #[error("filename cannot be empty")]
    EmptyFilename,

    #[error("{lines} lines of width {width} is more characters than this platform can address")]
    TooManyCharacters { lines: usize, width: usize },

    #[error("no input while waiting for {what}")]
    InputClosed { what: String },

    #[error("argument {position} is not valid UTF-8: {lossy:?}")]
    NonUtf8Argument { position: usize, lossy: String },
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arguments,
    Configuration,
    Generation,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments => write!(f, "Arguments"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Generation => write!(f, "Generation"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

impl UserFriendlyError for ArgsError {
    fn user_message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidLines(_) => {
                Some("The first argument is the number of lines to generate.".to_string())
            }
            Self::EmptyFilename => {
                Some("The second argument is the file the lines are written to.".to_string())
            }
            Self::TooManyCharacters { .. } => None,
            Self::InputClosed { .. } => Some(
                "Missing arguments are read from standard input, which ended early.".to_string(),
            ),
            Self::NonUtf8Argument { .. } => {
                Some("Arguments, including the output filename, must be UTF-8.".to_string())
            }
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLines(_) => vec!["Pass a whole number greater than zero".to_string()],
            Self::EmptyFilename => vec!["Pass a non-empty output path".to_string()],
            Self::TooManyCharacters { .. } => {
                vec!["Reduce the number of lines or the line width".to_string()]
            }
            Self::InputClosed { .. } => {
                vec!["Pass <lines> and <filename> on the command line".to_string()]
            }
            Self::NonUtf8Argument { .. } => {
                vec!["Rename the target so its path is valid UTF-8".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Arguments
    }
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with an optional [defaults] section."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "'{key}' may come from the command line, the environment or .genlines/config.toml."
            )),
            Self::NotFound { .. } => {
                Some("A file passed with --config must exist.".to_string())
            }
            Self::DiscoveryFailed { .. } => Some(
                "genlines searches for .genlines/config.toml from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax of the configuration file".to_string(),
                "Only width, mode, mode_arg, overwrite and verbose are recognised".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "width" => vec!["Use a whole number greater than zero".to_string()],
                "mode" => vec!["Use one of: ascii, digits, upper, char, pi".to_string()],
                "mode_arg" => vec!["Pass the character after the mode, e.g. `char '#'`".to_string()],
                _ => vec![format!("Check the value given for '{key}'")],
            },
            Self::NotFound { path } => vec![
                format!("Create {path} or drop the --config flag"),
            ],
            Self::DiscoveryFailed { .. } => {
                vec!["Pass an explicit file with --config".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for GeneratorError {
    fn user_message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::MissingModeArg { .. } => {
                Some("char mode repeats the first character of modeArg.".to_string())
            }
            _ => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownMode(_) => vec!["Use one of: ascii, digits, upper, char, pi".to_string()],
            Self::MissingModeArg { .. } => {
                vec!["Pass the character after the mode, e.g. `char '#'`".to_string()]
            }
            Self::EmptyPalette => Vec::new(),
            Self::Spigot(_) => {
                vec!["Reduce the number of lines or the line width".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Generation
    }
}

impl UserFriendlyError for GenLinesError {
    fn user_message(&self) -> String {
        match self {
            Self::Args(err) => err.user_message(),
            Self::Config(err) => err.user_message(),
            Self::Generator(err) => err.user_message(),
            Self::Input { what, source } => format!("Failed to read {what}: {source}"),
            Self::Output { path, reason } => format!("Failed to write {path}: {reason}"),
            Self::OutputExists { path } => {
                format!("{path} appeared while generating and was left untouched")
            }
            Self::Io(err) => format!("File system operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Args(err) => err.context(),
            Self::Config(err) => err.context(),
            Self::Generator(err) => err.context(),
            Self::Input { .. } => None,
            Self::Output { .. } | Self::Io(_) => Some(
                "Lines are written to a temporary file next to the target and renamed into place."
                    .to_string(),
            ),
            Self::OutputExists { .. } => {
                Some("Overwriting was not permitted for this run.".to_string())
            }
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Args(err) => err.suggestions(),
            Self::Config(err) => err.suggestions(),
            Self::Generator(err) => err.suggestions(),
            Self::Input { .. } => Vec::new(),
            Self::Output { .. } | Self::Io(_) => vec![
                "Check that the target directory exists and is writable".to_string(),
                "Check available disk space".to_string(),
            ],
            Self::OutputExists { .. } => {
                vec!["Pass `y` after the filename to overwrite".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Args(_) => ErrorCategory::Arguments,
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Generator(_) => ErrorCategory::Generation,
            Self::Input { .. } => ErrorCategory::Arguments,
            Self::Output { .. } | Self::OutputExists { .. } | Self::Io(_) => {
                ErrorCategory::FileSystem
            }
        }
    }
}

impl GenLinesError {
    /// Get a user-friendly error message with context and actionable suggestions.
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Args(ArgsError::InputClosed { .. }) => ExitCode::IO,
            Self::Args(_) | Self::Config(_) | Self::Generator(_) => ExitCode::CLI_ARGS,
            Self::Input { .. } | Self::Output { .. } | Self::OutputExists { .. } => ExitCode::IO,
            Self::Io(_) => ExitCode::INTERNAL,
        }
    }

    /// Whether the usage hint should follow the error report.
    #[must_use]
    pub fn wants_usage_hint(&self) -> bool {
        matches!(self.category(), ErrorCategory::Arguments | ErrorCategory::Configuration)
            && !matches!(self, Self::Input { .. } | Self::Args(ArgsError::InputClosed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_errors_map_to_cli_args() {
        let err = GenLinesError::from(ArgsError::InvalidLines("abc".to_string()));
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(
            err.to_string(),
            r#"invalid number of lines: "abc" (expected a positive integer)"#
        );
        assert!(err.wants_usage_hint());
    }

    #[test]
    fn test_generator_errors_map_to_cli_args() {
        let err = GenLinesError::from(GeneratorError::UnknownMode("bananas".to_string()));
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(err.category(), ErrorCategory::Generation);
        assert!(!err.wants_usage_hint());
    }

    #[test]
    fn test_io_failures_map_to_io() {
        let output = GenLinesError::Output {
            path: "out.txt".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(output.to_exit_code(), ExitCode::IO);

        let closed = GenLinesError::from(ArgsError::InputClosed {
            what: "number of lines".to_string(),
        });
        assert_eq!(closed.to_exit_code(), ExitCode::IO);
        assert!(!closed.wants_usage_hint());
    }

    #[test]
    fn test_display_for_user_layout() {
        let err = GenLinesError::from(ConfigError::InvalidValue {
            key: "width".to_string(),
            value: "0".to_string(),
        });
        let rendered = err.display_for_user();

        assert!(rendered.starts_with("Error: Configuration 'width' has invalid value: 0\n"));
        assert!(rendered.contains("\nContext: "));
        assert!(rendered.contains("\nSuggestions:\n  • Use a whole number greater than zero\n"));
    }

    #[test]
    fn test_display_without_context_or_suggestions() {
        let err = GenLinesError::from(GeneratorError::EmptyPalette);
        assert_eq!(err.display_for_user(), format!("Error: {}\n", GeneratorError::EmptyPalette));
    }

    #[test]
    fn test_spigot_failures_surface_as_generator_errors() {
        let err = GenLinesError::from(GeneratorError::from(
            genlines_spigot::SpigotError::CapacityOverflow { capacity: usize::MAX },
        ));
        assert!(matches!(err, GenLinesError::Generator(GeneratorError::Spigot(_))));
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(err.category(), ErrorCategory::Generation);
    }

    #[test]
    fn test_non_utf8_argument_is_a_usage_error() {
        let err = GenLinesError::from(ArgsError::NonUtf8Argument {
            position: 2,
            lossy: "out\u{fffd}.txt".to_string(),
        });
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert!(err.wants_usage_hint());
        assert!(err.to_string().starts_with("argument 2 is not valid UTF-8"));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::FileSystem.to_string(), "File System");
        assert_eq!(ErrorCategory::Arguments.to_string(), "Arguments");
    }
}
