use genlines_spigot::SpigotError;
use thiserror::Error;

/// Errors raised while setting up a line generator.
///
/// Producing lines never fails once a generator exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("mode={mode} requires modeArg")]
    MissingModeArg { mode: String },

    #[error("palette must contain at least one character")]
    EmptyPalette,

    #[error("cannot size pi digit source: {0}")]
    Spigot(#[from] SpigotError),
}
