//! Configuration management for genlines
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > environment > `.genlines/config.toml` > built-in defaults.
//!
//! ```toml
//! [defaults]
//! width = 120
//! mode = "pi"
//! overwrite = false
//! ```

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use genlines_utils::types::ConfigSource;
pub use model::{Config, DEFAULT_WIDTH, Defaults, ENV_MODE, ENV_WIDTH};
