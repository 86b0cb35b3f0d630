//! CLI command implementations.

mod generate;

pub use generate::{GenerateRequest, Outcome, execute_generate_command};
