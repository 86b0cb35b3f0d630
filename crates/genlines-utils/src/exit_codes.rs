//! Exit code constants for genlines.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Completed, including a declined overwrite |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid arguments, configuration or mode set-up |
//! | 74 | `IO` | Reading a prompt answer or writing the output file failed |

/// Process exit code.
///
/// ```rust
/// use genlines_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::CLI_ARGS.as_i32(), 2);
/// assert_eq!(ExitCode::SUCCESS, ExitCode::from_i32(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed (or the user declined to overwrite)
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments, configuration or mode
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// I/O error - prompt input or output file (sysexits `EX_IOERR`)
    pub const IO: ExitCode = ExitCode(74);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}
