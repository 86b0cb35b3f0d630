//! CLI argument definitions and parsing structures
//!
//! clap handles the flags and collects the positionals; the order-sensitive
//! interpretation of the trailing `[y|n] [width] [mode] [modeArg]` tokens
//! lives in [`Trailing::sniff`].

use clap::Parser;
use std::path::PathBuf;

/// Tokens that print the long help when given as the first argument.
pub const HELP_TOKENS: [&str; 4] = ["-h", "--help", "help", "/?"];

/// Tokens that print the version when given as the first argument.
pub const VERSION_TOKENS: [&str; 4] = ["version", "-v", "--version", "/v"];

/// genlines - generate a text file of fixed-width lines
#[derive(Parser, Debug)]
#[command(name = "genlines")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Number of lines to generate (prompted when omitted)
    pub lines: Option<String>,

    /// Output file name (prompted when omitted)
    pub filename: Option<String>,

    /// Optional `[y|n] [width] [mode] [modeArg]`
    #[arg(value_name = "ARGS")]
    pub rest: Vec<String>,

    /// Path to configuration file (overrides discovery)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Interpretation of the optional positionals after `<filename>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailing {
    pub overwrite: Option<bool>,
    pub width: Option<usize>,
    pub mode: Option<String>,
    pub mode_arg: Option<String>,
}

impl Trailing {
    /// Each optional slot is claimed only if its token fits, in this order:
    /// a yes/no answer, then a positive width, then any token as the mode
    /// (trimmed and lower-cased), then the mode argument. Extra tokens are ignored.
    #[must_use]
    pub fn sniff(rest: &[String]) -> Self {
        let mut tokens = rest.iter().peekable();
        let mut trailing = Self::default();

        if let Some(answer) = tokens.peek().and_then(|token| parse_yes_no(token)) {
            trailing.overwrite = Some(answer);
            tokens.next();
        }

        if let Some(width) = tokens.peek().and_then(|token| parse_positive(token)) {
            trailing.width = Some(width);
            tokens.next();
        }

        trailing.mode = tokens.next().map(|token| token.trim().to_lowercase());
        trailing.mode_arg = tokens.next().cloned();
        trailing
    }
}

/// `y`/`yes` or `n`/`no`, any case, surrounding whitespace ignored.
#[must_use]
pub fn parse_yes_no(token: &str) -> Option<bool> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("y") || token.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if token.eq_ignore_ascii_case("n") || token.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// A whole number greater than zero.
#[must_use]
pub fn parse_positive(token: &str) -> Option<usize> {
    token.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Whether `first` (the first raw argument) asks for help.
#[must_use]
pub fn is_help_request(first: &str) -> bool {
    let first = first.trim().to_lowercase();
    HELP_TOKENS.contains(&first.as_str())
}

/// Whether `first` (the first raw argument) asks for the version.
#[must_use]
pub fn is_version_request(first: &str) -> bool {
    let first = first.trim().to_lowercase();
    VERSION_TOKENS.contains(&first.as_str())
}

/// One-line pointer to the help, phrased for the host platform.
#[must_use]
pub fn help_hint() -> &'static str {
    if cfg!(windows) {
        r#"Tip: run "genlines /?" for parameters and modes."#
    } else {
        r#"Tip: run "genlines -h" for parameters and modes."#
    }
}

/// Long help text.
#[must_use]
pub fn long_help() -> String {
    format!(
        r#"genlines v{version}
Repository: {repository}

Generate a text file with N lines of repeatable content.

Usage:
  genlines <lines> <filename> [y|n] [width] [mode] [modeArg]
  genlines /?
  genlines help
  genlines -h
  genlines --help
  genlines version
  genlines --version

Parameters (positional):
  lines        Number of lines to generate (required unless prompted)
  filename     Output file name (required unless prompted)

Optional parameters:
  y | n        Auto-answer overwrite prompt if file already exists
  width        Line width (columns). Default: 80
  mode         Content generation mode. Default: ascii
  modeArg      Additional argument for selected mode

Flags:
  --config <PATH>  Read defaults from PATH instead of .genlines/config.toml
  --verbose        Log diagnostics to stderr

Modes:
  ascii        Printable ASCII characters (32-126)
  digits       Digits 0-9
  upper        Uppercase letters A-Z
  char         Repeat a single character (requires modeArg)
               Example: genlines 100 out.txt y 80 char #
  pi           Digits of pi mapped to printable ASCII characters
               Total digits generated = lines x width

Configuration:
  Precedence: arguments > GENLINES_WIDTH / GENLINES_MODE > config file > defaults.
  The config file is found by searching upward from the current directory for
  .genlines/config.toml; its [defaults] table may set width, mode, mode_arg,
  overwrite and verbose.

Notes:
  - If parameters are omitted, the program will prompt interactively.
  - Defaults are width=80 and mode=ascii.
  - A modeArg starting with '-' must follow a leading --, which ends flag parsing:
      genlines -- 100 dashes.txt y 80 char -x

Examples:
  genlines 1000 lines.txt
  genlines 1000 lines.txt y
  genlines 1000 uppercase.txt y 120 upper
  genlines 1000 characters.txt y 80 char #
  genlines 1000 pi.txt n 80 pi
"#,
        version = env!("CARGO_PKG_VERSION"),
        repository = env!("CARGO_PKG_REPOSITORY"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_sniff_full_set() {
        let trailing = Trailing::sniff(&tokens(&["Y", "120", " UPPER ", "x", "ignored"]));
        assert_eq!(
            trailing,
            Trailing {
                overwrite: Some(true),
                width: Some(120),
                mode: Some("upper".to_string()),
                mode_arg: Some("x".to_string()),
            }
        );
    }

    #[test]
    fn test_sniff_skips_slots_that_do_not_fit() {
        let trailing = Trailing::sniff(&tokens(&["pi"]));
        assert_eq!(trailing.overwrite, None);
        assert_eq!(trailing.width, None);
        assert_eq!(trailing.mode.as_deref(), Some("pi"));

        let trailing = Trailing::sniff(&tokens(&["40", "digits"]));
        assert_eq!(trailing.width, Some(40));
        assert_eq!(trailing.mode.as_deref(), Some("digits"));

        let trailing = Trailing::sniff(&tokens(&["no", "char", "#"]));
        assert_eq!(trailing.overwrite, Some(false));
        assert_eq!(trailing.width, None);
        assert_eq!(trailing.mode.as_deref(), Some("char"));
        assert_eq!(trailing.mode_arg.as_deref(), Some("#"));
    }

    #[test]
    fn test_sniff_non_positive_width_becomes_mode() {
        let trailing = Trailing::sniff(&tokens(&["y", "0"]));
        assert_eq!(trailing.width, None);
        assert_eq!(trailing.mode.as_deref(), Some("0"));
    }

    #[test]
    fn test_sniff_nothing() {
        assert_eq!(Trailing::sniff(&[]), Trailing::default());
    }

    #[test]
    fn test_yes_no_tokens() {
        for yes in ["y", "Y", "yes", " YES "] {
            assert_eq!(parse_yes_no(yes), Some(true));
        }
        for no in ["n", "N", "no", "No"] {
            assert_eq!(parse_yes_no(no), Some(false));
        }
        for other in ["", "yep", "1", "nope"] {
            assert_eq!(parse_yes_no(other), None);
        }
    }

    #[test]
    fn test_positive_numbers() {
        assert_eq!(parse_positive(" 80 "), Some(80));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("wide"), None);
    }

    #[test]
    fn test_help_and_version_tokens() {
        for token in ["-h", "--HELP", " help ", "/?"] {
            assert!(is_help_request(token), "{token}");
        }
        for token in ["version", "-V", "--version", "/v"] {
            assert!(is_version_request(token), "{token}");
        }
        assert!(!is_help_request("10"));
        assert!(!is_version_request("-h"));
    }

    #[test]
    fn test_clap_collects_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "genlines", "10", "out.txt", "y", "40", "pi", "--verbose", "--config", "c.toml",
        ])
        .unwrap();
        assert_eq!(cli.lines.as_deref(), Some("10"));
        assert_eq!(cli.filename.as_deref(), Some("out.txt"));
        assert_eq!(cli.rest, ["y", "40", "pi"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_negative_lines_reach_validation() {
        let cli = Cli::try_parse_from(["genlines", "-5", "out.txt"]).unwrap();
        assert_eq!(cli.lines.as_deref(), Some("-5"));
    }

    #[test]
    fn test_long_help_mentions_every_mode() {
        let help = long_help();
        for mode in ["ascii", "digits", "upper", "char", "pi"] {
            assert!(help.contains(mode));
        }
        assert!(help.starts_with(&format!("genlines v{}", env!("CARGO_PKG_VERSION"))));
        assert!(help.contains("genlines -- 100 dashes.txt y 80 char -x"));
    }

    #[test]
    fn test_double_dash_passes_dashed_mode_args() {
        let cli =
            Cli::try_parse_from(["genlines", "--", "100", "dashes.txt", "y", "80", "char", "-x"])
                .unwrap();
        assert_eq!(cli.lines.as_deref(), Some("100"));
        assert_eq!(cli.filename.as_deref(), Some("dashes.txt"));
        let trailing = Trailing::sniff(&cli.rest);
        assert_eq!(trailing.mode.as_deref(), Some("char"));
        assert_eq!(trailing.mode_arg.as_deref(), Some("-x"));

        let cli = Cli::try_parse_from(["genlines", "--", "1", "out.txt", "char", "--"]).unwrap();
        assert_eq!(Trailing::sniff(&cli.rest).mode_arg.as_deref(), Some("--"));
    }
}
