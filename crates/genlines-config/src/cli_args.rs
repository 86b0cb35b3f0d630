use std::path::PathBuf;

/// Values supplied on the command line, the highest-precedence layer.
///
/// `None` means "not given"; the lower layers are consulted instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub width: Option<usize>,
    pub mode: Option<String>,
    pub mode_arg: Option<String>,
    pub overwrite: Option<bool>,
    pub verbose: Option<bool>,
}
