use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use genlines_utils::error::ConfigError;
use tracing::debug;

use crate::model::TomlConfig;
use crate::{CliArgs, Config, ConfigSource, Defaults, ENV_MODE, ENV_WIDTH};

impl Config {
    /// Discover and load configuration with precedence: CLI > env > file > defaults
    ///
    /// Uses the current working directory for config file discovery when no
    /// explicit path is provided in `cli_args`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let start_dir = env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot determine current directory: {e}"),
        })?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::discover_from_with_env(start_dir, cli_args, |key| env::var(key).ok())
    }

    /// Like [`discover_from`](Self::discover_from), reading `GENLINES_*`
    /// variables through `lookup` instead of the process environment.
    pub fn discover_from_with_env<F>(
        start_dir: &Path,
        cli_args: &CliArgs,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaults = Defaults::default();
        let mut source_attribution = HashMap::new();

        let config_path = match &cli_args.config_path {
            Some(explicit) if !explicit.is_file() => {
                return Err(ConfigError::NotFound {
                    path: explicit.display().to_string(),
                });
            }
            Some(explicit) => Some(explicit.clone()),
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)?;
            debug!(path = %path.display(), "loaded config file");
            if let Some(file_defaults) = file_config.defaults {
                apply_layer(
                    &mut defaults,
                    &mut source_attribution,
                    file_defaults,
                    ConfigSource::Config,
                );
            }
        }

        apply_layer(
            &mut defaults,
            &mut source_attribution,
            env_layer(&lookup)?,
            ConfigSource::Env,
        );

        apply_layer(
            &mut defaults,
            &mut source_attribution,
            Defaults {
                width: cli_args.width,
                mode: cli_args.mode.clone(),
                mode_arg: cli_args.mode_arg.clone(),
                overwrite: cli_args.overwrite,
                verbose: cli_args.verbose,
            },
            ConfigSource::Cli,
        );

        let config = Self {
            defaults,
            source_attribution,
            config_path,
        };
        debug!(
            width = config.width(),
            width_source = %config.source_of("width"),
            mode = config.defaults.mode.as_deref().unwrap_or("ascii"),
            mode_source = %config.source_of("mode"),
            "resolved configuration"
        );

        config.validate()?;
        Ok(config)
    }

    /// Walk up from `start_dir` looking for `.genlines/config.toml`.
    ///
    /// The search stops at the filesystem root or at a repository root
    /// (`.git`, `.hg` or `.svn`).
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(".genlines").join("config.toml");
            if candidate.is_file() {
                return Some(candidate);
            }

            if [".git", ".hg", ".svn"]
                .iter()
                .any(|marker| dir.join(marker).exists())
            {
                break;
            }
        }
        None
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::InvalidFile(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {e}", path.display())))
    }
}

/// Overlay every value `layer` sets onto `defaults`, recording `source`.
fn apply_layer(
    defaults: &mut Defaults,
    attribution: &mut HashMap<String, ConfigSource>,
    layer: Defaults,
    source: ConfigSource,
) {
    let mut record = |key: &str| {
        attribution.insert(key.to_string(), source);
    };

    if let Some(width) = layer.width {
        defaults.width = Some(width);
        record("width");
    }
    if let Some(mode) = layer.mode {
        defaults.mode = Some(mode);
        record("mode");
    }
    if let Some(mode_arg) = layer.mode_arg {
        defaults.mode_arg = Some(mode_arg);
        record("mode_arg");
    }
    if let Some(overwrite) = layer.overwrite {
        defaults.overwrite = Some(overwrite);
        record("overwrite");
    }
    if let Some(verbose) = layer.verbose {
        defaults.verbose = Some(verbose);
        record("verbose");
    }
}

fn env_layer<F>(lookup: &F) -> Result<Defaults, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let width = non_empty(ENV_WIDTH)
        .map(|raw| {
            raw.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                key: "width".to_string(),
                value: format!("{ENV_WIDTH}={raw} is not a whole number"),
            })
        })
        .transpose()?;

    Ok(Defaults {
        width,
        mode: non_empty(ENV_MODE),
        ..Defaults::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let config_dir = dir.join(".genlines");
        fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join("config.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_any_layer() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let config = Config::discover_from_with_env(dir.path(), &CliArgs::default(), no_env).unwrap();
        assert_eq!(config.width(), 80);
        assert_eq!(config.mode().unwrap(), genlines_lines::Mode::Ascii);
        assert!(config.is_default("width"));
        assert!(config.is_default("mode"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_discovery_walks_up_to_parent() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "[defaults]\nwidth = 40\n");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config_file_from(&nested), Some(path));
    }

    #[test]
    fn test_discovery_stops_at_repository_root() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[defaults]\nwidth = 40\n");
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(Config::discover_config_file_from(&repo), None);
    }

    #[test]
    fn test_repository_root_config_is_found() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let path = write_config(dir.path(), "");

        assert_eq!(Config::discover_config_file_from(dir.path()), Some(path));
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        write_config(
            dir.path(),
            "[defaults]\nwidth = 40\nmode = \"upper\"\nmode_arg = \"#\"\noverwrite = true\n",
        );

        let env = |key: &str| match key {
            ENV_WIDTH => Some("60".to_string()),
            ENV_MODE => Some("digits".to_string()),
            _ => None,
        };
        let cli = CliArgs {
            mode: Some("pi".to_string()),
            ..CliArgs::default()
        };

        let config = Config::discover_from_with_env(dir.path(), &cli, env).unwrap();
        assert_eq!(config.width(), 60);
        assert_eq!(config.source_of("width"), ConfigSource::Env);
        assert_eq!(config.mode().unwrap(), genlines_lines::Mode::Pi);
        assert_eq!(config.source_of("mode"), ConfigSource::Cli);
        assert_eq!(config.mode_arg(), Some("#"));
        assert_eq!(config.source_of("mode_arg"), ConfigSource::Config);
        assert_eq!(config.overwrite(), Some(true));
        assert_eq!(config.source_of("verbose"), ConfigSource::Default);
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let env = |_: &str| Some("   ".to_string());

        let config = Config::discover_from_with_env(dir.path(), &CliArgs::default(), env).unwrap();
        assert!(config.is_default("width"));
        assert!(config.is_default("mode"));
    }

    #[test]
    fn test_unparsable_env_width_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let env = |key: &str| (key == ENV_WIDTH).then(|| "wide".to_string());

        let err = Config::discover_from_with_env(dir.path(), &CliArgs::default(), env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "width"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cli = CliArgs {
            config_path: Some(dir.path().join("nope.toml")),
            ..CliArgs::default()
        };

        let err = Config::discover_from_with_env(dir.path(), &cli, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_explicit_config_skips_discovery() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[defaults]\nwidth = 40\n");
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[defaults]\nwidth = 12\n").unwrap();

        let cli = CliArgs {
            config_path: Some(explicit.clone()),
            ..CliArgs::default()
        };
        let config = Config::discover_from_with_env(dir.path(), &cli, no_env).unwrap();
        assert_eq!(config.width(), 12);
        assert_eq!(config.config_path, Some(explicit));
    }

    #[test]
    fn test_malformed_toml_is_invalid_file() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[defaults\nwidth = 40\n");

        let err = Config::discover_from_with_env(dir.path(), &CliArgs::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFile(_)));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[defaults]\ncolour = \"blue\"\n");

        let err = Config::discover_from_with_env(dir.path(), &CliArgs::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFile(_)));
    }

    #[test]
    fn test_discovered_values_are_validated() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "[defaults]\nmode = \"char\"\n");

        let err = Config::discover_from_with_env(dir.path(), &CliArgs::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "mode_arg"));
    }
}
