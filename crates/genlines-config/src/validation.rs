use genlines_utils::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.width == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "width".to_string(),
                value: "must be greater than 0".to_string(),
            });
        }

        let mode = self.mode()?;
        if mode.requires_mode_arg() && self.mode_arg().is_none_or(|arg| arg.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "mode_arg".to_string(),
                value: format!("mode={mode} requires modeArg"),
            });
        }

        Ok(())
    }
}
