use std::collections::HashMap;

use genlines_utils::error::ConfigError;

use super::{Config, ConfigSource, Defaults};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// No environment variables or config files are consulted.
    ///
    /// ```rust
    /// use genlines_config::{Config, ConfigSource};
    ///
    /// let config = Config::builder()
    ///     .width(20)
    ///     .mode("char")
    ///     .mode_arg("*")
    ///     .build()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.width(), 20);
    /// assert_eq!(config.source_of("width"), ConfigSource::Programmatic);
    /// assert_eq!(config.source_of("overwrite"), ConfigSource::Default);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration.
///
/// All values set via the builder are attributed to
/// [`ConfigSource::Programmatic`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    defaults: Defaults,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.defaults.width = Some(width);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.defaults.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn mode_arg(mut self, mode_arg: impl Into<String>) -> Self {
        self.defaults.mode_arg = Some(mode_arg.into());
        self
    }

    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.defaults.overwrite = Some(overwrite);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.defaults.verbose = Some(verbose);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let config = self.build_unvalidated();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn build_unvalidated(self) -> Config {
        let mut source_attribution = HashMap::new();
        let set = [
            ("width", self.defaults.width.is_some()),
            ("mode", self.defaults.mode.is_some()),
            ("mode_arg", self.defaults.mode_arg.is_some()),
            ("overwrite", self.defaults.overwrite.is_some()),
            ("verbose", self.defaults.verbose.is_some()),
        ];
        for (key, _) in set.into_iter().filter(|(_, is_set)| *is_set) {
            source_attribution.insert(key.to_string(), ConfigSource::Programmatic);
        }

        Config {
            defaults: self.defaults,
            source_attribution,
            config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_attributes_only_set_values() {
        let config = Config::builder().width(5).verbose(true).build().unwrap();
        assert_eq!(config.source_of("width"), ConfigSource::Programmatic);
        assert_eq!(config.source_of("verbose"), ConfigSource::Programmatic);
        assert_eq!(config.source_of("mode"), ConfigSource::Default);
        assert!(config.verbose());
        assert_eq!(config.overwrite(), None);
    }

    #[test]
    fn test_builder_validates() {
        assert!(Config::builder().width(0).build().is_err());
        assert!(Config::builder().mode("char").build().is_err());
    }
}
