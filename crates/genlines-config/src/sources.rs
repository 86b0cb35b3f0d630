use std::collections::HashMap;

use super::Config;

impl Config {
    /// Get effective configuration as key-value pairs with source attribution.
    ///
    /// Unset optional keys (`mode_arg`, `overwrite`) are omitted.
    #[must_use]
    pub fn effective_config(&self) -> HashMap<String, (String, String)> {
        let mut config = HashMap::new();

        let mut add_config = |key: &str, value: Option<String>| {
            if let Some(val) = value {
                config.insert(key.to_string(), (val, self.source_of(key).to_string()));
            }
        };

        add_config("width", Some(self.width().to_string()));
        add_config(
            "mode",
            Some(
                self.mode()
                    .map_or_else(|_| self.defaults.mode.clone().unwrap_or_default(), |m| m.to_string()),
            ),
        );
        add_config("mode_arg", self.defaults.mode_arg.clone());
        add_config("overwrite", self.overwrite().map(|o| o.to_string()));
        add_config("verbose", Some(self.verbose().to_string()));

        config
    }
}
