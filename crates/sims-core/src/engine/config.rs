use crate::core::presets::catalog::PresetSeed;
use thiserror::Error;

/// Registry capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of records, fixed for the lifetime of the registry.
    pub capacity: usize,
    pub presets: PresetSeed,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            presets: PresetSeed::default(),
        }
    }
}

#[derive(Default)]
pub struct RegistryConfigBuilder {
    capacity: Option<usize>,
    presets: Option<PresetSeed>,
}

impl RegistryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
    pub fn presets(mut self, presets: PresetSeed) -> Self {
        self.presets = Some(presets);
        self
    }

    pub fn build(self) -> Result<RegistryConfig, ConfigError> {
        let capacity = self
            .capacity
            .ok_or(ConfigError::MissingParameter("capacity"))?;
        if capacity == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(RegistryConfig {
            capacity,
            presets: self.presets.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_capacity() {
        let result = RegistryConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("capacity")));
    }

    #[test]
    fn builder_rejects_zero_capacity() {
        let result = RegistryConfigBuilder::new().capacity(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "capacity",
                ..
            })
        ));
    }

    #[test]
    fn builder_defaults_presets_to_empty() {
        let config = RegistryConfigBuilder::new().capacity(5).build().unwrap();
        assert_eq!(config.capacity, 5);
        assert!(config.presets.is_empty());
    }

    #[test]
    fn default_config_uses_default_capacity() {
        assert_eq!(RegistryConfig::default().capacity, DEFAULT_CAPACITY);
    }
}
