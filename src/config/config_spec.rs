use std::net::IpAddr;
use std::sync::Arc;

use crate::config::env_provider::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("unknown_setting")
    }

    /// Load the setting, recording where the value came from
    ///
    /// A value set in the environment wins over the default, and both are
    /// validated. A setting with neither is an error.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default)?;

            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        Err(ApplicationError::InvalidSetting {
            setting_name: self.setting_name().to_string(),
            reason: "Required setting has no value from any source".to_string(),
        })
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: self.setting_name().to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: self.setting_name().to_string(),
                reason,
            })?;
        }

        Ok(())
    }
}

/// Parsing and validation utilities
impl ConfigSpec {
    /// Parse a port number, rejecting 0
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>().map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected port number (1-65535), got '{}': {}", value, e),
        })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Accepts an IP address or a hostname made of letters, digits, '-' and '.'
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.parse::<IpAddr>().is_ok() {
            return Ok(());
        }

        let valid_hostname = value
            .split('.')
            .all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });

        if valid_hostname {
            Ok(())
        } else {
            Err(format!("'{}' is not a valid IP address or hostname", value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn spec(env: MockEnvironment) -> ConfigSpec {
        ConfigSpec::new(Arc::new(env)).env_override("SETTING")
    }

    #[test]
    fn test_environment_overrides_default() {
        let value = spec(MockEnvironment::empty().with_var("SETTING", "from-env"))
            .default_value("from-default")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(value.value, "from-env");
        assert_eq!(
            value.source,
            ConfigValueSource::EnvironmentVariable { name: "SETTING".to_string() }
        );
    }

    #[test]
    fn test_default_used_when_env_missing() {
        let value = spec(MockEnvironment::empty())
            .default_value("from-default")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(value.value, "from-default");
        assert_eq!(value.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_missing_value_without_default_fails() {
        let result = spec(MockEnvironment::empty()).load_setting_with_source();

        match result {
            Err(ApplicationError::InvalidSetting { setting_name, .. }) => {
                assert_eq!(setting_name, "SETTING");
            }
            other => panic!("Expected InvalidSetting, got: {:?}", other),
        }
    }

    #[test]
    fn test_validator_runs_on_env_value() {
        let result = spec(MockEnvironment::empty().with_var("SETTING", "bad host"))
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source();

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_host_address() {
        assert!(ConfigSpec::validate_host_address("0.0.0.0").is_ok());
        assert!(ConfigSpec::validate_host_address("::1").is_ok());
        assert!(ConfigSpec::validate_host_address("localhost").is_ok());
        assert!(ConfigSpec::validate_host_address("api.example-host.com").is_ok());
        assert!(ConfigSpec::validate_host_address("").is_err());
        assert!(ConfigSpec::validate_host_address("-bad.example").is_err());
        assert!(ConfigSpec::validate_host_address("under_score").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("2022", "SERVER_PORT").unwrap(), 2022);
        assert!(ConfigSpec::parse_port("0", "SERVER_PORT").is_err());
        assert!(ConfigSpec::parse_port("70000", "SERVER_PORT").is_err());
    }
}
