//! # Kiosk Configuration
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PIZZA_KIOSK_*`)
//! 2. Defaults (this file)
//!
//! Menu contents, prices and accepted ranges are fixed in `kiosk-core`;
//! configuration only changes how the kiosk names itself and its credit.
//!
//! Configuration is read-only after initialization.

use std::env;

/// Kiosk display configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Name shown in the welcome and goodbye messages.
    /// Env: `PIZZA_KIOSK_NAME`
    pub machine_name: String,

    /// Label printed after every amount, e.g. "3.80 credits".
    /// Env: `PIZZA_KIOSK_UNIT`
    pub unit_label: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            machine_name: "Student Pizza Machine".to_string(),
            unit_label: "credits".to_string(),
        }
    }
}

impl KioskConfig {
    /// Creates a KioskConfig from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Set but blank values are rejected rather than silently defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = KioskConfig::default();

        if let Some(name) = lookup("PIZZA_KIOSK_NAME") {
            config.machine_name = non_blank("PIZZA_KIOSK_NAME", name)?;
        }

        if let Some(unit) = lookup("PIZZA_KIOSK_UNIT") {
            config.unit_label = non_blank("PIZZA_KIOSK_UNIT", unit)?;
        }

        Ok(config)
    }
}

fn non_blank(key: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = KioskConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, KioskConfig::default());
        assert_eq!(config.unit_label, "credits");
    }

    #[test]
    fn test_overrides() {
        let config = KioskConfig::from_lookup(lookup_from(&[
            ("PIZZA_KIOSK_NAME", "Campus Pizza"),
            ("PIZZA_KIOSK_UNIT", " tokens "),
        ]))
        .unwrap();
        assert_eq!(config.machine_name, "Campus Pizza");
        assert_eq!(config.unit_label, "tokens");
    }

    #[test]
    fn test_blank_value_rejected() {
        let err = KioskConfig::from_lookup(lookup_from(&[("PIZZA_KIOSK_NAME", "   ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PIZZA_KIOSK_NAME");
    }
}
