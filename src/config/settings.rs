//! Settings loading functionality.
//!
//! This module provides the [`Settings`] type, loaded from a YAML file at
//! startup. Every field has a default so tests and fresh checkouts work
//! without a settings file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Service-level settings.
///
/// # Example file
///
/// ```yaml
/// bind_addr: "127.0.0.1:8000"
/// allow_overnight_templates: false
/// late_label: "Trễ"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Whether shift templates whose end time is at or before their start
    /// time (crossing midnight) may be created. When enabled, template
    /// overlap detection compares the midnight-split interval pieces.
    pub allow_overnight_templates: bool,
    /// The status tag the demo seed data uses for late check-ins. The engine
    /// itself passes attendance status tags through untouched.
    pub late_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            allow_overnight_templates: false,
            late_label: "Trễ".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file does not exist
    /// and [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Loads settings from `path`, falling back to defaults when the file is
    /// absent. A parse error is still surfaced: a present-but-broken file
    /// should stop startup rather than be silently ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(&path) {
            Ok(settings) => Ok(settings),
            Err(EngineError::ConfigNotFound { path }) => {
                info!(path = %path, "settings file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
        assert!(!settings.allow_overnight_templates);
        assert_eq!(settings.late_label, "Trễ");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: Settings = serde_yaml::from_str("allow_overnight_templates: true").unwrap();
        assert!(settings.allow_overnight_templates);
        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let err = Settings::load("/does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_or_default_tolerates_missing_file() {
        let settings = Settings::load_or_default("/does/not/exist.yaml").unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
    }
}
