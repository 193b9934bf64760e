//! Field configuration persistence
//!
//! Stores the placeholder alphabet and named field definitions in
//! `~/.config/maskline/config.yaml`:
//!
//! ```yaml
//! placeholder_chars: ['_', '#']
//! fields:
//!   - name: phone
//!     preset: phone-number
//!   - name: zip
//!     template: "#####"
//!     validation: '^\d{5}$'
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::field::MaskedField;
use crate::mask::{MaskPreset, PlaceholderSet, Template, Validation};

/// One named field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    /// Built-in mask; supplies template and validation unless overridden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<MaskPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

/// Configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Characters that mark a template position as user-editable
    #[serde(default)]
    pub placeholder_chars: PlaceholderSet,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            placeholder_chars: PlaceholderSet::default(),
            fields: MaskPreset::ALL
                .iter()
                .map(|preset| FieldConfig {
                    name: preset.id().to_string(),
                    preset: Some(*preset),
                    template: None,
                    validation: None,
                })
                .collect(),
        }
    }
}

/// Errors loading, saving, or resolving configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    /// Field has neither a template nor a preset
    MissingTemplate(String),
    UnknownField(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::MissingTemplate(name) => {
                write!(f, "Field '{}' needs a template or a preset", name)
            }
            ConfigError::UnknownField(name) => write!(f, "Unknown field: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse_yaml(&content)
    }

    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| ConfigError::IoError("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::IoError(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Build a masked field from a named definition
    pub fn build_field(&self, name: &str) -> Result<MaskedField, ConfigError> {
        let def = self
            .field(name)
            .ok_or_else(|| ConfigError::UnknownField(name.to_string()))?;

        let template = def
            .template
            .as_deref()
            .or_else(|| def.preset.map(|p| p.template()))
            .ok_or_else(|| ConfigError::MissingTemplate(def.name.clone()))?;

        let validation = def
            .validation
            .as_deref()
            .or_else(|| def.preset.map(|p| p.validation()))
            .unwrap_or("");

        let label = def
            .preset
            .filter(|_| def.template.is_none())
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| def.name.clone());

        Ok(MaskedField::new(
            label,
            Template::with_placeholders(template, self.placeholder_chars.clone()),
            Validation::lenient(validation),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_presets() {
        let config = MaskConfig::default();
        assert_eq!(config.fields.len(), 3);
        assert!(config.field("date").is_some());
        assert_eq!(config.placeholder_chars, PlaceholderSet::default());
    }

    #[test]
    fn test_parse_custom_field() {
        let yaml = r#"
placeholder_chars: ['9']
fields:
  - name: zip
    template: "99999"
    validation: '^\d{5}$'
"#;
        let config = MaskConfig::parse_yaml(yaml).unwrap();
        let field = config.build_field("zip").unwrap();
        assert_eq!(field.label(), "zip");
        assert!(field.template().is_placeholder(0));
        assert_eq!(field.validation().pattern(), r"^\d{5}$");
    }

    #[test]
    fn test_parse_preset_field() {
        let yaml = "fields:\n  - name: phone\n    preset: phone-number\n";
        let config = MaskConfig::parse_yaml(yaml).unwrap();
        assert_eq!(config.placeholder_chars, PlaceholderSet::default());
        let field = config.build_field("phone").unwrap();
        assert_eq!(field.label(), "Phone Number");
        assert_eq!(field.text(), "(###) ###-####");
    }

    #[test]
    fn test_missing_template() {
        let yaml = "fields:\n  - name: broken\n";
        let config = MaskConfig::parse_yaml(yaml).unwrap();
        assert_eq!(
            config.build_field("broken").unwrap_err(),
            ConfigError::MissingTemplate("broken".to_string())
        );
        assert_eq!(
            config.build_field("nope").unwrap_err(),
            ConfigError::UnknownField("nope".to_string())
        );
    }

    #[test]
    fn test_parse_error() {
        let err = MaskConfig::parse_yaml("fields: [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
