//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Picking a mask by preset, literal template, or configured field name
//! - Overriding the validation pattern and placeholder alphabet
//! - Replaying keystroke scripts (see [`crate::messages`])
//! - Writing the default config file (`--write-config`)

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, MaskConfig};
use crate::field::MaskedField;
use crate::mask::{MaskPreset, PlaceholderSet, Template, Validation};
use crate::messages::{parse_script, InputMsg};

/// Replay keystrokes through a masked input
#[derive(Parser, Debug)]
#[command(name = "maskline", version, about = "Replay keystrokes through a masked input")]
pub struct CliArgs {
    /// Keystroke scripts, replayed in order (e.g. `5551234567` or `12<bs>3`)
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Built-in mask: phone-number, date, credit-card
    #[arg(short, long, conflicts_with_all = ["template", "field"])]
    pub preset: Option<MaskPreset>,

    /// Literal template such as "(###) ###-####"
    #[arg(short, long, conflicts_with = "field")]
    pub template: Option<String>,

    /// Field name from the config file
    #[arg(short, long)]
    pub field: Option<String>,

    /// Validation pattern (case-insensitive); overrides preset/config
    #[arg(short, long)]
    pub validation: Option<String>,

    /// Placeholder characters, e.g. "_#"
    #[arg(long, value_name = "CHARS")]
    pub placeholders: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the default field definitions to the config file and exit
    #[arg(long, conflicts_with_all = ["keys", "json"])]
    pub write_config: bool,
}

/// Everything needed to run a replay
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub field: MaskedField,
    pub keys: Vec<InputMsg>,
    pub json: bool,
}

impl CliArgs {
    /// Write the default config to `--config`, or to the default location
    pub fn save_default_config(&self) -> Result<(), ConfigError> {
        let config = MaskConfig::default();
        match &self.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        }
    }

    /// Resolve arguments (and the config file, when needed) into a replay
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        let mut keys = Vec::new();
        for script in &self.keys {
            keys.extend(parse_script(script)?);
        }

        let config = match &self.config {
            Some(path) => MaskConfig::load_from(path).map_err(|e| e.to_string())?,
            None if self.field.is_some() => MaskConfig::load(),
            None => MaskConfig::default(),
        };

        let placeholders = self
            .placeholders
            .as_deref()
            .map(PlaceholderSet::from_chars)
            .unwrap_or_else(|| config.placeholder_chars.clone());
        if placeholders.is_empty() {
            return Err("Placeholder set must not be empty".to_string());
        }

        let mut field = if let Some(preset) = self.preset {
            MaskedField::new(
                preset.label(),
                Template::with_placeholders(preset.template(), placeholders),
                Validation::lenient(preset.validation()),
            )
        } else if let Some(template) = &self.template {
            MaskedField::new(
                "Value",
                Template::with_placeholders(template, placeholders),
                Validation::accept_all(),
            )
        } else {
            let name = self.field.as_deref().unwrap_or("phone-number");
            let mut field = config
                .build_field(name)
                .map_err(|e: ConfigError| e.to_string())?;
            if self.placeholders.is_some() {
                let template = Template::with_placeholders(field.template().as_str(), placeholders);
                field.set_template(template);
            }
            field
        };

        if let Some(pattern) = &self.validation {
            field.set_validation(Validation::lenient(pattern));
        }

        Ok(ReplayConfig {
            field,
            keys,
            json: self.json,
        })
    }
}
