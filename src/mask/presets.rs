//! Built-in masks for common fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one of the built-in field masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskPreset {
    /// US phone number, `(###) ###-####`
    PhoneNumber,
    /// Calendar date, `__/__/____`
    Date,
    /// 16-digit card number in groups of four
    CreditCard,
}

impl MaskPreset {
    pub const ALL: [MaskPreset; 3] = [
        MaskPreset::PhoneNumber,
        MaskPreset::Date,
        MaskPreset::CreditCard,
    ];

    /// Template string for this preset
    pub fn template(&self) -> &'static str {
        match self {
            MaskPreset::PhoneNumber => "(###) ###-####",
            MaskPreset::Date => "__/__/____",
            MaskPreset::CreditCard => "#### #### #### ####",
        }
    }

    /// Validation pattern accepting only completely filled values
    pub fn validation(&self) -> &'static str {
        match self {
            MaskPreset::PhoneNumber => r"^\(\d{3}\) \d{3}-\d{4}$",
            MaskPreset::Date => r"^\d{2}/\d{2}/\d{4}$",
            MaskPreset::CreditCard => r"^\d{4} \d{4} \d{4} \d{4}$",
        }
    }

    /// Human-readable label used when reporting accepted values
    pub fn label(&self) -> &'static str {
        match self {
            MaskPreset::PhoneNumber => "Phone Number",
            MaskPreset::Date => "Date",
            MaskPreset::CreditCard => "Credit Card",
        }
    }

    /// Identifier used on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            MaskPreset::PhoneNumber => "phone-number",
            MaskPreset::Date => "date",
            MaskPreset::CreditCard => "credit-card",
        }
    }
}

impl FromStr for MaskPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phone-number" | "phone" => Ok(MaskPreset::PhoneNumber),
            "date" => Ok(MaskPreset::Date),
            "credit-card" | "card" => Ok(MaskPreset::CreditCard),
            other => Err(format!(
                "Unknown preset '{}' (expected one of: phone-number, date, credit-card)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::validate;

    #[test]
    fn test_preset_ids_round_trip() {
        for preset in MaskPreset::ALL {
            assert_eq!(preset.id().parse::<MaskPreset>(), Ok(preset));
        }
        assert_eq!("phone".parse::<MaskPreset>(), Ok(MaskPreset::PhoneNumber));
        assert!("zip".parse::<MaskPreset>().is_err());
    }

    #[test]
    fn test_pristine_template_fails_validation() {
        for preset in MaskPreset::ALL {
            assert!(!validate(preset.template(), preset.validation()));
        }
    }

    #[test]
    fn test_filled_values_pass_validation() {
        assert!(validate("(555) 123-4567", MaskPreset::PhoneNumber.validation()));
        assert!(validate("12/31/1999", MaskPreset::Date.validation()));
        assert!(validate(
            "4111 1111 1111 1111",
            MaskPreset::CreditCard.validation()
        ));
    }

    #[test]
    fn test_template_lengths() {
        assert_eq!(MaskPreset::PhoneNumber.template().chars().count(), 14);
        assert_eq!(MaskPreset::Date.template().chars().count(), 10);
        assert_eq!(MaskPreset::CreditCard.template().chars().count(), 19);
    }
}
