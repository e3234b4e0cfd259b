//! # Form Configuration
//!
//! [`FormConfig`] is fixed when a form is constructed. Every field has a
//! default, so a partial configuration document (or none at all) merges with
//! the defaults on deserialization.

use serde::{Deserialize, Serialize};

/// When single-field validation fires in response to interaction events.
///
/// The mode never affects whole-record validation, which is always an
/// explicit caller action (typically on submit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only explicit validation calls populate errors.
    #[default]
    OnSubmit,
    /// A blur event validates the blurred field.
    OnBlur,
    /// Every value change validates the changed field.
    OnChange,
}

impl ValidationMode {
    /// Whether a blur event triggers field validation in this mode.
    pub fn validates_on_blur(self) -> bool {
        matches!(self, Self::OnBlur)
    }

    /// Whether a change event triggers field validation in this mode.
    pub fn validates_on_change(self) -> bool {
        matches!(self, Self::OnChange)
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OnSubmit => "onSubmit",
            Self::OnBlur => "onBlur",
            Self::OnChange => "onChange",
        };
        f.write_str(s)
    }
}

/// Configuration of a form state instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Validation timing policy.
    pub validation_mode: ValidationMode,
}

impl FormConfig {
    /// Return this configuration with a different validation mode.
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_on_submit() {
        assert_eq!(FormConfig::default().validation_mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn partial_document_merges_with_defaults() {
        let config: FormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormConfig::default());

        let config: FormConfig = serde_json::from_str(r#"{"validationMode": "onBlur"}"#).unwrap();
        assert_eq!(config.validation_mode, ValidationMode::OnBlur);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<FormConfig>(r#"{"validationMode": "onFocus"}"#).is_err());
    }

    #[test]
    fn mode_predicates_are_exclusive() {
        assert!(!ValidationMode::OnSubmit.validates_on_blur());
        assert!(!ValidationMode::OnSubmit.validates_on_change());
        assert!(ValidationMode::OnBlur.validates_on_blur());
        assert!(!ValidationMode::OnBlur.validates_on_change());
        assert!(ValidationMode::OnChange.validates_on_change());
        assert!(!ValidationMode::OnChange.validates_on_blur());
    }

    #[test]
    fn display_matches_serialized_name() {
        for mode in [ValidationMode::OnSubmit, ValidationMode::OnBlur, ValidationMode::OnChange] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
