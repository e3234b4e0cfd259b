//! # Validation-Mode State Machine
//!
//! Decides whether a user interaction triggers single-field validation.
//!
//! ## States
//!
//! The mode is one of `OnSubmit`, `OnBlur`, `OnChange`. It is chosen when the
//! form is built and never transitions afterwards.
//!
//! ## Events
//!
//! ```text
//!               Change      Blur
//! OnSubmit      -           -
//! OnBlur        -           validate field
//! OnChange      validate    -
//! ```
//!
//! Submitting is not an event here: whole-record validation is always an
//! explicit call and the mode has no say in it.

use formwork_core::ValidationMode;

/// A field-level interaction reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The field's value was written.
    Change,
    /// The field lost focus.
    Blur,
}

impl Interaction {
    /// Whether this interaction validates the field under `mode`.
    pub fn triggers_validation(self, mode: ValidationMode) -> bool {
        match self {
            Self::Change => mode.validates_on_change(),
            Self::Blur => mode.validates_on_blur(),
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Change => "change",
            Self::Blur => "blur",
        };
        f.write_str(s)
    }
}
