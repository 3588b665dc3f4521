//! Pure validation core: password requirements, strength scoring and the
//! signup form validator.
//!
//! Nothing here performs I/O or keeps state. Callers pass the input snapshot
//! and the [`Catalog`](crate::i18n::Catalog) explicitly on every call.

pub mod password;
pub mod signup;

pub use password::{
    PasswordReport, PasswordRequirement, RequirementKey, StrengthClass, StrengthTier,
    calculate_strength, classify, evaluate_requirements,
};
pub use signup::{
    Field, FieldError, SignupFormInput, ValidationResult, valid_email, validate_field,
    validate_signup,
};

/// Minimum password length, counted in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length, counted in UTF-16 code units.
pub const MIN_NAME_LENGTH: usize = 2;

/// Characters accepted as "special" by both the strength indicator and the form validator.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Length as browsers report it: characters outside the BMP count twice.
pub(crate) fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub(crate) fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
