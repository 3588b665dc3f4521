//! Signup form validation.
//!
//! Every field is checked, and each field reports only its first failing rule.
//! The password/confirmation match is reported on `confirmPassword` and only
//! when the confirmation is not empty.

use super::{
    MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, text_len, has_digit, has_lowercase, has_special,
    has_uppercase,
};
use crate::i18n::{Catalog, MessageKey};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, sync::LazyLock};
use utoipa::ToSchema;

/// Form snapshot taken by the caller at blur or submit time.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupFormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// Passwords must never reach the logs.
impl fmt::Debug for SignupFormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupFormInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Form fields, ordered as declared on the form.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::ConfirmPassword];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub key: MessageKey,
    #[schema(value_type = String)]
    pub message: &'static str,
}

impl FieldError {
    fn new(key: MessageKey, catalog: Catalog) -> Self {
        Self {
            key,
            message: catalog.get(key),
        }
    }
}

/// Field-keyed errors; a field absent from the map passed all of its rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }
}

// Dot-atom local part; domain labels never start or end with a hyphen.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(?:\.[A-Za-z0-9_'+\-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .ok()
});

/// Email address syntax check, e.g. `joao@email.com`.
pub fn valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

fn name_rule(name: &str) -> Option<MessageKey> {
    if name.is_empty() {
        Some(MessageKey::NameRequired)
    } else if text_len(name) < MIN_NAME_LENGTH {
        Some(MessageKey::NameMinLength)
    } else {
        None
    }
}

fn email_rule(email: &str) -> Option<MessageKey> {
    if email.is_empty() {
        Some(MessageKey::EmailRequired)
    } else if !valid_email(email) {
        Some(MessageKey::EmailInvalid)
    } else {
        None
    }
}

fn password_rule(password: &str) -> Option<MessageKey> {
    let checks: [(fn(&str) -> bool, MessageKey); 6] = [
        (|p| !p.is_empty(), MessageKey::PasswordRequired),
        (
            |p| text_len(p) >= MIN_PASSWORD_LENGTH,
            MessageKey::PasswordMinLength,
        ),
        (has_uppercase, MessageKey::PasswordUppercase),
        (has_lowercase, MessageKey::PasswordLowercase),
        (has_digit, MessageKey::PasswordNumber),
        (has_special, MessageKey::PasswordSpecial),
    ];

    checks
        .into_iter()
        .find(|(passes, _)| !passes(password))
        .map(|(_, key)| key)
}

fn confirm_password_rule(password: &str, confirm_password: &str) -> Option<MessageKey> {
    if confirm_password.is_empty() {
        Some(MessageKey::ConfirmPasswordRequired)
    } else if password != confirm_password {
        Some(MessageKey::PasswordsMustMatch)
    } else {
        None
    }
}

/// First failing rule for a single field, e.g. on blur.
#[must_use]
pub fn validate_field(input: &SignupFormInput, field: Field, catalog: Catalog) -> Option<FieldError> {
    let key = match field {
        Field::Name => name_rule(&input.name),
        Field::Email => email_rule(&input.email),
        Field::Password => password_rule(&input.password),
        Field::ConfirmPassword => confirm_password_rule(&input.password, &input.confirm_password),
    };

    key.map(|key| FieldError::new(key, catalog))
}

/// Validates every field of the form.
#[must_use]
pub fn validate_signup(input: &SignupFormInput, catalog: Catalog) -> ValidationResult {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(input, field, catalog).map(|error| (field, error)))
        .collect();

    ValidationResult { errors }
}
