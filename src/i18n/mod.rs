//! Static message catalogs for the two shipped locales.
//!
//! Every user-visible string lives behind a [`MessageKey`]. Each language maps
//! the full key set with an exhaustive `match`, so a catalog missing a key does
//! not compile. [`verify_catalogs`] additionally rejects blank entries and runs
//! once at startup before the server binds.

mod en;
mod pt;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Languages with a bundled catalog.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// All bundled languages, default first.
    pub const ALL: [Self; 2] = [Self::Pt, Self::En];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    #[must_use]
    pub const fn catalog(self) -> Catalog {
        Catalog { language: self }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    // Codes are matched exactly; "EN" is not "en".
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }
}

/// Closed set of catalog entries.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    // Pages
    LoginTitle,
    LoginDescription,
    SignupTitle,
    SignupDescription,
    WelcomeBack,
    NoAccount,
    SignUp,
    EmailPlaceholder,
    PasswordPlaceholder,
    LoginButton,
    Or,
    LoginWithApple,
    LoginWithGoogle,
    LoginWithX,
    CreateAccount,
    AlreadyHaveAccount,
    SignIn,
    NamePlaceholder,
    ConfirmPasswordPlaceholder,
    SignupButton,
    OrSignUpWith,

    // Validation errors
    NameRequired,
    NameMinLength,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordMinLength,
    PasswordUppercase,
    PasswordLowercase,
    PasswordNumber,
    PasswordSpecial,
    ConfirmPasswordRequired,
    PasswordsMustMatch,

    // Strength indicator
    PasswordMustContain,
    PasswordReqMinLength,
    PasswordReqUppercase,
    PasswordReqNumber,
    PasswordReqSpecial,
    PasswordStrengthVeryWeak,
    PasswordStrengthWeak,
    PasswordStrengthMedium,
    PasswordStrengthStrong,

    // Language switcher
    Language,
    Portuguese,
    English,

    // Demo backend
    ApiFieldsRequired,
    ApiEmailTaken,
    ApiRegistered,
    ApiInvalidCredentials,
    ApiLoggedIn,
    ApiRouteNotFound,
    ApiProcessingError,
    LanguageNotSupported,
}

impl MessageKey {
    pub const ALL: [Self; 53] = [
        Self::LoginTitle,
        Self::LoginDescription,
        Self::SignupTitle,
        Self::SignupDescription,
        Self::WelcomeBack,
        Self::NoAccount,
        Self::SignUp,
        Self::EmailPlaceholder,
        Self::PasswordPlaceholder,
        Self::LoginButton,
        Self::Or,
        Self::LoginWithApple,
        Self::LoginWithGoogle,
        Self::LoginWithX,
        Self::CreateAccount,
        Self::AlreadyHaveAccount,
        Self::SignIn,
        Self::NamePlaceholder,
        Self::ConfirmPasswordPlaceholder,
        Self::SignupButton,
        Self::OrSignUpWith,
        Self::NameRequired,
        Self::NameMinLength,
        Self::EmailRequired,
        Self::EmailInvalid,
        Self::PasswordRequired,
        Self::PasswordMinLength,
        Self::PasswordUppercase,
        Self::PasswordLowercase,
        Self::PasswordNumber,
        Self::PasswordSpecial,
        Self::ConfirmPasswordRequired,
        Self::PasswordsMustMatch,
        Self::PasswordMustContain,
        Self::PasswordReqMinLength,
        Self::PasswordReqUppercase,
        Self::PasswordReqNumber,
        Self::PasswordReqSpecial,
        Self::PasswordStrengthVeryWeak,
        Self::PasswordStrengthWeak,
        Self::PasswordStrengthMedium,
        Self::PasswordStrengthStrong,
        Self::Language,
        Self::Portuguese,
        Self::English,
        Self::ApiFieldsRequired,
        Self::ApiEmailTaken,
        Self::ApiRegistered,
        Self::ApiInvalidCredentials,
        Self::ApiLoggedIn,
        Self::ApiRouteNotFound,
        Self::ApiProcessingError,
        Self::LanguageNotSupported,
    ];
}

/// Read-only view over one language's messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    #[must_use]
    pub const fn language(self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn get(self, key: MessageKey) -> &'static str {
        match self.language {
            Language::Pt => pt::message(key),
            Language::En => en::message(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog {language} has an empty message for {key:?}")]
    EmptyMessage { language: Language, key: MessageKey },
}

/// Startup completeness check over every bundled catalog.
///
/// # Errors
/// Returns the first blank entry found.
pub fn verify_catalogs() -> Result<(), CatalogError> {
    for language in Language::ALL {
        let catalog = language.catalog();
        for key in MessageKey::ALL {
            if catalog.get(key).trim().is_empty() {
                return Err(CatalogError::EmptyMessage { language, key });
            }
        }
    }

    Ok(())
}
