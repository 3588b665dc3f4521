//! # Acesso
//!
//! Bilingual (Portuguese/English) sign-up and login backend.
//!
//! ## Validation
//!
//! The validation core is pure: callers pass a form or password snapshot plus a
//! message [`i18n::Catalog`] and get a structured result back. Nothing is ever
//! thrown; invalid input is reported as field-keyed messages.
//!
//! - **Strength indicator:** four ordered requirements (length, uppercase, digit,
//!   special character). The count of met requirements maps to a tier:
//!   0-1 very weak, 2 weak, 3 medium, 4 strong.
//! - **Signup form:** name, email, password and confirmation are all checked;
//!   each field reports its first violated rule.
//!
//! ## Languages
//!
//! Paths are prefixed with the language code except for the default language
//! (`/signup` is Portuguese, `/en/signup` is English). Unknown prefixes on page
//! routes answer `404 Not Found`.
//!
//! ## Demo backend
//!
//! `/api/register` and `/api/login` keep users in process memory with plaintext
//! passwords. They exist for local UI development only.

pub mod acesso;
pub mod cli;
pub mod i18n;
pub mod locale;
pub mod validation;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
