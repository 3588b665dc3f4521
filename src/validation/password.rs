//! Password strength indicator: four ordered requirements and a tier derived
//! from how many of them are met.

use super::{MIN_PASSWORD_LENGTH, text_len, has_digit, has_special, has_uppercase};
use crate::i18n::{Catalog, MessageKey};
use serde::Serialize;
use utoipa::ToSchema;

/// Requirements in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RequirementKey {
    MinLength,
    Uppercase,
    Number,
    Special,
}

impl RequirementKey {
    pub const ALL: [Self; 4] = [Self::MinLength, Self::Uppercase, Self::Number, Self::Special];

    /// Highest possible strength: every requirement met.
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX_STRENGTH: u8 = Self::ALL.len() as u8;

    #[must_use]
    pub const fn label_key(self) -> MessageKey {
        match self {
            Self::MinLength => MessageKey::PasswordReqMinLength,
            Self::Uppercase => MessageKey::PasswordReqUppercase,
            Self::Number => MessageKey::PasswordReqNumber,
            Self::Special => MessageKey::PasswordReqSpecial,
        }
    }

    #[must_use]
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => text_len(password) >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => has_uppercase(password),
            Self::Number => has_digit(password),
            Self::Special => has_special(password),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct PasswordRequirement {
    pub key: RequirementKey,
    #[schema(value_type = String)]
    pub label: &'static str,
    pub satisfied: bool,
}

/// Checks `password` against every requirement, in [`RequirementKey::ALL`] order.
#[must_use]
pub fn evaluate_requirements(password: &str, catalog: Catalog) -> [PasswordRequirement; 4] {
    RequirementKey::ALL.map(|key| PasswordRequirement {
        key,
        label: catalog.get(key.label_key()),
        satisfied: key.is_satisfied_by(password),
    })
}

/// Number of satisfied requirements.
#[must_use]
pub fn calculate_strength(requirements: &[PasswordRequirement]) -> u8 {
    requirements
        .iter()
        .filter(|requirement| requirement.satisfied)
        .fold(0u8, |count, _| count.saturating_add(1))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Anything outside `2..=4` is `VeryWeak`, including negative or oversized input.
    #[must_use]
    pub const fn from_strength(strength: i64) -> Self {
        match strength {
            2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Strong,
            _ => Self::VeryWeak,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> MessageKey {
        match self {
            Self::VeryWeak => MessageKey::PasswordStrengthVeryWeak,
            Self::Weak => MessageKey::PasswordStrengthWeak,
            Self::Medium => MessageKey::PasswordStrengthMedium,
            Self::Strong => MessageKey::PasswordStrengthStrong,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct StrengthClass {
    #[schema(value_type = String)]
    pub label: &'static str,
    pub tier: StrengthTier,
}

#[must_use]
pub fn classify(strength: i64, catalog: Catalog) -> StrengthClass {
    let tier = StrengthTier::from_strength(strength);
    StrengthClass {
        label: catalog.get(tier.label_key()),
        tier,
    }
}

/// Everything a strength indicator needs for one password snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    /// `false` for the empty password; the indicator should be hidden.
    pub display: bool,
    #[schema(value_type = String)]
    pub title: &'static str,
    pub requirements: Vec<PasswordRequirement>,
    pub strength: u8,
    pub max_strength: u8,
    pub classification: StrengthClass,
}

impl PasswordReport {
    #[must_use]
    pub fn new(password: &str, catalog: Catalog) -> Self {
        let requirements = evaluate_requirements(password, catalog);
        let strength = calculate_strength(&requirements);

        Self {
            display: !password.is_empty(),
            title: catalog.get(MessageKey::PasswordMustContain),
            classification: classify(i64::from(strength), catalog),
            requirements: requirements.to_vec(),
            strength,
            max_strength: RequirementKey::MAX_STRENGTH,
        }
    }
}
