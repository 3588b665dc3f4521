//! Maps validated CLI matches to the action the binary runs.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_FRONTEND_ORIGIN, ARG_PORT, locale};
use crate::{i18n::Language, locale::LocaleSet};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if the language configuration is inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(3001);

    let languages: Vec<Language> = matches
        .get_many::<Language>(locale::ARG_LANGUAGES)
        .map_or_else(|| Language::ALL.to_vec(), |values| values.copied().collect());

    let default_language = matches
        .get_one::<Language>(locale::ARG_DEFAULT_LANGUAGE)
        .copied()
        .unwrap_or_default();

    let locales = LocaleSet::new(languages, default_language)
        .context("invalid language configuration")?;

    let frontend_origin = matches.get_one::<String>(ARG_FRONTEND_ORIGIN).cloned();

    Ok(Action::Server(Args {
        port,
        locales,
        frontend_origin,
    }))
}
