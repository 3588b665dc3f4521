//! Language detection and rewriting for URL paths.
//!
//! A path is language-prefixed when its first non-empty segment is one of the
//! supported codes: `/en/signup` is English, `/signup` is the default language.
//! The default language never carries a prefix in generated paths.
//!
//! A top-level route whose name equals a supported code (a resource literally
//! called `/en`) is always read as a language prefix. Route names must not
//! collide with language codes.

use crate::i18n::Language;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("at least one language must be supported")]
    Empty,
    #[error("language {0} is listed more than once")]
    Duplicate(Language),
    #[error("default language {0} is not in the supported set")]
    DefaultNotSupported(Language),
}

/// Validated set of languages served, with exactly one default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    supported: Vec<Language>,
    default: Language,
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            supported: Language::ALL.to_vec(),
            default: Language::Pt,
        }
    }
}

impl LocaleSet {
    /// # Errors
    /// Returns an error if `supported` is empty, has duplicates, or does not contain `default`.
    pub fn new(supported: Vec<Language>, default: Language) -> Result<Self, LocaleError> {
        if supported.is_empty() {
            return Err(LocaleError::Empty);
        }

        for (index, language) in supported.iter().enumerate() {
            if supported[..index].contains(language) {
                return Err(LocaleError::Duplicate(*language));
            }
        }

        if !supported.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default));
        }

        Ok(Self { supported, default })
    }

    #[must_use]
    pub fn supported(&self) -> &[Language] {
        &self.supported
    }

    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default
    }

    /// Maps a code to a served language, `None` when unknown or not enabled.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Language> {
        code.parse::<Language>()
            .ok()
            .filter(|language| self.supported.contains(language))
    }

    #[must_use]
    pub fn is_supported_language(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Language of a request path, falling back to the default.
    #[must_use]
    pub fn resolve_language(&self, path: &str) -> Language {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|first| self.lookup(first))
            .unwrap_or(self.default)
    }

    /// Removes one leading language segment; the result always starts with `/`.
    #[must_use]
    pub fn strip_language_prefix(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = trimmed
            .split_once('/')
            .map_or((trimmed, None), |(first, rest)| (first, Some(rest)));

        if self.is_supported_language(first) {
            format!("/{}", rest.unwrap_or_default())
        } else {
            format!("/{trimmed}")
        }
    }

    /// Rewrites `path` so that it resolves to `target`.
    ///
    /// A target outside the supported set is served as the default language.
    #[must_use]
    pub fn localize_path(&self, path: &str, target: Language) -> String {
        let bare = self.strip_language_prefix(path);

        if target == self.default || !self.supported.contains(&target) {
            return bare;
        }

        if bare == "/" {
            format!("/{}", target.code())
        } else {
            format!("/{}{bare}", target.code())
        }
    }

    /// The same page localized for every supported language, in configured order.
    #[must_use]
    pub fn alternates(&self, path: &str) -> Vec<(Language, String)> {
        self.supported
            .iter()
            .map(|&language| (language, self.localize_path(path, language)))
            .collect()
    }
}
