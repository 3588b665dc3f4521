//! Page descriptors for the login and signup screens.
//!
//! The UI renders from these: texts in the requested language plus the same
//! page localized for every supported language (the language switcher).

use super::error_response;
use crate::{
    i18n::{Language, MessageKey},
    locale::LocaleSet,
};
use axum::{
    extract::{Extension, Path},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Login,
    Signup,
}

impl Page {
    /// Path of the page without a language prefix.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
        }
    }

    const fn texts(self) -> &'static [MessageKey] {
        match self {
            Self::Login => &[
                MessageKey::LoginTitle,
                MessageKey::LoginDescription,
                MessageKey::WelcomeBack,
                MessageKey::NoAccount,
                MessageKey::SignUp,
                MessageKey::EmailPlaceholder,
                MessageKey::PasswordPlaceholder,
                MessageKey::LoginButton,
                MessageKey::Or,
                MessageKey::LoginWithApple,
                MessageKey::LoginWithGoogle,
                MessageKey::LoginWithX,
                MessageKey::Language,
            ],
            Self::Signup => &[
                MessageKey::SignupTitle,
                MessageKey::SignupDescription,
                MessageKey::CreateAccount,
                MessageKey::AlreadyHaveAccount,
                MessageKey::SignIn,
                MessageKey::NamePlaceholder,
                MessageKey::EmailPlaceholder,
                MessageKey::PasswordPlaceholder,
                MessageKey::ConfirmPasswordPlaceholder,
                MessageKey::SignupButton,
                MessageKey::OrSignUpWith,
                MessageKey::LoginWithApple,
                MessageKey::LoginWithGoogle,
                MessageKey::LoginWithX,
                MessageKey::PasswordMustContain,
                MessageKey::Language,
            ],
        }
    }
}

const fn language_name(language: Language) -> MessageKey {
    match language {
        Language::Pt => MessageKey::Portuguese,
        Language::En => MessageKey::English,
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct LanguageLink {
    pub language: Language,
    #[schema(value_type = String)]
    pub label: &'static str,
    pub path: String,
    pub current: bool,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub language: Language,
    pub page: Page,
    #[schema(value_type = Object)]
    pub texts: BTreeMap<MessageKey, &'static str>,
    pub links: Vec<LanguageLink>,
}

impl PageView {
    #[must_use]
    pub fn new(locales: &LocaleSet, page: Page, language: Language) -> Self {
        let catalog = language.catalog();

        let texts = page
            .texts()
            .iter()
            .map(|&key| (key, catalog.get(key)))
            .collect();

        let links = locales
            .alternates(page.path())
            .into_iter()
            .map(|(target, path)| LanguageLink {
                language: target,
                label: catalog.get(language_name(target)),
                path,
                current: target == language,
            })
            .collect();

        Self {
            language,
            page,
            texts,
            links,
        }
    }
}

fn render(locales: &LocaleSet, page: Page, path: &str) -> Response {
    let language = locales.resolve_language(path);
    debug!("Rendering {:?} in {}", page, language);
    (StatusCode::OK, Json(PageView::new(locales, page, language))).into_response()
}

fn render_localized(locales: &LocaleSet, page: Page, lang: &str, path: &str) -> Response {
    if !locales.is_supported_language(lang) {
        debug!("Unsupported language prefix: {lang:?}");
        let catalog = locales.default_language().catalog();
        return error_response(
            StatusCode::NOT_FOUND,
            catalog.get(MessageKey::LanguageNotSupported),
        );
    }

    render(locales, page, path)
}

// axum handler for `/`
#[instrument(skip(locales))]
pub async fn login(locales: Extension<Arc<LocaleSet>>, uri: Uri) -> Response {
    render(&locales, Page::Login, uri.path())
}

// axum handler for `/signup`
#[instrument(skip(locales))]
pub async fn signup(locales: Extension<Arc<LocaleSet>>, uri: Uri) -> Response {
    render(&locales, Page::Signup, uri.path())
}

// axum handler for `/:lang`
#[instrument(skip(locales))]
pub async fn localized_login(
    locales: Extension<Arc<LocaleSet>>,
    lang: Path<String>,
    uri: Uri,
) -> Response {
    render_localized(&locales, Page::Login, &lang, uri.path())
}

// axum handler for `/:lang/signup`
#[instrument(skip(locales))]
pub async fn localized_signup(
    locales: Extension<Arc<LocaleSet>>,
    lang: Path<String>,
    uri: Uri,
) -> Response {
    render_localized(&locales, Page::Signup, &lang, uri.path())
}
