//! HTTP handlers and the helpers they share.
//!
//! Every handler answers with JSON. Messages come from the catalog selected by
//! the optional `lang` query parameter, falling back to the default language.

pub mod health;
pub mod login;
pub mod pages;
pub mod password;
pub mod register;
pub mod validate;

use crate::{
    i18n::{Catalog, MessageKey},
    locale::LocaleSet,
};
use axum::{
    extract::Extension,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// Language code for messages (`pt`, `en`); defaults to the configured default language
    pub lang: Option<String>,
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Catalog for an optional `lang` value; unsupported codes answer 404.
pub(crate) fn catalog_for(locales: &LocaleSet, lang: Option<&str>) -> Result<Catalog, Response> {
    match lang {
        None => Ok(locales.default_language().catalog()),
        Some(code) => locales.lookup(code).map(|language| language.catalog()).ok_or_else(|| {
            debug!("Unsupported language requested: {code:?}");
            let catalog = locales.default_language().catalog();
            error_response(
                StatusCode::NOT_FOUND,
                catalog.get(MessageKey::LanguageNotSupported),
            )
        }),
    }
}

/// Fallback for unmatched routes, answered in the language of the path.
pub async fn not_found(Extension(locales): Extension<Arc<LocaleSet>>, uri: Uri) -> Response {
    debug!("Route not found: {}", uri.path());
    let catalog = locales.resolve_language(uri.path()).catalog();
    error_response(StatusCode::NOT_FOUND, catalog.get(MessageKey::ApiRouteNotFound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_catalog_for() {
        let locales = LocaleSet::default();
        assert_eq!(
            catalog_for(&locales, None).ok(),
            Some(Language::Pt.catalog())
        );
        assert_eq!(
            catalog_for(&locales, Some("en")).ok(),
            Some(Language::En.catalog())
        );
        let response = catalog_for(&locales, Some("es")).err();
        assert_eq!(
            response.map(|response| response.status()),
            Some(StatusCode::NOT_FOUND)
        );
    }
}
