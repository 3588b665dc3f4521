use super::{LangQuery, catalog_for, error_response};
use crate::{i18n::MessageKey, locale::LocaleSet, validation::PasswordReport};
use axum::{
    extract::{Extension, Json, Query, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::{fmt, sync::Arc};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Default)]
#[serde(default)]
pub struct PasswordInput {
    password: String,
}

impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordInput")
            .field("length", &self.password.chars().count())
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/api/password/strength",
    params(LangQuery),
    request_body = PasswordInput,
    responses (
        (status = 200, description = "Requirement checklist and strength tier", body = PasswordReport, content_type = "application/json"),
        (status = 404, description = "Language not supported", body = super::ErrorBody),
        (status = 500, description = "Request body could not be processed", body = super::ErrorBody),
    ),
    tag= "validation"
)]
// axum handler for the strength indicator
#[instrument(skip(locales, payload))]
pub async fn strength(
    locales: Extension<Arc<LocaleSet>>,
    query: Query<LangQuery>,
    payload: Result<Json<PasswordInput>, JsonRejection>,
) -> Response {
    let catalog = match catalog_for(&locales, query.lang.as_deref()) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let input = match payload {
        Ok(Json(input)) => input,
        Err(e) => {
            error!("Invalid strength payload: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                catalog.get(MessageKey::ApiProcessingError),
            );
        }
    };

    let report = PasswordReport::new(&input.password, catalog);

    debug!(
        "strength: {} of {}, tier: {:?}",
        report.strength, report.max_strength, report.classification.tier
    );

    (StatusCode::OK, Json(report)).into_response()
}
