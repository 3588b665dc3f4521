use super::{catalog_for, error_response};
use crate::{
    i18n::MessageKey,
    locale::LocaleSet,
    validation::{Field, FieldError, SignupFormInput, validate_field, validate_signup},
};
use axum::{
    extract::{Extension, Json, Query, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, error, instrument};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ValidateQuery {
    /// Language code for messages; defaults to the configured default language
    pub lang: Option<String>,
    /// Validate a single field only (blur), e.g. `confirmPassword`
    #[param(value_type = Option<String>)]
    pub field: Option<Field>,
}

#[derive(ToSchema, Serialize, Debug, PartialEq, Eq)]
pub struct SignupValidation {
    valid: bool,
    errors: BTreeMap<Field, FieldError>,
}

#[utoipa::path(
    post,
    path= "/api/validate/signup",
    params(ValidateQuery),
    request_body = SignupFormInput,
    responses (
        (status = 200, description = "Field-keyed validation errors, empty when the form is valid", body = SignupValidation, content_type = "application/json"),
        (status = 404, description = "Language not supported", body = super::ErrorBody),
        (status = 500, description = "Request body could not be processed", body = super::ErrorBody),
    ),
    tag= "validation"
)]
// axum handler for signup form validation
#[instrument(skip(locales, payload))]
pub async fn signup(
    locales: Extension<Arc<LocaleSet>>,
    query: Query<ValidateQuery>,
    payload: Result<Json<SignupFormInput>, JsonRejection>,
) -> Response {
    let catalog = match catalog_for(&locales, query.lang.as_deref()) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let input = match payload {
        Ok(Json(input)) => input,
        Err(e) => {
            error!("Invalid signup payload: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                catalog.get(MessageKey::ApiProcessingError),
            );
        }
    };

    debug!("input: {:?}", input);

    let errors: BTreeMap<Field, FieldError> = match query.field {
        Some(field) => validate_field(&input, field, catalog)
            .map(|error| (field, error))
            .into_iter()
            .collect(),
        None => validate_signup(&input, catalog).errors().clone(),
    };

    let validation = SignupValidation {
        valid: errors.is_empty(),
        errors,
    };

    (StatusCode::OK, Json(validation)).into_response()
}
