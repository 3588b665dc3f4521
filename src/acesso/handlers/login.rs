use super::{LangQuery, catalog_for, error_response, register::UserResponse};
use crate::{acesso::store::UserStore, i18n::MessageKey, locale::LocaleSet};
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
pub struct UserLogin {
    email: String,
    password: String,
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/api/login",
    params(LangQuery),
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = UserResponse, content_type = "application/json"),
        (status = 400, description = "Invalid email or password", body = super::ErrorBody),
        (status = 404, description = "Language not supported", body = super::ErrorBody),
        (status = 500, description = "Request body could not be processed", body = super::ErrorBody),
    ),
    tag= "auth"
)]
// axum handler for the demo login
#[instrument(skip(locales, users, payload))]
pub async fn login(
    locales: Extension<Arc<LocaleSet>>,
    users: Extension<Arc<UserStore>>,
    query: Query<LangQuery>,
    payload: Result<Json<UserLogin>, JsonRejection>,
) -> Response {
    let catalog = match catalog_for(&locales, query.lang.as_deref()) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let credentials = match payload {
        Ok(Json(credentials)) => credentials,
        Err(e) => {
            error!("Invalid login payload: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                catalog.get(MessageKey::ApiProcessingError),
            );
        }
    };

    debug!("credentials: {:?}", credentials);

    match users
        .authenticate(&credentials.email, &credentials.password)
        .await
    {
        Some(user) => (
            StatusCode::OK,
            Json(UserResponse {
                message: catalog.get(MessageKey::ApiLoggedIn).to_string(),
                user,
            }),
        )
            .into_response(),
        None => error_response(
            StatusCode::BAD_REQUEST,
            catalog.get(MessageKey::ApiInvalidCredentials),
        ),
    }
}
