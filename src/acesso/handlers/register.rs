use super::{LangQuery, catalog_for, error_response};
use crate::{
    acesso::store::{StoreError, User, UserStore},
    i18n::MessageKey,
    locale::LocaleSet,
};
use axum::{
    extract::{Extension, Json, Query, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use tracing::{error, info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Default)]
#[serde(default)]
pub struct UserRegister {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegister")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[utoipa::path(
    post,
    path= "/api/register",
    params(LangQuery),
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = UserResponse, content_type = "application/json"),
        (status = 400, description = "Missing fields or email already registered", body = super::ErrorBody),
        (status = 404, description = "Language not supported", body = super::ErrorBody),
        (status = 500, description = "Request body could not be processed", body = super::ErrorBody),
    ),
    tag= "auth"
)]
// axum handler for the demo registration
#[instrument(skip(locales, users, payload))]
pub async fn register(
    locales: Extension<Arc<LocaleSet>>,
    users: Extension<Arc<UserStore>>,
    query: Query<LangQuery>,
    payload: Result<Json<UserRegister>, JsonRejection>,
) -> Response {
    let catalog = match catalog_for(&locales, query.lang.as_deref()) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let user = match payload {
        Ok(Json(user)) => user,
        Err(e) => {
            error!("Invalid register payload: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                catalog.get(MessageKey::ApiProcessingError),
            );
        }
    };

    let (Some(name), Some(email), Some(password)) = (
        present(user.name),
        present(user.email),
        present(user.password),
    ) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            catalog.get(MessageKey::ApiFieldsRequired),
        );
    };

    match users
        .register(name, email, SecretString::from(password))
        .await
    {
        Ok(user) => {
            info!("User {} registered", user.id);
            (
                StatusCode::CREATED,
                Json(UserResponse {
                    message: catalog.get(MessageKey::ApiRegistered).to_string(),
                    user,
                }),
            )
                .into_response()
        }
        Err(StoreError::EmailTaken) => {
            error!("User already exists");
            error_response(
                StatusCode::BAD_REQUEST,
                catalog.get(MessageKey::ApiEmailTaken),
            )
        }
    }
}
