//! End-to-end checks of the HTTP surface, driven through the router without
//! binding a socket.

use acesso::{acesso::app, i18n::Language, locale::LocaleSet};
use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, Request::get(uri).body(Body::empty())?).await
}

async fn post(app: &Router, uri: &str, body: &Value) -> Result<(StatusCode, Value)> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, request).await
}

fn default_app() -> Result<Router> {
    app(LocaleSet::default(), None)
}

#[tokio::test]
async fn test_pages_resolve_language_from_path() -> Result<()> {
    let app = default_app()?;

    let (status, body) = get(&app, "/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "pt");
    assert_eq!(body["page"], "login");
    assert_eq!(body["texts"]["loginButton"], "Entrar");

    let (status, body) = get(&app, "/en/signup").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "en");
    assert_eq!(body["page"], "signup");
    assert_eq!(body["texts"]["signupTitle"], "Create Account");
    assert_eq!(body["links"][0]["path"], "/signup");
    assert_eq!(body["links"][1]["path"], "/en/signup");
    assert_eq!(body["links"][1]["current"], true);

    let (status, body) = get(&app, "/en").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "login");
    assert_eq!(body["language"], "en");

    Ok(())
}

#[tokio::test]
async fn test_unsupported_language_prefix_is_not_found() -> Result<()> {
    let app = default_app()?;

    let (status, body) = get(&app, "/es").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/fr/signup").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_english_only_deployment() -> Result<()> {
    let app = app(LocaleSet::new(vec![Language::En], Language::En)?, None)?;

    let (status, body) = get(&app, "/signup").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "en");

    let (status, _) = get(&app, "/pt").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, "/api/password/strength?lang=pt", &json!({"password": "x"})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_password_strength() -> Result<()> {
    let app = default_app()?;

    let (status, body) = post(
        &app,
        "/api/password/strength?lang=en",
        &json!({"password": "Abc1"}),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"], true);
    assert_eq!(body["strength"], 2);
    assert_eq!(body["maxStrength"], 4);
    assert_eq!(body["classification"]["tier"], "weak");
    assert_eq!(body["classification"]["label"], "Weak");
    assert_eq!(body["requirements"][0]["key"], "minLength");
    assert_eq!(body["requirements"][0]["satisfied"], false);

    let (status, body) = post(&app, "/api/password/strength", &json!({"password": ""})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"], false);
    assert_eq!(body["classification"]["tier"], "very-weak");
    assert_eq!(body["classification"]["label"], "Muito fraca");

    Ok(())
}

#[tokio::test]
async fn test_validate_signup() -> Result<()> {
    let app = default_app()?;

    let form = json!({
        "name": "Jo",
        "email": "bad",
        "password": "weak",
        "confirmPassword": "weak"
    });

    let (status, body) = post(&app, "/api/validate/signup", &form).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert!(body["errors"].get("name").is_none());
    assert_eq!(body["errors"]["email"]["key"], "emailInvalid");
    assert_eq!(body["errors"]["email"]["message"], "Email inválido");
    assert_eq!(body["errors"]["password"]["key"], "passwordMinLength");
    assert!(body["errors"].get("confirmPassword").is_none());

    let valid = json!({
        "name": "João Silva",
        "email": "joao@email.com",
        "password": "Abcdef1!",
        "confirmPassword": "Abcdef1!"
    });
    let (status, body) = post(&app, "/api/validate/signup?lang=en", &valid).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["errors"], json!({}));

    Ok(())
}

#[tokio::test]
async fn test_validate_single_field() -> Result<()> {
    let app = default_app()?;

    let form = json!({"password": "Abcdef1!", "confirmPassword": "Abcdef1?"});
    let (status, body) = post(
        &app,
        "/api/validate/signup?lang=en&field=confirmPassword",
        &form,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"]["confirmPassword"]["message"], "Passwords must match");
    assert!(body["errors"].get("name").is_none());

    // Query rejections answer with axum's plain-text body.
    let request = Request::post("/api/validate/signup?field=nickname")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&form)?))?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_register_and_login() -> Result<()> {
    let app = default_app()?;

    let user = json!({"name": "Ana", "email": "ana@x.io", "password": "Abcdef1!"});

    let (status, body) = post(&app, "/api/register?lang=en", &user).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["name"], "Ana");
    assert!(body["user"].get("password").is_none());
    assert!(body["message"].is_string());

    let (status, body) = post(&app, "/api/register", &user).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = post(
        &app,
        "/api/login",
        &json!({"email": "ana@x.io", "password": "Abcdef1!"}),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "ana@x.io");

    let (status, body) = post(
        &app,
        "/api/login",
        &json!({"email": "ana@x.io", "password": "wrong"}),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_register_requires_all_fields() -> Result<()> {
    let app = default_app()?;

    for user in [
        json!({"email": "ana@x.io", "password": "Abcdef1!"}),
        json!({"name": "Ana", "email": "", "password": "Abcdef1!"}),
        json!({}),
    ] {
        let (status, body) = post(&app, "/api/register", &user).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{user}");
        assert!(body["error"].is_string());
    }

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_server_error() -> Result<()> {
    let app = default_app()?;

    for uri in ["/api/register", "/api/login", "/api/password/strength"] {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))?;
        let (status, body) = send(&app, request).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(body["error"].is_string());
    }

    Ok(())
}

#[tokio::test]
async fn test_unknown_route() -> Result<()> {
    let app = default_app()?;

    let (status, pt) = get(&app, "/api/nothing").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, en) = get(&app, "/en/nothing/here").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(pt["error"], "Rota não encontrada");
    assert_eq!(en["error"], "Route not found");

    Ok(())
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let app = default_app()?;

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let x_app = response
        .headers()
        .get("X-App")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    assert!(x_app.is_some_and(|value| value.starts_with("acesso:")));

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["name"], "acesso");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[tokio::test]
async fn test_openapi_document() -> Result<()> {
    let app = default_app()?;

    let (status, body) = get(&app, "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "acesso");
    assert!(body["paths"]["/api/password/strength"]["post"].is_object());
    assert!(body["paths"]["/api/login"]["post"].is_object());
    let tags: Vec<&str> = body["tags"]
        .as_array()
        .map(|tags| tags.iter().filter_map(|tag| tag["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(tags, vec!["validation", "auth", "health"]);

    Ok(())
}

#[tokio::test]
async fn test_request_id() -> Result<()> {
    let app = default_app()?;

    let request = Request::get("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("req-123")
    );

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty())?)
        .await?;
    let generated = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::len);
    assert_eq!(generated, Some(26));

    Ok(())
}
