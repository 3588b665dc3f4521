use crate::locale::LocaleSet;
use anyhow::{Context, Result, anyhow};
use axum::{
    Extension, Json, Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Method, Request, header::CONTENT_TYPE},
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, info, info_span};
use ulid::Ulid;
use url::Url;

pub mod handlers;
pub mod store;
// OpenAPI router wiring and route registration live in openapi.rs.
mod openapi;

pub use openapi::openapi;
pub use store::UserStore;

/// Build the full application router.
///
/// # Errors
/// Returns an error if `frontend_origin` is not a URL with a host.
pub fn app(locales: LocaleSet, frontend_origin: Option<&str>) -> Result<Router> {
    let locales = Arc::new(locales);
    let users = Arc::new(UserStore::new());

    let allow_origin = match frontend_origin {
        Some(url) => AllowOrigin::exact(origin_header(url)?),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin);

    // Documented API routes first, then pages and the document itself.
    let (router, openapi) = openapi::api_router().split_for_parts();
    let openapi = Arc::new(openapi);

    let app = router
        .route("/", get(handlers::pages::login))
        .route("/signup", get(handlers::pages::signup))
        .route("/:lang", get(handlers::pages::localized_login))
        .route("/:lang/signup", get(handlers::pages::localized_signup))
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let openapi = Arc::clone(&openapi);
                async move { Json(openapi.as_ref().clone()) }
            }),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(locales))
                .layer(Extension(users)),
        );

    Ok(app)
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, locales: LocaleSet, frontend_origin: Option<&str>) -> Result<()> {
    let app = app(locales, frontend_origin)?;

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", err);
            }
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

/// Reduce a frontend URL to the exact `Origin` header value browsers send.
fn origin_header(frontend_base_url: &str) -> Result<HeaderValue> {
    let parsed = Url::parse(frontend_base_url)
        .with_context(|| format!("Invalid frontend base URL: {frontend_base_url}"))?;
    let host = parsed.host_str().ok_or_else(|| {
        anyhow!("Frontend base URL must include a valid host: {frontend_base_url}")
    })?;
    let port = parsed
        .port()
        .map_or_else(String::new, |port| format!(":{port}"));
    let origin = format!("{}://{}{}", parsed.scheme(), host, port);
    HeaderValue::from_str(&origin).context("Failed to build frontend origin header")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_header() {
        let origin = origin_header("http://localhost:5173/signup?x=1").ok();
        assert_eq!(
            origin.as_ref().and_then(|value| value.to_str().ok()),
            Some("http://localhost:5173")
        );

        let origin = origin_header("https://acesso.dev").ok();
        assert_eq!(
            origin.as_ref().and_then(|value| value.to_str().ok()),
            Some("https://acesso.dev")
        );

        assert!(origin_header("not a url").is_err());
        assert!(origin_header("mailto:team@acesso.dev").is_err());
    }

    #[test]
    fn test_app_rejects_bad_origin() {
        assert!(app(LocaleSet::default(), Some("::bad::")).is_err());
        assert!(app(LocaleSet::default(), None).is_ok());
    }
}
