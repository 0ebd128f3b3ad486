pub mod docs;
pub mod health;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, request::Parts, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::analysis::handlers;
use crate::state::AppState;

/// Whole-request cap. Well above the 5 MiB file limit so oversize CVs reach the validator.
const MAX_REQUEST_BODY_BYTES: usize = 30_000_000;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.allowed_origins.clone());

    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-cv", post(handlers::handle_analyze_cv));

    if state.config.environment.is_development() {
        router = router
            .route("/openapi.json", get(docs::openapi_handler))
            .layer(middleware::from_fn(redirect_to_https));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Any header and method, credentials allowed, origins restricted to the allow-list.
fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin.to_str().is_ok_and(|origin| {
                    allowed_origins
                        .iter()
                        .any(|allowed| origin_matches(allowed, origin))
                })
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Exact match, or `scheme://*.domain` matching any subdomain of `domain`.
fn origin_matches(allowed: &str, origin: &str) -> bool {
    match allowed.split_once("*.") {
        Some((scheme, domain)) => origin
            .strip_prefix(scheme)
            .and_then(|host| host.strip_suffix(domain))
            .and_then(|sub| sub.strip_suffix('.'))
            .is_some_and(|sub| !sub.is_empty() && !sub.contains('/')),
        None => allowed == origin,
    }
}

/// Redirects requests a proxy received over plain HTTP to their HTTPS URL.
async fn redirect_to_https(request: Request, next: Next) -> Response {
    let forwarded_http = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("http"));

    if forwarded_http {
        if let Some(host) = request
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
        {
            let path = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            return Redirect::temporary(&format!("https://{host}{path}")).into_response();
        }
    }

    next.run(request).await
}
