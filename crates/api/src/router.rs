//! Assembles the HTTP surface: the JSON API, the uploaded image files, the
//! health probe, and the middleware every request passes through.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so
//! tests exercise the production stack.

use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;
use crate::uploads::PUBLIC_URL_PREFIX;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preflight responses may be cached by browsers for this long.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Build the application router with its middleware and shared state.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let uploaded_images = ServeDir::new(state.uploads.dir());

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes(config))
        .nest_service(PUBLIC_URL_PREFIX, uploaded_images);

    with_middleware(app, config).with_state(state)
}

/// Wrap `app` in the request pipeline. Listed outermost first:
///
/// ```text
/// CORS -> assign x-request-id -> request span -> echo x-request-id
///      -> timeout -> panic -> 500
/// ```
fn with_middleware<S>(app: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    app.layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// One span per request, tagged with the id assigned by `SetRequestIdLayer`
/// so log lines can be matched to the `x-request-id` the client sees.
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// CORS for the web client origins in `CORS_ORIGINS`.
///
/// # Panics
///
/// Panics at startup if an origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins.iter().map(|origin| {
        HeaderValue::from_str(origin)
            .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
    });

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
