use axum::{
    extract::{DefaultBodyLimit, Request, State},
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{auth, health, pages};
use crate::security::{require_auth, security_headers};
use crate::session::session_layer;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const APP_PATH: &str = "/app";
pub const ADMIN_PATH: &str = "/admin";

pub fn build_router(state: AppState) -> Router {
    let asset_cache = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.settings.static_files.asset_max_age_secs
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("public, max-age=604800"));

    // Public routes (tanpa session)
    let public_routes = Router::new()
        .route(
            "/healthz",
            get(health::healthz).fallback(pages::redirect_to_login),
        )
        .route(
            "/",
            get(pages::redirect_to_login).fallback(pages::redirect_to_login),
        )
        .route(
            LOGIN_PATH,
            get(pages::login_page)
                .post(auth::login_submit)
                .fallback(pages::redirect_to_login),
        );

    // Protected routes (dengan auth gate)
    let protected_routes = Router::new()
        .route(
            APP_PATH,
            get(pages::app_page).fallback(pages::redirect_to_login),
        )
        .route(
            ADMIN_PATH,
            get(pages::admin_page).fallback(pages::redirect_to_login),
        )
        .route(
            "/logout",
            post(auth::logout).fallback(pages::redirect_to_login),
        )
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest("/assets", assets_router(&state.pages.assets_dir, asset_cache))
        .fallback(pages::redirect_to_login)
        .layer(middleware::from_fn_with_state(state.clone(), session_layer))
        .layer(DefaultBodyLimit::max(state.settings.server.body_limit_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

/// Static assets. Missing files and non-GET methods fall through to the login
/// redirect and only
/// successful responses get the long-lived cache directive.
fn assets_router(dir: &Path, cache_control: HeaderValue) -> Router<AppState> {
    let serve_dir = ServeDir::new(dir)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(pages::redirect_to_login.into_service());

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn_with_state(cache_control, cache_assets))
}

async fn cache_assets(
    State(cache_control): State<HeaderValue>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if response.status().is_success() {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, cache_control);
    }
    response
}
