use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::debug;

use crate::routes::{APP_PATH, LOGIN_PATH};
use crate::session::Session;
use crate::state::StaticPages;
use crate::utils::found;

pub async fn login_page(State(pages): State<Arc<StaticPages>>, request: Request) -> Response {
    serve_file(&pages.login, request).await
}

pub async fn app_page(State(pages): State<Arc<StaticPages>>, request: Request) -> Response {
    serve_file(&pages.app, request).await
}

/// Admin page, only for sessions whose role was resolved as admin at login.
/// Everyone else is sent to `/app` without an error.
pub async fn admin_page(
    State(pages): State<Arc<StaticPages>>,
    session: Session,
    request: Request,
) -> Response {
    match session.user() {
        Some(user) if user.is_admin() => serve_file(&pages.admin, request).await,
        Some(user) => {
            debug!("Non-admin {} redirected from admin page", user.email);
            found(APP_PATH)
        }
        // require_auth sudah redirect request tanpa session
        None => found(LOGIN_PATH),
    }
}

/// Catch-all: unknown paths, unsupported methods and missing assets.
pub async fn redirect_to_login() -> Response {
    found(LOGIN_PATH)
}

async fn serve_file(path: &Path, request: Request) -> Response {
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
