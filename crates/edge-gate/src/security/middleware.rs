use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::routes::LOGIN_PATH;
use crate::session::Session;
use crate::utils::found;

/// Auth gate - request lanjut kalau session punya user, selain itu redirect
/// ke `/login`. Session tidak pernah diubah di sini.
pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    if session.is_authenticated() {
        return next.run(request).await;
    }

    debug!("Unauthenticated request to {}", request.uri().path());
    found(LOGIN_PATH)
}
