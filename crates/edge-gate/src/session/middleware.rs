use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tracing::debug;

use super::codec::SessionCodec;
use super::model::{Session, SessionChange};
use crate::utils::error::GateError;

/// Session middleware - decode cookie ke request extensions, lalu tulis
/// ulang cookie kalau handler mengembalikan [`SessionChange`].
pub async fn session_layer(
    State(codec): State<Arc<SessionCodec>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match jar.get(codec.cookie_name()) {
        Some(cookie) => codec.decode(cookie.value()).unwrap_or_else(|e| {
            debug!("Ignoring session cookie: {}", e);
            Session::anonymous()
        }),
        None => Session::anonymous(),
    };
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<SessionChange>() {
        None => response,
        Some(SessionChange::Set(session)) => match codec.encode(&session) {
            Ok(value) => (jar.add(codec.cookie(value)), response).into_response(),
            Err(e) => GateError::Internal(e.to_string()).into_response(),
        },
        Some(SessionChange::Clear) => (jar.remove(codec.removal_cookie()), response).into_response(),
    }
}
