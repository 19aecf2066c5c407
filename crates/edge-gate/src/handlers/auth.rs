// ============================================================================
// Login / logout handlers
// File: crates/edge-gate/src/handlers/auth.rs
// ============================================================================

use axum::{
    extract::{rejection::FormRejection, State},
    response::IntoResponse,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::{normalize_email, AllowList};
use crate::routes::LOGIN_PATH;
use crate::session::{Session, SessionChange};
use crate::utils::{found, GateError};

/// Login form payload (`application/x-www-form-urlencoded`)
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login handler - POST /login
pub async fn login_submit(
    State(allow_list): State<Arc<AllowList>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<impl IntoResponse, GateError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Unreadable login form: {}", rejection);
            LoginForm::default()
        }
    };

    let Some(user) = allow_list.verify(&form.email, &form.password) else {
        info!("Login rejected for '{}'", normalize_email(&form.email));
        return Err(GateError::InvalidCredentials);
    };

    info!("Login succeeded: {} ({})", user.email, user.role.as_str());
    let target = user.role.landing_path();

    Ok((SessionChange::Set(Session::for_user(user)), found(target)))
}

/// Logout handler - POST /logout
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Some(user) = session.user() {
        info!("Logout: {}", user.email);
    }

    (SessionChange::Clear, found(LOGIN_PATH))
}
