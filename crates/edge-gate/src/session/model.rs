// ============================================================================
// Session model
// File: crates/edge-gate/src/session/model.rs
// ============================================================================

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::routes::{ADMIN_PATH, APP_PATH};

const ADMIN_EMAIL: &str = "admin@hotel-dashboard.de";
const ADMIN_PREFIX: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Resolve the role for a login email. Admin iff the lower-cased email
    /// starts with `admin` or is the dashboard's admin address.
    pub fn for_email(email: &str) -> Self {
        let email = email.to_lowercase();
        if email.starts_with(ADMIN_PREFIX) || email == ADMIN_EMAIL {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Where a freshly logged-in user of this role lands.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::User => APP_PATH,
            Role::Admin => ADMIN_PATH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        let role = Role::for_email(&email);
        Self { email, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Per-browser session state. Anonymous until a login succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Extracts the session decoded by [`session_layer`](super::session_layer).
/// Requests that never went through the layer are anonymous.
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Session>().cloned().unwrap_or_default())
    }
}

/// A handler's request to rewrite the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionChange {
    Set(Session),
    Clear,
}

impl IntoResponseParts for SessionChange {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_email() {
        assert_eq!(Role::for_email("admin@hotel-dashboard.de"), Role::Admin);
        assert_eq!(Role::for_email("Admin.Ops@example.com"), Role::Admin);
        assert_eq!(Role::for_email("administrator@test.de"), Role::Admin);
        assert_eq!(Role::for_email("user@test.de"), Role::User);
        // prefix only, not substring
        assert_eq!(Role::for_email("sysadmin@test.de"), Role::User);
    }

    #[test]
    fn test_landing_path() {
        assert_eq!(Role::Admin.landing_path(), "/admin");
        assert_eq!(Role::User.landing_path(), "/app");
    }

    #[test]
    fn test_session_user_resolves_role_once() {
        let user = SessionUser::new("admin@hotel-dashboard.de");
        assert!(user.is_admin());

        let session = Session::for_user(SessionUser::new("user@test.de"));
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.role), Some(Role::User));
        assert!(!Session::anonymous().is_authenticated());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&SessionUser::new("admin@hotel-dashboard.de")).unwrap();
        assert_eq!(json, r#"{"email":"admin@hotel-dashboard.de","role":"admin"}"#);
    }
}
