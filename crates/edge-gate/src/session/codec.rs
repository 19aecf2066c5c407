//! Signed cookie encoding for [`Session`].
//!
//! Cookie value: `base64url(json) "." base64url(hmac_sha256(secret, base64url(json)))`.
//! The JSON envelope carries the user and an absolute expiry; the server keeps
//! no session store of its own.

use axum_extra::extract::cookie::{Cookie, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use super::model::{Session, SessionUser};
use crate::config::settings::SessionConfig;

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed session cookie")]
    Malformed,

    #[error("Session signature mismatch")]
    BadSignature,

    #[error("Invalid session payload: {0}")]
    InvalidPayload(String),

    #[error("Session expired")]
    Expired,

    #[error("HMAC error: {0}")]
    Key(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    user: Option<SessionUser>,
    exp: i64,
}

#[derive(Clone)]
pub struct SessionCodec {
    secret: Vec<u8>,
    cookie_name: String,
    ttl_secs: i64,
    secure: bool,
}

impl SessionCodec {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret: config.secret.as_bytes().to_vec(),
            cookie_name: config.cookie_name.clone(),
            ttl_secs: config.ttl_secs,
            secure: config.secure,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn encode(&self, session: &Session) -> Result<String, CodecError> {
        self.encode_at(session, Utc::now().timestamp())
    }

    pub fn decode(&self, value: &str) -> Result<Session, CodecError> {
        self.decode_at(value, Utc::now().timestamp())
    }

    fn encode_at(&self, session: &Session, now: i64) -> Result<String, CodecError> {
        let envelope = Envelope {
            user: session.user.clone(),
            exp: now + self.ttl_secs,
        };
        let json = serde_json::to_vec(&envelope)
            .map_err(|e| CodecError::InvalidPayload(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    fn decode_at(&self, value: &str, now: i64) -> Result<Session, CodecError> {
        let (payload, signature) = value.split_once('.').ok_or(CodecError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| CodecError::Malformed)?;

        // Signature dulu, baru payload di-parse
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| CodecError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| CodecError::Malformed)?;
        let envelope: Envelope = serde_json::from_slice(&json)
            .map_err(|e| CodecError::InvalidPayload(e.to_string()))?;

        if envelope.exp <= now {
            return Err(CodecError::Expired);
        }

        Ok(Session {
            user: envelope.user,
        })
    }

    /// Session cookie carrying an encoded value.
    pub fn cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::seconds(self.ttl_secs))
            .build()
    }

    /// Cookie handed to `CookieJar::remove` to clear the session.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), String::new()))
            .path("/")
            .build()
    }

    fn mac(&self) -> Result<HmacSha256, CodecError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| CodecError::Key(e.to_string()))
    }
}
