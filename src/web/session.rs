//! Cookie-backed session: the chosen display name plus pending flash
//! messages, serialized as JSON into one signed cookie.

use crate::errors::{AppError, AppResult};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

pub const SESSION_COOKIE: &str = "session";

/// Derive the 64-byte signing key from an arbitrary-length secret.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flashes: Vec<String>,
}

impl Session {
    /// Read the session from the jar. Missing, unsigned or tampered cookies
    /// (the jar drops those) and undecodable payloads yield an empty session.
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|c| serde_json::from_str(c.value()).ok())
            .unwrap_or_default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn login(&mut self, name: impl Into<String>) {
        self.username = Some(name.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flashes.push(message.into());
    }

    /// Flashes are shown once: reading them empties the queue.
    pub fn take_flashes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.flashes)
    }

    /// Write the session back into the jar; an empty session removes the
    /// cookie altogether.
    pub fn save(&self, jar: SignedCookieJar) -> AppResult<SignedCookieJar> {
        if *self == Self::default() {
            return Ok(jar.remove(Cookie::build(SESSION_COOKIE).path("/")));
        }

        let value = serde_json::to_string(self)
            .map_err(|e| AppError::Other(format!("failed to encode session: {e}")))?;
        let cookie = Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        Ok(jar.add(cookie))
    }
}

/// Extractor for routes behind the session gate: yields the logged-in name
/// or redirects to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/login"))?;

        match Session::from_jar(&jar).username() {
            Some(name) => Ok(CurrentUser(name.to_string())),
            None => Err(Redirect::to("/login")),
        }
    }
}
