//! Session state for a logged in account.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::{error::Error, models::user::User, result::Result};

/// A live login session.
///
/// Holds the bearer token plus everything needed to silently renew it:
/// the credentials are kept verbatim so the dispatcher can re-run the
/// login flow once the token's `exp` claim has passed.
#[derive(Clone)]
pub(crate) struct Session {
    pub(crate) access_token: String,
    pub(crate) login: String,
    pub(crate) password: String,
    /// Expiry instant decoded from the token's `exp` claim.
    pub(crate) expires_at: DateTime<Utc>,
    /// Snapshot of the account taken at login.
    pub(crate) user: User,
}

impl Session {
    pub(crate) fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

// Credentials stay out of log output.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("login", &self.login)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Extracts the expiry instant from a JWT access token.
///
/// The token is not verified. Only the payload segment is decoded, far
/// enough to read the `exp` claim.
pub(crate) fn token_expiry(token: &str) -> Result<DateTime<Utc>> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::Token("token is not a three-part JWT".to_string()))?;
    let raw = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| Error::Token(e.to_string()))?;
    let claims: Claims = serde_json::from_slice(&raw).map_err(|e| Error::Token(e.to_string()))?;
    Utc.timestamp_opt(claims.exp, 0)
        .single()
        .ok_or_else(|| Error::Token(format!("exp claim {} is out of range", claims.exp)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::Duration;
    use serde_json::json;

    fn fake_token(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(json!({ "exp": exp, "sub": 42 }).to_string());
        format!("{header}.{payload}.unverified-signature")
    }

    fn fake_user() -> User {
        serde_json::from_value(json!({ "id": 42, "name": "tester" })).expect("user fixture")
    }

    #[test]
    fn expiry_is_read_from_the_payload() -> Result<()> {
        let expires_at = token_expiry(&fake_token(4_102_444_800))?;
        assert_eq!(expires_at.timestamp(), 4_102_444_800);
        Ok(())
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(matches!(token_expiry("no-dots-here"), Err(Error::Token(_))));
        assert!(matches!(token_expiry("a.!!!.c"), Err(Error::Token(_))));

        let no_exp = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode("{}"),
            URL_SAFE_NO_PAD.encode(r#"{"sub":1}"#)
        );
        assert!(matches!(token_expiry(&no_exp), Err(Error::Token(_))));
    }

    #[test]
    fn session_expiry_tracks_the_clock() {
        let mut session = Session {
            access_token: fake_token(0),
            login: "user".to_string(),
            password: "hunter2".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            user: fake_user(),
        };
        assert!(!session.is_expired());

        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let session = Session {
            access_token: fake_token(0),
            login: "user".to_string(),
            password: "hunter2".to_string(),
            expires_at: Utc::now(),
            user: fake_user(),
        };
        let printed = format!("{session:?}");
        assert!(!printed.contains("hunter2"));
    }
}
