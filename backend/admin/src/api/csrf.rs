use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use jwt::{Claims, Header, RegisteredClaims, SignWithKey, Token, VerifyWithKey};
use sha2::Sha256;

use crate::config::AppConfig;

/// Anti-forgery token embedded in every mutating form as `_token`.
///
/// Signed with the configured secret, it proves the submitting client
/// loaded a form we rendered recently.
pub struct CsrfToken {
    pub issued_at: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
}

impl CsrfToken {
    pub fn new(config: &AppConfig) -> Self {
        let now = Utc::now();

        Self {
            issued_at: now,
            expiration: now + Duration::minutes(config.csrf_ttl_minutes),
        }
    }

    pub fn serialize(&self, config: &AppConfig) -> Option<String> {
        let key = Hmac::<Sha256>::new_from_slice(config.csrf_secret.as_bytes()).ok()?;
        let claims = Claims::new(RegisteredClaims {
            issued_at: Some(self.issued_at.timestamp() as u64),
            expiration: Some(self.expiration.timestamp() as u64),
            issuer: Some(config.csrf_issuer.to_string()),
            json_web_token_id: None,
            subject: None,
            not_before: None,
            audience: None,
        });

        claims.sign_with_key(&key).ok()
    }

    pub fn verify(config: &AppConfig, token: &str) -> Option<Self> {
        let key = Hmac::<Sha256>::new_from_slice(config.csrf_secret.as_bytes()).ok()?;
        let token: Token<Header, Claims, _> = token.verify_with_key(&key).ok()?;

        let claims = token.claims();

        if claims.registered.issuer.clone()? != config.csrf_issuer {
            return None;
        }

        let iat = Utc
            .timestamp_opt(claims.registered.issued_at? as i64, 0)
            .single()?;
        if iat > Utc::now() {
            return None;
        }

        let exp = Utc
            .timestamp_opt(claims.registered.expiration? as i64, 0)
            .single()?;
        if exp < Utc::now() {
            return None;
        }

        Some(Self {
            issued_at: iat,
            expiration: exp,
        })
    }
}
