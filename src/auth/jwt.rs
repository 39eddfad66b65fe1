use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

use super::claims::Claims;

/// Signing and verification keys plus the access-token lifetime. Built from
/// the immutable process config; the secret is never read again after this.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs((ttl_minutes.max(0) as u64) * 60),
        }
    }
}

impl JwtKeys {
    fn sign_with_ttl(&self, subject: &str, ttl: TimeDuration) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + ttl;
        // jsonwebtoken accepts a token through the whole `exp` second; store
        // one second less so the token is invalid at its expiry instant.
        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.unix_timestamp().saturating_sub(1).max(0) as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(subject, "jwt signed");
        Ok(token)
    }

    pub fn sign(&self, subject: &str) -> anyhow::Result<String> {
        self.sign_with_ttl(subject, TimeDuration::seconds(self.ttl.as_secs() as i64))
    }

    /// Rejects on any structural, signature, or expiry defect. Zero leeway:
    /// a token is invalid the instant its expiry passes.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(subject = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}
