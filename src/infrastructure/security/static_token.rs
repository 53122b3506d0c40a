// src/infrastructure/security/static_token.rs
use crate::application::{
    dto::AdminUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenVerifier,
};
use async_trait::async_trait;

const ADMIN_SUBJECT: &str = "admin";

/// Accepts a single shared admin token configured at startup.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("expected", &"<redacted>")
            .finish()
    }
}

/// Compares every byte regardless of where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AdminUser> {
        let token = token.trim();
        if token.is_empty() || self.expected.is_empty() {
            return Err(ApplicationError::unauthorized("missing bearer token"));
        }
        if !constant_time_eq(token.as_bytes(), self.expected.as_bytes()) {
            tracing::debug!("admin token rejected");
            return Err(ApplicationError::unauthorized("invalid token"));
        }
        Ok(AdminUser::new(ADMIN_SUBJECT))
    }
}
