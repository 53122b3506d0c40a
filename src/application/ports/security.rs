// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminUser};
use async_trait::async_trait;

/// Verifies bearer credentials issued by the external identity provider.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Resolve `token` to an admin identity or fail with
    /// `ApplicationError::Unauthorized`.
    async fn verify(&self, token: &str) -> ApplicationResult<AdminUser>;
}
