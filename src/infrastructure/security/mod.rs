// src/infrastructure/security/mod.rs
mod static_token;

pub use static_token::StaticTokenVerifier;
