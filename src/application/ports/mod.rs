// src/application/ports/mod.rs
pub mod security;
pub mod time;
pub mod util;

pub type TokenVerifierPort = dyn security::TokenVerifier;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
