//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Read the database URL from the environment (`CHAUSSUP_DATABASE_URL`, with
/// a `DATABASE_URL` fallback).
pub fn database_url() -> Result<SecretString, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    std::env::var("CHAUSSUP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CHAUSSUP_DATABASE_URL not set".into())
}
