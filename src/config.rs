use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_SUBJECT: &str = "powershell-client";
pub const DEFAULT_EXPIRY_SECONDS: i64 = 3600;

/// Issuance parameters. Defaults live on the value itself so the issuer
/// never consults hidden module state at signing time.
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    pub subject: String,
    pub expiry_seconds: i64,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }
}

pub fn load_issuer_config() -> Result<IssuerConfig> {
    let subject = env::var("JWT_SUBJECT")
        .ok()
        .and_then(|value| normalize_optional(&value))
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

    let expiry_seconds = env::var("JWT_EXPIRY_SECONDS")
        .ok()
        .and_then(|value| normalize_optional(&value))
        .map(|value| parse_expiry_seconds(&value))
        .transpose()
        .context("Failed to parse JWT_EXPIRY_SECONDS")?
        .unwrap_or(DEFAULT_EXPIRY_SECONDS);

    Ok(IssuerConfig {
        subject,
        expiry_seconds,
    })
}

// The original tool accepted any window, including non-positive ones, so
// parsing is the only validation applied here.
fn parse_expiry_seconds(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid expiry window '{value}'"))
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
