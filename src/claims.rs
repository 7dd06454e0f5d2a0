use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Payload of an issued token. Exactly three registered claims; the
/// verifying side owns any further policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Build a claim set anchored at `issued_at` with an expiry window of
    /// `expiry_seconds`. The window may be zero or negative; the claim
    /// set then describes a token that is already expired.
    pub fn new(subject: &str, issued_at: DateTime<Utc>, expiry_seconds: i64) -> Self {
        let expires_at = issued_at + Duration::seconds(expiry_seconds);
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}
