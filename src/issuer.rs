use std::fs;
use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::claims::Claims;
use crate::config::IssuerConfig;
use crate::error::{IssueError, IssueResult};

/// Signs bearer tokens from a PEM-encoded RSA private key on disk.
///
/// The key is re-read on every call; the issuer holds no key material
/// between invocations.
pub struct TokenIssuer {
    config: IssuerConfig,
}

impl TokenIssuer {
    pub fn new(config: IssuerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Read the key at `key_path` and return a compact RS256 token for
    /// the configured subject and expiry window.
    pub fn issue(&self, key_path: &Path) -> IssueResult<String> {
        let private_pem = fs::read_to_string(key_path).map_err(|_| IssueError::KeyNotFound {
            path: key_path.to_path_buf(),
        })?;

        let encoding_key = EncodingKey::from_rsa_pem(private_pem.as_bytes())
            .map_err(|err| IssueError::Signing(format!("failed to parse RSA private key: {err}")))?;

        let issued_at = Utc::now();
        let claims = Claims::new(&self.config.subject, issued_at, self.config.expiry_seconds);

        let header = Header::new(Algorithm::RS256);
        let token = encode(&header, &claims, &encoding_key)?;

        debug!(
            subject = %claims.sub,
            expires_at = claims.exp,
            "signed bearer token"
        );
        Ok(token)
    }
}
