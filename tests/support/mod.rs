use std::io::Write;

use anyhow::{ensure, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Generate a fresh 2048-bit key pair, returned as (private, public) PEM.
pub fn generate_key_pair() -> Result<(String, String)> {
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, 2048)?;
    let private_pem = private_key.to_pkcs8_pem(LineEnding::LF)?.to_string();
    let public_pem = private_key
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)?;
    Ok((private_pem, public_pem))
}

pub fn write_key_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Decode the payload segment of a compact token into loose JSON.
pub fn decode_payload(token: &str) -> Result<Value> {
    let segments = token.split('.').collect::<Vec<_>>();
    ensure!(
        segments.len() == 3,
        "expected three token segments, got {}",
        segments.len()
    );
    let bytes = URL_SAFE_NO_PAD.decode(segments[1])?;
    Ok(serde_json::from_slice(&bytes)?)
}
