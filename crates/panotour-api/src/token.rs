//! Session token issue and verification.
//!
//! Tokens are `v1.<base64(user id)>.<mac hex>` where the MAC is a keyed
//! blake3 hash of the payload under a key derived from the shared secret.
//! Verification recomputes the MAC and compares hash values, which is a
//! constant-time comparison.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

use panotour_models::UserId;

/// Current token format version.
pub const TOKEN_VERSION: &str = "v1";

/// Key-derivation context string; changing it invalidates all tokens.
const KEY_CONTEXT: &str = "panotour-api 2025-06-01 session token";

/// Errors produced by token verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not have the `version.payload.mac` shape.
    #[error("malformed token")]
    Malformed,

    /// The token's version is not supported.
    #[error("unsupported token version")]
    UnsupportedVersion,

    /// The MAC does not match the payload.
    #[error("signature mismatch")]
    BadSignature,
}

fn mac_key(secret: &str) -> [u8; 32] {
    blake3::derive_key(KEY_CONTEXT, secret.as_bytes())
}

/// Issues a token for `user_id` under the shared secret.
pub fn issue_token(user_id: &UserId, secret: &str) -> String {
    let payload = URL_SAFE_NO_PAD.encode(user_id.as_str());
    let mac = blake3::keyed_hash(&mac_key(secret), payload.as_bytes());
    format!("{}.{}.{}", TOKEN_VERSION, payload, mac.to_hex())
}

/// Verifies a presented token and returns the user it identifies.
pub fn verify_token(token: &str, secret: &str) -> Result<UserId, TokenError> {
    let mut parts = token.splitn(3, '.');
    let version = parts.next().ok_or(TokenError::Malformed)?;
    let payload = parts.next().ok_or(TokenError::Malformed)?;
    let mac_hex = parts.next().ok_or(TokenError::Malformed)?;

    if version != TOKEN_VERSION {
        return Err(TokenError::UnsupportedVersion);
    }

    let presented = blake3::Hash::from_hex(mac_hex).map_err(|_| TokenError::Malformed)?;
    let expected = blake3::keyed_hash(&mac_key(secret), payload.as_bytes());
    if expected != presented {
        return Err(TokenError::BadSignature);
    }

    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    let user_id = String::from_utf8(decoded).map_err(|_| TokenError::Malformed)?;
    Ok(UserId::from(user_id))
}
