//! Session Token Signing
//!
//! The client-held token is `"{session_id}.{base64url(hmac)}"`. The HMAC
//! covers the session id string, so a token cannot be forged without the
//! server-side secret. The id itself stays opaque to the client.

use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};
use uuid::Uuid;

/// Produce a signed token for a session id
pub fn sign_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let id = session_id.to_string();
    let signature = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64_url(&signature))
}

/// Verify a token's signature and extract the session id
///
/// Returns `None` for malformed tokens, bad signatures, and unparseable ids.
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> Option<Uuid> {
    let (id, signature_b64) = token.split_once('.')?;

    let signature = from_base64_url(signature_b64).ok()?;
    let expected = hmac_sha256(secret, id.as_bytes());

    if !constant_time_eq(&expected, &signature) {
        return None;
    }

    id.parse().ok()
}
