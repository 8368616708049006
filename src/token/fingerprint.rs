//! Stable identifiers for tokens whose issuer omits `jti`.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// Derives a deterministic identifier from the encoded token string.
///
/// The value is a URL-safe base64 (no padding) SHA-256 digest of the raw `jwt` bytes. It is a
/// correlation key for logs and de-duplication only; it proves nothing about the token.
pub fn fingerprint(jwt: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(jwt.as_bytes());

	let digest = hasher.finalize();

	URL_SAFE_NO_PAD.encode(digest)
}
