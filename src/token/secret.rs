//! Redacting wrapper for the encoded token string.

// self
use crate::{_prelude::*, token};

/// Encoded token retained for audit and replay detection; formatters redact it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EncodedToken(String);
impl EncodedToken {
	/// Wraps an encoded token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the encoded token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Loggable stand-in for the token; see [`token::fingerprint()`].
	pub fn fingerprint(&self) -> String {
		token::fingerprint(&self.0)
	}
}
impl AsRef<str> for EncodedToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for EncodedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("EncodedToken").field(&"<redacted>").finish()
	}
}
impl Display for EncodedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
