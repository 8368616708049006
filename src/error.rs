//! Crate-level error types shared by the assertion primitives and token factories.

// self
use crate::{_prelude::*, assert::ValidationError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required claim failed its runtime shape check.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// A numeric timestamp claim cannot be represented as a calendar instant.
	#[error("Claim `{claim}` ({seconds}) is outside the representable time range.")]
	InstantOutOfRange {
		/// Claim name (`iat` or `exp`).
		claim: &'static str,
		/// Offending epoch-seconds value.
		seconds: f64,
	},
	/// The embedded claims do not match the requested typed claim shape.
	#[error("Claims do not match the requested shape at `{}`.", .source.path())]
	ClaimsShape {
		/// Structured decoding failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns the underlying [`ValidationError`] when this is a validation failure.
	pub fn as_validation(&self) -> Option<&ValidationError> {
		match self {
			Self::Validation(e) => Some(e),
			_ => None,
		}
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::ClaimsShape { source }
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;
	use crate::assert::ExpectedType;

	#[test]
	fn validation_error_converts_transparently() {
		let validation =
			ValidationError::new("sub is not a string", Value::from(123), ExpectedType::String);
		let error: Error = validation.clone().into();

		assert_eq!(error.to_string(), validation.to_string());
		assert_eq!(error.as_validation(), Some(&validation));
	}

	#[test]
	fn claims_shape_reports_path() {
		let mut de = serde_json::Deserializer::from_str("{\"iat\":\"soon\"}");
		let source = serde_path_to_error::deserialize::<_, IatOnly>(&mut de)
			.expect_err("A string iat must not decode into an integer field.");
		let error = Error::from(source);

		assert!(matches!(error, Error::ClaimsShape { .. }));
		assert!(error.to_string().contains("iat"));
		assert!(StdError::source(&error).is_some());
	}

	#[allow(dead_code)]
	#[derive(Debug, Deserialize)]
	struct IatOnly {
		iat: i64,
	}
}
