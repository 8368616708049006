//! Normalize decoded identity-provider claim payloads into immutable access-token and id-token
//! views, with structured validation failures and a layered claim taxonomy.
//!
//! The crate never verifies signatures nor decodes the encoded token; callers hand in the
//! already-parsed claims body as a [`serde_json::Value`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod assert;
pub mod claims;
pub mod error;
pub mod obs;
pub mod token;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::token::AccessTokenInput;

	/// Issuer URL shared by the managed-directory fixtures.
	pub const TEST_ISSUER: &str =
		"https://cognito-idp.ap-southeast-1.amazonaws.com/ap-southeast-1_xxxxxxxxxxxxxx";
	/// Source address attached to access-token fixtures.
	pub const TEST_IP: &str = "192.2.0.1";

	/// Minimal access-token claim set with a `jti`.
	pub fn access_claims_fixture() -> Value {
		serde_json::json!({
			"iss": "https://issuer/x",
			"iat": 111111111,
			"exp": 111111111,
			"sub": "u1",
			"client_id": "c1",
			"jti": "j1",
			"scope": "admin",
		})
	}

	/// Minimal id-token claim set.
	pub fn id_claims_fixture() -> Value {
		serde_json::json!({
			"iss": "https://issuer/x",
			"iat": 111111111,
			"exp": 111111111,
			"sub": "u1",
		})
	}

	/// Wraps claims into an access-token input using a pseudo-encoded JWT derived from the
	/// claims themselves and the shared test IP.
	pub fn access_input(claims: Value) -> AccessTokenInput {
		let jwt = pseudo_jwt(&claims);

		AccessTokenInput::new(jwt, claims).with_ips([TEST_IP])
	}

	/// Stand-in for an encoded token: base64 of the JSON claims.
	pub fn pseudo_jwt(claims: &Value) -> String {
		use base64::{Engine as _, engine::general_purpose::STANDARD};

		STANDARD.encode(claims.to_string())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

pub use serde_json;
pub use time;
#[cfg(test)] use color_eyre as _;
