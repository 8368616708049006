//! Provider-neutral claim shapes.

// self
use crate::{
	_prelude::*,
	claims::{AccessClaims, IdClaims, JtiClaim, impl_claims},
};

/// Token-use discriminator carried in the `token_use` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
	/// Identity token.
	Id,
	/// Access token.
	Access,
}
impl TokenUse {
	/// Returns the claim value for this discriminator.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenUse::Id => "id",
			TokenUse::Access => "access",
		}
	}
}
impl Display for TokenUse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `token_use` pinned to `"id"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdUse {
	/// The only accepted value.
	#[default]
	#[serde(rename = "id")]
	Id,
}

/// `token_use` pinned to `"access"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessUse {
	/// The only accepted value.
	#[default]
	#[serde(rename = "access")]
	Access,
}

/// Registered claims present on every token.
///
/// `J` selects whether `jti` is optional (`Option<String>`, the default) or required
/// (`String`). Timestamps are epoch seconds and may be fractional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "J: JtiClaim")]
pub struct RegisteredClaims<J = Option<String>> {
	/// Issuer URL.
	pub iss: String,
	/// Issued-at, epoch seconds.
	pub iat: f64,
	/// Expiry, epoch seconds.
	pub exp: f64,
	/// Subject identifier.
	pub sub: String,
	/// Unique token identifier.
	#[serde(skip_serializing_if = "JtiClaim::is_absent")]
	pub jti: J,
}

/// Registered claims with an optional, unpinned `token_use`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommonClaims {
	/// Token-use discriminator, when present.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_use: Option<TokenUse>,
	/// Registered base claims.
	#[serde(flatten)]
	pub registered: RegisteredClaims,
}
impl_claims!(CommonClaims, None, Option<String>, |c| &c.registered);

/// Generic identity-token claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdTokenClaims {
	/// Always `"id"`.
	pub token_use: IdUse,
	/// Registered base claims.
	#[serde(flatten)]
	pub registered: RegisteredClaims,
}
impl_claims!(IdTokenClaims, Some(TokenUse::Id), Option<String>, |c| &c.registered);
impl IdClaims for IdTokenClaims {}

/// Generic access-token claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
	/// Always `"access"`.
	pub token_use: AccessUse,
	/// OAuth client the token was issued to.
	pub client_id: String,
	/// Registered base claims.
	#[serde(flatten)]
	pub registered: RegisteredClaims,
}
impl_claims!(AccessTokenClaims, Some(TokenUse::Access), Option<String>, |c| &c.registered);
impl AccessClaims for AccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.client_id
	}
}

/// Generic access-token claims for issuers that always mint a `jti`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedAccessTokenClaims {
	/// Always `"access"`.
	pub token_use: AccessUse,
	/// OAuth client the token was issued to.
	pub client_id: String,
	/// Registered base claims with a mandatory `jti`.
	#[serde(flatten)]
	pub registered: RegisteredClaims<String>,
}
impl_claims!(IdentifiedAccessTokenClaims, Some(TokenUse::Access), String, |c| &c.registered);
impl AccessClaims for IdentifiedAccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.client_id
	}
}

/// Loosest shape accepted by either factory: any token use, with a client id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnyClaims {
	/// Token-use discriminator, when present.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_use: Option<TokenUse>,
	/// OAuth client the token was issued to.
	pub client_id: String,
	/// Registered base claims.
	#[serde(flatten)]
	pub registered: RegisteredClaims,
}
impl_claims!(AnyClaims, None, Option<String>, |c| &c.registered);
impl AccessClaims for AnyClaims {
	fn client_id(&self) -> &str {
		&self.client_id
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::claims::Claims;

	#[test]
	fn pinned_token_use_rejects_the_other_kind() {
		let id = json!({ "token_use": "id", "iss": "i", "iat": 1, "exp": 2, "sub": "s" });
		let claims: IdTokenClaims =
			serde_json::from_value(id.clone()).expect("Id claims fixture should decode.");

		assert_eq!(claims.registered().sub, "s");
		assert_eq!(claims.registered().jti, None);
		assert!(serde_json::from_value::<AccessTokenClaims>(id).is_err());
	}

	#[test]
	fn common_claims_accept_missing_token_use() {
		let claims: CommonClaims =
			serde_json::from_value(json!({ "iss": "i", "iat": 1, "exp": 2, "sub": "s", "jti": "j" }))
				.expect("Common claims without token_use should decode.");

		assert_eq!(claims.token_use, None);
		assert_eq!(claims.jti(), Some("j"));
		assert_eq!(<CommonClaims as Claims>::TOKEN_USE, None);
	}

	#[test]
	fn flattened_shapes_serialize_flat() {
		let claims = AccessTokenClaims {
			token_use: AccessUse::Access,
			client_id: "c1".into(),
			registered: RegisteredClaims {
				iss: "i".into(),
				iat: 1.,
				exp: 2.,
				sub: "s".into(),
				jti: None,
			},
		};

		assert_eq!(
			serde_json::to_value(&claims).expect("Access claims should serialize."),
			json!({ "token_use": "access", "client_id": "c1", "iss": "i", "iat": 1.0, "exp": 2.0, "sub": "s" })
		);
		assert_eq!(TokenUse::Access.to_string(), "access");
	}

	#[test]
	fn identified_access_claims_require_jti() {
		let mut claims = json!({
			"token_use": "access",
			"client_id": "c1",
			"iss": "i",
			"iat": 1,
			"exp": 2,
			"sub": "s",
		});
		let err = serde_json::from_value::<IdentifiedAccessTokenClaims>(claims.clone())
			.expect_err("A missing jti must be rejected.");

		assert!(err.to_string().contains("jti"), "{err}");

		let optional: AccessTokenClaims =
			serde_json::from_value(claims.clone()).expect("The generic shape tolerates no jti.");

		assert_eq!(optional.jti(), None);

		claims["jti"] = json!("j1");

		let identified: IdentifiedAccessTokenClaims =
			serde_json::from_value(claims).expect("A present jti should decode.");

		assert_eq!(identified.jti(), Some("j1"));
		assert_eq!(identified.registered.jti, "j1");
		assert_eq!(<IdentifiedAccessTokenClaims as Claims>::TOKEN_USE, Some(TokenUse::Access));
	}

	#[test]
	fn fractional_timestamps_decode() {
		let claims: CommonClaims =
			serde_json::from_value(json!({ "iss": "i", "iat": 1.5, "exp": 3601.25, "sub": "s" }))
				.expect("Fractional epoch seconds are valid timestamps.");

		assert_eq!(claims.registered.iat, 1.5);
		assert_eq!(claims.registered.exp - claims.registered.iat, 3599.75);
	}
}
