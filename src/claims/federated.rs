//! Federated-identity (social login) extensions of the user-pool shapes.

// self
use crate::{
	_prelude::*,
	claims::{
		AccessClaims, CognitoAccessTokenClaims, CognitoIdTokenClaims, IdClaims, TokenUse,
		impl_claims,
	},
};

/// Upstream identity provider entry in the `identities` claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentity {
	/// User identifier at the upstream provider.
	pub user_id: String,
	/// Provider name, e.g. `Google`.
	pub provider_name: String,
	/// Provider type, e.g. `Google`.
	pub provider_type: String,
	/// Upstream issuer, usually `null`.
	pub issuer: Option<String>,
	/// Stringly-typed primary flag (`"true"`/`"false"`).
	pub primary: String,
	/// Link creation instant, epoch milliseconds as a string.
	pub date_created: String,
}
impl FederatedIdentity {
	/// Returns `true` if the upstream marks this identity as primary.
	pub fn is_primary(&self) -> bool {
		self.primary == "true"
	}
}

/// Identity-token claims for a user signed in through a social provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoGoogleIdTokenClaims {
	/// Identifier of the originating authentication session.
	pub origin_jti: String,
	/// Hash of the access token issued alongside this id token.
	pub at_hash: String,
	/// Whether the upstream provider verified the email address.
	pub email_verified: bool,
	/// Linked upstream identities.
	pub identities: Vec<FederatedIdentity>,
	/// User-pool id-token claims.
	#[serde(flatten)]
	pub base: CognitoIdTokenClaims,
}
impl_claims!(
	CognitoGoogleIdTokenClaims,
	Some(TokenUse::Id),
	Option<String>,
	|c| &c.base.registered
);
impl IdClaims for CognitoGoogleIdTokenClaims {}

/// Access-token claims for a user signed in through a social provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoGoogleAccessTokenClaims {
	/// Claims layout version.
	pub version: u8,
	/// User-pool access-token claims.
	#[serde(flatten)]
	pub base: CognitoAccessTokenClaims,
}
impl_claims!(
	CognitoGoogleAccessTokenClaims,
	Some(TokenUse::Access),
	String,
	|c| &c.base.registered
);
impl AccessClaims for CognitoGoogleAccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.base.client_id
	}

	fn scope(&self) -> Option<&str> {
		Some(&self.base.scope)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn google_id_claims_decode_identities() {
		let claims: CognitoGoogleIdTokenClaims = serde_json::from_value(json!({
			"at_hash": "HUILGYBUIKGYIKGYUKgyukGYUKgyukGYUK",
			"sub": "user-1",
			"cognito:groups": ["ap-southeast-1_pool_Google"],
			"email_verified": false,
			"iss": "https://cognito-idp.example/pool",
			"cognito:username": "Google_99999999999999999999",
			"origin_jti": "origin-1",
			"aud": "client-1",
			"identities": [{
				"userId": "99999999999999999999999999",
				"providerName": "Google",
				"providerType": "Google",
				"issuer": null,
				"primary": "true",
				"dateCreated": "999999999999999",
			}],
			"token_use": "id",
			"auth_time": 111111111,
			"exp": 11111111111_i64,
			"iat": 1111111111,
			"email": "test@example.com",
		}))
		.expect("Google id claims fixture should decode.");

		assert!(claims.base.username.starts_with("Google"));
		assert!(!claims.email_verified);
		assert_eq!(claims.identities.len(), 1);
		assert!(claims.identities[0].is_primary());
		assert_eq!(claims.identities[0].issuer, None);
	}

	#[test]
	fn google_access_claims_require_version() {
		let without_version = json!({
			"sub": "user-1",
			"iss": "i",
			"client_id": "client-1",
			"origin_jti": "origin-1",
			"token_use": "access",
			"scope": "openid email",
			"auth_time": 1,
			"exp": 2,
			"iat": 1,
			"username": "Google_1",
		});

		assert!(serde_json::from_value::<CognitoGoogleAccessTokenClaims>(without_version).is_err());
	}
}
