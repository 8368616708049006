//! Managed user-directory (Cognito user pool) claim extensions.
//!
//! These shapes are strict supersets of the generic id/access shapes; they add fields but
//! never relax the base contract.

// self
use crate::{
	_prelude::*,
	claims::{AccessClaims, AccessUse, IdClaims, IdUse, RegisteredClaims, TokenUse, impl_claims},
};

/// Identity-token claims issued by a user pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoIdTokenClaims {
	/// Always `"id"`.
	pub token_use: IdUse,
	/// App client the token was minted for.
	pub aud: String,
	/// Instant the user authenticated, epoch seconds.
	pub auth_time: f64,
	/// Primary email address.
	pub email: String,
	/// Pool username.
	#[serde(rename = "cognito:username")]
	pub username: String,
	/// Pool group memberships.
	#[serde(rename = "cognito:groups", default)]
	pub groups: Vec<String>,
	/// Registered base claims.
	#[serde(flatten)]
	pub registered: RegisteredClaims,
}
impl_claims!(CognitoIdTokenClaims, Some(TokenUse::Id), Option<String>, |c| &c.registered);
impl IdClaims for CognitoIdTokenClaims {}

/// Identity-token claims for a native (non-federated) sign-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoRegularIdTokenClaims {
	/// Sign-in event identifier.
	pub event_id: String,
	/// User-pool id-token claims.
	#[serde(flatten)]
	pub base: CognitoIdTokenClaims,
}
impl_claims!(
	CognitoRegularIdTokenClaims,
	Some(TokenUse::Id),
	Option<String>,
	|c| &c.base.registered
);
impl IdClaims for CognitoRegularIdTokenClaims {}

/// Access-token claims issued by a user pool on behalf of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoAccessTokenClaims {
	/// Always `"access"`.
	pub token_use: AccessUse,
	/// Identifier of the originating authentication session.
	pub origin_jti: String,
	/// Space-delimited scopes.
	pub scope: String,
	/// App client the token was issued to.
	pub client_id: String,
	/// Instant the user authenticated, epoch seconds.
	pub auth_time: f64,
	/// Pool username.
	pub username: String,
	/// Pool group memberships.
	#[serde(rename = "cognito:groups", default)]
	pub groups: Vec<String>,
	/// Registered base claims; user-pool access tokens always carry `jti`.
	#[serde(flatten)]
	pub registered: RegisteredClaims<String>,
}
impl_claims!(CognitoAccessTokenClaims, Some(TokenUse::Access), String, |c| &c.registered);
impl AccessClaims for CognitoAccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.client_id
	}

	fn scope(&self) -> Option<&str> {
		Some(&self.scope)
	}
}

/// Access-token claims for a native sign-in on a remembered device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoRegularAccessTokenClaims {
	/// Sign-in event identifier.
	pub event_id: String,
	/// Remembered-device key.
	pub device_key: String,
	/// User-pool access-token claims.
	#[serde(flatten)]
	pub base: CognitoAccessTokenClaims,
}
impl_claims!(
	CognitoRegularAccessTokenClaims,
	Some(TokenUse::Access),
	String,
	|c| &c.base.registered
);
impl AccessClaims for CognitoRegularAccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.base.client_id
	}

	fn scope(&self) -> Option<&str> {
		Some(&self.base.scope)
	}
}

/// Machine-to-machine (client credentials) access-token claims.
///
/// `sub` carries the client rather than a human user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitoClientAccessTokenClaims {
	/// Always `"access"`.
	pub token_use: AccessUse,
	/// Claims layout version.
	pub version: u8,
	/// Instant the client authenticated, epoch seconds.
	pub auth_time: f64,
	/// Space-delimited scopes.
	pub scope: String,
	/// App client the token was issued to.
	pub client_id: String,
	/// Registered base claims; user-pool access tokens always carry `jti`.
	#[serde(flatten)]
	pub registered: RegisteredClaims<String>,
}
impl_claims!(CognitoClientAccessTokenClaims, Some(TokenUse::Access), String, |c| &c.registered);
impl AccessClaims for CognitoClientAccessTokenClaims {
	fn client_id(&self) -> &str {
		&self.client_id
	}

	fn scope(&self) -> Option<&str> {
		Some(&self.scope)
	}
}
