//! Layered claim taxonomy: registered base claims, the id/access split, and provider-specific
//! extensions.
//!
//! Every shape is a flat serde record; layering happens through `#[serde(flatten)]` so the
//! decoded JSON stays a single flat object. Shapes only describe structure. The token
//! factories validate exactly the fields they need and never decode into these types on
//! their own; callers opt in through `claims_as` on the token views.

pub mod cognito;
pub mod common;
pub mod federated;

pub use cognito::*;
pub use common::*;
pub use federated::*;

// self
use crate::_prelude::*;

/// How a shape carries the `jti` claim: optional (`Option<String>`) or required (`String`).
pub trait JtiClaim
where
	Self: Clone + Debug + PartialEq + Serialize + DeserializeOwned,
{
	/// Returns the token identifier, if present.
	fn as_jti(&self) -> Option<&str>;

	/// Returns `true` when the shape holds no identifier.
	fn is_absent(&self) -> bool {
		self.as_jti().is_none()
	}
}
impl JtiClaim for Option<String> {
	fn as_jti(&self) -> Option<&str> {
		self.as_deref()
	}
}
impl JtiClaim for String {
	fn as_jti(&self) -> Option<&str> {
		Some(self)
	}
}

/// Capability shared by every claim shape: access to the registered base claims.
pub trait Claims
where
	Self: DeserializeOwned,
{
	/// `token_use` value the shape pins, if any.
	const TOKEN_USE: Option<TokenUse>;

	/// Whether this shape requires `jti`.
	type Jti: JtiClaim;

	/// Registered base claims (`iss`, `iat`, `exp`, `sub`, `jti`).
	fn registered(&self) -> &RegisteredClaims<Self::Jti>;

	/// Unique token identifier, when the token carries one.
	fn jti(&self) -> Option<&str> {
		self.registered().jti.as_jti()
	}
}

/// Claim shapes describing identity tokens.
pub trait IdClaims
where
	Self: Claims,
{
}

/// Claim shapes describing access tokens.
pub trait AccessClaims
where
	Self: Claims,
{
	/// OAuth client the token was issued to.
	fn client_id(&self) -> &str;

	/// Raw space-delimited scope claim, when the shape carries one.
	fn scope(&self) -> Option<&str> {
		None
	}
}

macro_rules! impl_claims {
	($name:ty, $token_use:expr, $jti:ty, |$this:ident| $registered:expr) => {
		impl $crate::claims::Claims for $name {
			type Jti = $jti;

			const TOKEN_USE: Option<$crate::claims::TokenUse> = $token_use;

			fn registered(&self) -> &$crate::claims::RegisteredClaims<$jti> {
				let $this = self;

				$registered
			}
		}
	};
}
pub(crate) use impl_claims;
