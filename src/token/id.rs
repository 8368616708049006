//! Identity-token view and its factory.

// self
use crate::{
	_prelude::*,
	assert,
	claims::IdClaims,
	obs::{self, TokenKind},
	token::{self, ValidityWindow},
};

/// Immutable identity-token view.
///
/// Carries no identifier, subject, or scope; those belong to access tokens.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdToken {
	claims: Arc<Map<String, Value>>,
	#[serde(flatten)]
	window: ValidityWindow,
}
impl IdToken {
	/// Claims exactly as handed to the factory.
	pub fn claims(&self) -> &Map<String, Value> {
		&self.claims
	}

	/// Decodes the claims into a typed id-claim shape.
	pub fn claims_as<T>(&self) -> Result<T>
	where
		T: IdClaims,
	{
		token::decode_claims(&self.claims)
	}

	/// Issued-at instant.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.window.issued_at()
	}

	/// Expiry instant.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.window.expires_at()
	}

	/// `exp - iat` in seconds.
	pub fn ttl(&self) -> f64 {
		self.window.ttl()
	}

	/// See [`ValidityWindow::is_valid_at`].
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		self.window.is_valid_at(instant)
	}

	/// See [`ValidityWindow::is_valid`].
	pub fn is_valid(&self) -> bool {
		self.window.is_valid()
	}
}

/// Validates identity-token claims (`iat`, then `exp`) and builds an [`IdToken`].
pub fn create_id_token(claims: Value) -> Result<IdToken> {
	obs::observe(TokenKind::Id, "create_id_token", || {
		let claims = assert::expect_plain_object(claims, "claims is not a plain object")?;
		let window = ValidityWindow::from_claims(&claims)?;

		Ok(IdToken { claims: Arc::new(claims), window })
	})
}
