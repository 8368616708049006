//! Access-token view and its factory.

// self
use crate::{
	_prelude::*,
	assert::{self, claim},
	claims::AccessClaims,
	obs::{self, TokenKind},
	token::{self, EncodedToken, ValidityWindow},
};

/// Inputs for [`create_access_token`].
#[derive(Clone, Debug)]
pub struct AccessTokenInput {
	/// Encoded token the claims were decoded from.
	pub jwt: EncodedToken,
	/// Source addresses of the request that presented the token, in transport order.
	pub ips: Vec<String>,
	/// Decoded, unverified claims body.
	pub claims: Value,
	/// Caller-resolved user identifier, if any.
	pub user_id: Option<String>,
}
impl AccessTokenInput {
	/// Creates an input with no source addresses.
	pub fn new(jwt: impl Into<String>, claims: Value) -> Self {
		Self { jwt: EncodedToken::new(jwt), ips: Vec::new(), claims, user_id: None }
	}

	/// Sets the source addresses, used verbatim.
	pub fn with_ips<I, S>(mut self, ips: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.ips = ips.into_iter().map(Into::into).collect();

		self
	}

	/// Attaches a caller-resolved user identifier.
	pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
		self.user_id = Some(user_id.into());

		self
	}
}

/// Immutable access-token view.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
	id: String,
	ips: Vec<String>,
	jwt: EncodedToken,
	#[serde(skip_serializing_if = "Option::is_none")]
	user_id: Option<String>,
	sub: String,
	client_id: String,
	scope: Vec<String>,
	claims: Arc<Map<String, Value>>,
	#[serde(flatten)]
	window: ValidityWindow,
}
impl AuthToken {
	/// `jti` when issued, otherwise the [`EncodedToken::fingerprint`] of the encoded token.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Source addresses supplied with the request.
	pub fn ips(&self) -> &[String] {
		&self.ips
	}

	/// Encoded token the view was built from.
	pub fn jwt(&self) -> &EncodedToken {
		&self.jwt
	}

	/// Caller-resolved user identifier.
	pub fn user_id(&self) -> Option<&str> {
		self.user_id.as_deref()
	}

	/// Subject identifier.
	pub fn sub(&self) -> &str {
		&self.sub
	}

	/// OAuth client the token was issued to.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Scope tokens in claim order, split on single spaces.
	pub fn scope(&self) -> &[String] {
		&self.scope
	}

	/// Returns `true` if `scope` appears among the scope tokens.
	pub fn has_scope(&self, scope: &str) -> bool {
		self.scope.iter().any(|s| s == scope)
	}

	/// Claims exactly as handed to the factory.
	pub fn claims(&self) -> &Map<String, Value> {
		&self.claims
	}

	/// Decodes the claims into a typed access-claim shape.
	pub fn claims_as<T>(&self) -> Result<T>
	where
		T: AccessClaims,
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

/// Validates access-token claims and builds an [`AuthToken`].
///
/// Fields are checked in a fixed order (`sub`, `client_id`, `iss`, `scope`, `iat`, `exp`) and
/// the first failure is returned.
pub fn create_access_token(input: AccessTokenInput) -> Result<AuthToken> {
	obs::observe(TokenKind::Access, "create_access_token", || build(input))
}

fn build(input: AccessTokenInput) -> Result<AuthToken> {
	let AccessTokenInput { jwt, ips, claims, user_id } = input;
	let claims = assert::expect_plain_object(claims, "claims is not a plain object")?;
	let sub = assert::assert_string(claim(&claims, "sub"), "sub is not a string")?.to_owned();
	let client_id =
		assert::assert_string(claim(&claims, "client_id"), "client_id is not a string")?.to_owned();

	assert::assert_string(claim(&claims, "iss"), "iss is not a string")?;

	let scope: Vec<String> = assert::assert_string(claim(&claims, "scope"), "scope is not a string")?
		.split(' ')
		.map(str::to_owned)
		.collect();
	let window = ValidityWindow::from_claims(&claims)?;
	let id = match claim(&claims, "jti") {
		jti if is_truthy(jti) => stringify(jti),
		_ => {
			let id = jwt.fingerprint();

			#[cfg(feature = "tracing")]
			tracing::debug!(id = %id, "no jti claim; derived token id from the encoded token");

			obs::record_id_fallback(TokenKind::Access);

			id
		},
	};

	Ok(AuthToken { id, ips, jwt, user_id, sub, client_id, scope, claims: Arc::new(claims), window })
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn stringify(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
