//! Normalizes a decoded user-pool access token and id token, then prints the resulting views.

// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use token_claims::{
	claims::{AccessClaims, CognitoAccessTokenClaims},
	token::{AccessTokenInput, create_access_token, create_id_token},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let access_claims = json!({
		"sub": "6f1c2f6e-0000-4000-8000-000000000001",
		"iss": "https://cognito-idp.ap-southeast-1.amazonaws.com/ap-southeast-1_demo",
		"client_id": "demo-client",
		"origin_jti": "5e2d1a7c-0000-4000-8000-000000000002",
		"token_use": "access",
		"scope": "openid profile email",
		"auth_time": 1700000000,
		"iat": 1700000000,
		"exp": 1700003600,
		"jti": "0b7f3d9a-0000-4000-8000-000000000003",
		"username": "demo-user",
		"cognito:groups": ["readers"],
	});
	let auth = create_access_token(
		AccessTokenInput::new("eyJraWQiOiJkZW1vIn0.e30.c2ln", access_claims)
			.with_ips(["192.2.0.1", "198.51.100.7"]),
	)?;
	let typed: CognitoAccessTokenClaims = auth.claims_as()?;

	println!("Access token {} for client {}.", auth.id(), typed.client_id());
	println!("Scopes: {:?}, ttl {}s, expires {}.", auth.scope(), auth.ttl(), auth.expires_at());
	println!("{}", serde_json::to_string_pretty(&auth)?);

	let id = create_id_token(json!({
		"sub": "6f1c2f6e-0000-4000-8000-000000000001",
		"iss": "https://cognito-idp.ap-southeast-1.amazonaws.com/ap-southeast-1_demo",
		"token_use": "id",
		"iat": 1700000000,
		"exp": 1700003600,
	}))?;

	println!("Id token issued {} valid now: {}.", id.issued_at(), id.is_valid());

	Ok(())
}
