// crates.io
use serde_json::{Value, json};
use time::macros;
// self
use token_claims::{
	claims::{CognitoGoogleIdTokenClaims, CognitoRegularIdTokenClaims, IdTokenClaims},
	error::Error,
	token::create_id_token,
};

#[test]
fn minimal_id_token() {
	let claims = json!({ "iss": "https://issuer/x", "iat": 111111111, "exp": 111111111, "sub": "u1" });
	let id = create_id_token(claims.clone()).expect("Minimal id claims should build.");

	assert_eq!(id.ttl(), 0.);
	assert_eq!(&Value::Object(id.claims().clone()), &claims);

	let serialized = serde_json::to_value(&id).expect("Id token should serialize.");

	assert!(serialized.get("id").is_none());
	assert!(serialized.get("sub").is_none());
	assert!(serialized.get("scope").is_none());
}

#[test]
fn regular_user_pool_id_token() {
	let claims = json!({
		"sub": "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx",
		"aud": "xxxxxx",
		"cognito:groups": ["admins"],
		"event_id": "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx",
		"token_use": "id",
		"auth_time": 111111111,
		"iss": "https://cognito-idp.ap-southeast-1.amazonaws.com/ap-southeast-1_xxxxxxxxxxxxxx",
		"cognito:username": "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx",
		"exp": 111111111,
		"iat": 111111111,
		"email": "test@example.com",
	});
	let id = create_id_token(claims).expect("Regular user-pool id claims should build.");
	let typed: CognitoRegularIdTokenClaims =
		id.claims_as().expect("Claims should decode as a regular user-pool id token.");

	assert_eq!(id.expires_at(), macros::datetime!(1973-07-10 00:11:51 UTC));
	assert_eq!(
		serde_json::to_value(&id).expect("Id token should serialize.")["expiresAt"],
		json!("1973-07-10T00:11:51.000Z")
	);
	assert_eq!(typed.base.email, "test@example.com");
	assert_eq!(typed.event_id, "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx");
}

#[test]
fn google_federated_id_token() {
	let claims = json!({
		"at_hash": "HUILGYBUIKGYIKGYUKgyukGYUKgyukGYUK",
		"sub": "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx",
		"cognito:groups": ["ap-southeast-1_xxxxxxxxxxxxxx_Google"],
		"email_verified": false,
		"iss": "https://cognito-idp.ap-southeast-1.amazonaws.com/ap-southeast-1_xxxxxxxxxxxxxx",
		"cognito:username": "Google_99999999999999999999",
		"origin_jti": "xxxx-xxxxx-xxxxxx-xxxxxx-xxxxxxxxxxxx",
		"aud": "efefefefefefefefefefefefefefefe",
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
	});
	let id = create_id_token(claims).expect("Federated id claims should build.");
	let typed: CognitoGoogleIdTokenClaims =
		id.claims_as().expect("Claims should decode as a federated id token.");

	assert!(typed.base.username.starts_with("Google"));
	assert_eq!(typed.identities[0].provider_name, "Google");
	assert_eq!(id.ttl(), 10_000_000_000.);
	assert_eq!(id.expires_at(), macros::datetime!(2322-02-05 19:45:11 UTC));
}

#[test]
fn access_claims_do_not_decode_as_id_claims() {
	let id = create_id_token(json!({
		"token_use": "access",
		"iss": "i",
		"iat": 1,
		"exp": 2,
		"sub": "s",
	}))
	.expect("The factory itself only checks timestamps.");
	let err = id.claims_as::<IdTokenClaims>().expect_err("Pinned token_use must reject access.");

	assert!(matches!(err, Error::ClaimsShape { .. }));
	assert!(err.to_string().contains("token_use"));
}

#[test]
fn string_timestamps_are_rejected() {
	let err = create_id_token(json!({ "iat": "1", "exp": 2 }))
		.expect_err("A string iat must be rejected.");

	assert_eq!(err.as_validation().map(|e| e.message.as_str()), Some("iat is not a number"));
}
