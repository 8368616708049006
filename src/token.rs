//! Token factories and the immutable views they produce.

pub mod access;
pub mod fingerprint;
pub mod id;
pub mod secret;
pub mod window;

pub use access::*;
pub use fingerprint::*;
pub use id::*;
pub use secret::*;
pub use window::*;

// self
use crate::{_prelude::*, claims::Claims};

fn decode_claims<T>(claims: &Map<String, Value>) -> Result<T>
where
	T: Claims,
{
	Ok(serde_path_to_error::deserialize(Value::Object(claims.clone()))?)
}
