//! Runtime type-narrowing primitives for decoded claim payloads.
//!
//! Each primitive inspects a [`Value`] and either returns the narrowed view or a
//! [`ValidationError`] carrying the caller's message, the offending value, and the expected
//! type tag. There is no aggregation: callers propagate the first failure with `?`.

// self
use crate::_prelude::*;

static ABSENT: Value = Value::Null;

/// Type tags reported by [`ValidationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedType {
	/// A JSON string.
	String,
	/// A JSON number.
	Number,
	/// A JSON object (never an array or `null`).
	Object,
}
impl ExpectedType {
	/// Returns the stable tag used in diagnostics.
	pub const fn as_str(self) -> &'static str {
		match self {
			ExpectedType::String => "string",
			ExpectedType::Number => "number",
			ExpectedType::Object => "object",
		}
	}
}
impl Display for ExpectedType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structured failure raised when a claim does not have its expected runtime type.
#[derive(Clone, Debug, PartialEq, Serialize, ThisError)]
#[error("{message} (expected {expected}, got {actual}).")]
pub struct ValidationError {
	/// Human-readable diagnostic supplied by the caller.
	pub message: String,
	/// The offending value; `null` when the claim was absent.
	pub actual: Value,
	/// The type tag the value should have had.
	pub expected: ExpectedType,
}
impl ValidationError {
	/// Creates a new validation error.
	pub fn new(message: impl Into<String>, actual: Value, expected: ExpectedType) -> Self {
		Self { message: message.into(), actual, expected }
	}
}

/// Looks up `key` in a claim map, yielding `null` for absent keys.
pub fn claim<'a>(claims: &'a Map<String, Value>, key: &str) -> &'a Value {
	claims.get(key).unwrap_or(&ABSENT)
}

/// Narrows `value` to a string slice.
pub fn assert_string<'a>(value: &'a Value, message: &str) -> Result<&'a str, ValidationError> {
	match value {
		Value::String(s) => Ok(s),
		other => Err(ValidationError::new(message, other.clone(), ExpectedType::String)),
	}
}

/// Narrows `value` to a number.
///
/// Integers and floats are both accepted. JSON cannot carry `NaN` or infinities, so every
/// accepted value is finite.
pub fn assert_number(value: &Value, message: &str) -> Result<f64, ValidationError> {
	value
		.as_f64()
		.ok_or_else(|| ValidationError::new(message, value.clone(), ExpectedType::Number))
}

/// Narrows `value` to a plain JSON object, rejecting arrays, `null`, and primitives.
pub fn assert_plain_object<'a>(
	value: &'a Value,
	message: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
	match value {
		Value::Object(map) => Ok(map),
		other => Err(ValidationError::new(message, other.clone(), ExpectedType::Object)),
	}
}

/// Owning variant of [`assert_plain_object`] that hands back the map without copying it.
pub fn expect_plain_object(
	value: Value,
	message: &str,
) -> Result<Map<String, Value>, ValidationError> {
	match value {
		Value::Object(map) => Ok(map),
		other => Err(ValidationError::new(message, other, ExpectedType::Object)),
	}
}
