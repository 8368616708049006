//! Optional observability helpers for the token factories.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to run each factory inside a span named
//!   `token_claims.factory` with the `token` (kind) and `stage` (call site) fields.
//!   The span's `outcome` field is filled in once the factory returns.
//! - Enable `metrics` to increment the `token_claims_factory_total` counter for every
//!   attempt/success/failure, labeled by `token` + `outcome`, and
//!   `token_claims_id_fallback_total` whenever an access-token id is derived from the encoded
//!   token.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Token view kinds produced by the factories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// Access-token view.
	Access,
	/// Identity-token view.
	Id,
}
impl TokenKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKind::Access => "access",
			TokenKind::Id => "id",
		}
	}
}
impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each construction attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactoryOutcome {
	/// Entry to a factory.
	Attempt,
	/// A view was constructed.
	Success,
	/// Construction failed and the error was returned to the caller.
	Failure,
}
impl FactoryOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FactoryOutcome::Attempt => "attempt",
			FactoryOutcome::Success => "success",
			FactoryOutcome::Failure => "failure",
		}
	}
}
impl Display for FactoryOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs a factory body inside its span and records attempt/outcome metrics around it.
pub(crate) fn observe<T>(
	kind: TokenKind,
	stage: &'static str,
	body: impl FnOnce() -> Result<T>,
) -> Result<T> {
	let guard = FactorySpan::new(kind, stage).entered();

	record_factory_outcome(kind, FactoryOutcome::Attempt);

	let result = body();
	let outcome = match &result {
		Ok(_) => FactoryOutcome::Success,
		Err(e) => {
			#[cfg(feature = "tracing")]
			::tracing::debug!(error = %e, "token construction failed");
			#[cfg(not(feature = "tracing"))]
			let _ = e;

			FactoryOutcome::Failure
		},
	};

	guard.record_outcome(outcome);
	record_factory_outcome(kind, outcome);

	result
}
