// self
use crate::obs::{FactoryOutcome, TokenKind};

/// Records a factory outcome via the global metrics recorder (when enabled).
pub fn record_factory_outcome(kind: TokenKind, outcome: FactoryOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"token_claims_factory_total",
			"token" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts access tokens whose id was derived from the encoded token because `jti` was falsy.
pub fn record_id_fallback(kind: TokenKind) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("token_claims_id_fallback_total", "token" => kind.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = kind;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_are_noops_without_recorder() {
		record_factory_outcome(TokenKind::Access, FactoryOutcome::Failure);
		record_id_fallback(TokenKind::Access);
	}
}
