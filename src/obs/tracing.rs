// self
use crate::{
	_prelude::*,
	obs::{FactoryOutcome, TokenKind},
};

/// Span wrapper used by the token factories.
#[derive(Clone, Debug)]
pub struct FactorySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FactorySpan {
	/// Creates a span tagged with the token kind and stage; `outcome` stays empty until
	/// [`FactorySpanGuard::record_outcome`].
	pub fn new(kind: TokenKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"token_claims.factory",
				token = kind.as_str(),
				stage,
				outcome = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the synchronous factory body.
	pub fn entered(self) -> FactorySpanGuard {
		#[cfg(feature = "tracing")]
		{
			FactorySpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			FactorySpanGuard {}
		}
	}
}

/// RAII guard returned by [`FactorySpan::entered`].
pub struct FactorySpanGuard {
	#[cfg(feature = "tracing")]
	guard: tracing::span::EnteredSpan,
}
impl FactorySpanGuard {
	/// Stamps the final outcome onto the entered span.
	pub fn record_outcome(&self, outcome: FactoryOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.guard.record("outcome", outcome.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = outcome;
		}
	}
}
impl Debug for FactorySpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FactorySpanGuard(..)")
	}
}
