// self
use crate::{_prelude::*, auth::InvalidationReason, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("mega_client.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning for a session invalidation (when tracing is enabled).
pub fn trace_session_invalidated(reason: InvalidationReason, login_path: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(reason = reason.as_str(), login_path, "session invalidated");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (reason, login_path);
	}
}

/// Emits a warning when stored credentials could not be cleared (when tracing is enabled).
pub fn trace_clear_failed(error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(error = %error, "failed to clear stored credentials");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}
