// self
use crate::{
	auth::InvalidationReason,
	obs::{CallKind, CallOutcome},
};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"mega_client_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records a session invalidation via the global metrics recorder (when enabled).
pub fn record_session_invalidated(reason: InvalidationReason) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("mega_client_session_invalidated_total", "reason" => reason.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = reason;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_call_outcome(CallKind::Refresh, CallOutcome::Failure);
		record_session_invalidated(InvalidationReason::RefreshFailed);
	}
}
