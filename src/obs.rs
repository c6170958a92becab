//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mega_client.call` with the `call` (kind)
//!   and `stage` (call site) fields, plus a `warn` event whenever the session is invalidated.
//! - Enable `metrics` to increment the `mega_client_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`, and
//!   `mega_client_session_invalidated_total` labeled by `reason`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// First attempt of a caller request.
	Request,
	/// Bare refresh-token exchange.
	Refresh,
	/// Single resend after a successful refresh.
	Resend,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Request => "request",
			CallKind::Refresh => "refresh",
			CallKind::Resend => "resend",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
