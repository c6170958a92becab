//! In-process counters for the refresh-and-retry cycle, readable without the `metrics` feature.

// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::auth::InvalidationReason;

/// Step of the refresh cycle being counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RefreshEvent {
	/// A refresh exchange was sent.
	Exchanged,
	/// The new access token was stored.
	Renewed,
	/// The exchange or the store write failed.
	Failed,
	/// Both credentials were cleared and listeners notified.
	Invalidated(InvalidationReason),
}

/// Point-in-time copy of [`RefreshMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshMetricsSnapshot {
	/// Refresh exchanges sent.
	pub attempts: u64,
	/// Exchanges whose new access token was stored.
	pub successes: u64,
	/// Exchanges that failed.
	pub failures: u64,
	/// Invalidations caused by a 401 with no stored refresh token.
	pub missing_refresh_token: u64,
	/// Invalidations caused by a failed exchange.
	pub refresh_failed: u64,
}
impl RefreshMetricsSnapshot {
	/// Total session invalidations regardless of reason.
	pub fn invalidations(&self) -> u64 {
		self.missing_refresh_token + self.refresh_failed
	}
}

/// Counters shared by every handle cloned from one client.
///
/// A 401 without a stored refresh token counts as an invalidation, not an attempt.
#[derive(Debug, Default)]
pub struct RefreshMetrics {
	exchanged: AtomicU64,
	renewed: AtomicU64,
	failed: AtomicU64,
	missing_refresh_token: AtomicU64,
	refresh_failed: AtomicU64,
}
impl RefreshMetrics {
	/// Returns the number of refresh exchanges sent.
	pub fn attempts(&self) -> u64 {
		self.exchanged.load(Ordering::Relaxed)
	}

	/// Returns the number of exchanges whose new access token was stored.
	pub fn successes(&self) -> u64 {
		self.renewed.load(Ordering::Relaxed)
	}

	/// Returns the number of failed exchanges.
	pub fn failures(&self) -> u64 {
		self.failed.load(Ordering::Relaxed)
	}

	/// Returns how often the session was invalidated for `reason`.
	pub fn invalidations(&self, reason: InvalidationReason) -> u64 {
		self.invalidation_counter(reason).load(Ordering::Relaxed)
	}

	/// Copies every counter at once.
	pub fn snapshot(&self) -> RefreshMetricsSnapshot {
		RefreshMetricsSnapshot {
			attempts: self.attempts(),
			successes: self.successes(),
			failures: self.failures(),
			missing_refresh_token: self.invalidations(InvalidationReason::MissingRefreshToken),
			refresh_failed: self.invalidations(InvalidationReason::RefreshFailed),
		}
	}

	pub(crate) fn record(&self, event: RefreshEvent) {
		let counter = match event {
			RefreshEvent::Exchanged => &self.exchanged,
			RefreshEvent::Renewed => &self.renewed,
			RefreshEvent::Failed => &self.failed,
			RefreshEvent::Invalidated(reason) => self.invalidation_counter(reason),
		};

		counter.fetch_add(1, Ordering::Relaxed);
	}

	fn invalidation_counter(&self, reason: InvalidationReason) -> &AtomicU64 {
		match reason {
			InvalidationReason::MissingRefreshToken => &self.missing_refresh_token,
			InvalidationReason::RefreshFailed => &self.refresh_failed,
		}
	}
}
