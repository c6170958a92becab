//! Session invalidation events delivered to the hosting application.

// self
use crate::_prelude::*;

/// Why the client gave up on the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidationReason {
	/// A 401 arrived and no refresh token was stored.
	MissingRefreshToken,
	/// The refresh call failed or returned no access token.
	RefreshFailed,
}
impl InvalidationReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			InvalidationReason::MissingRefreshToken => "missing_refresh_token",
			InvalidationReason::RefreshFailed => "refresh_failed",
		}
	}
}
impl Display for InvalidationReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Emitted after both credentials have been removed from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInvalidated {
	/// Trigger for the invalidation.
	pub reason: InvalidationReason,
	/// Login entry point the host should navigate to.
	pub login_path: String,
}

/// Subscriber notified when the session is invalidated.
///
/// Listeners run inline on the task that observed the failure, before the error is returned
/// to the caller, so they should only schedule navigation rather than block.
pub trait SessionListener
where
	Self: Send + Sync,
{
	/// Handles an invalidation event.
	fn session_invalidated(&self, event: &SessionInvalidated);
}
impl<F> SessionListener for F
where
	F: Fn(&SessionInvalidated) + Send + Sync,
{
	fn session_invalidated(&self, event: &SessionInvalidated) {
		self(event)
	}
}

/// Shared listener registry; clones observe the same subscribers.
#[derive(Clone, Default)]
pub(crate) struct Listeners(Arc<RwLock<Vec<Arc<dyn SessionListener>>>>);
impl Listeners {
	pub(crate) fn push(&self, listener: Arc<dyn SessionListener>) {
		self.0.write().push(listener);
	}

	pub(crate) fn emit(&self, event: &SessionInvalidated) {
		let listeners = self.0.read().clone();

		for listener in listeners {
			listener.session_invalidated(event);
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.0.read().len()
	}
}
impl Debug for Listeners {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Listeners").field("count", &self.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn closures_receive_events() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let listeners = Listeners::default();
		let sink = seen.clone();

		listeners.push(Arc::new(move |event: &SessionInvalidated| {
			sink.lock().push(event.clone());
		}));

		let event = SessionInvalidated {
			reason: InvalidationReason::RefreshFailed,
			login_path: "/login".into(),
		};

		listeners.emit(&event);

		assert_eq!(listeners.len(), 1);
		assert_eq!(seen.lock().as_slice(), &[event]);
	}
}
