//! Storage contracts and built-in store implementations for session state.
//!
//! The client treats the store as a flat key/value map. Credentials live under
//! [`ACCESS_TOKEN_KEY`](crate::auth::ACCESS_TOKEN_KEY) and
//! [`REFRESH_TOKEN_KEY`](crate::auth::REFRESH_TOKEN_KEY); the signed-in identity lives under
//! [`USER_KEY`](crate::auth::USER_KEY).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::_prelude::*;

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persisted key/value backend shared by the client, login, and logout paths.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Fetches the value stored under `key`, if present.
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>>;

	/// Stores or replaces the value under `key`.
	fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()>;

	/// Removes `key`; missing keys are not an error.
	fn remove<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()>;

	/// Removes every key in `keys`.
	fn clear<'a>(&'a self, keys: &'a [&'a str]) -> StoreFuture<'a, ()> {
		Box::pin(async move {
			for key in keys {
				self.remove(key).await?;
			}

			Ok(())
		})
	}
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
