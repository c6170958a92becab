//! Thread-safe in-memory [`SessionStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	store::{SessionStore, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<String, String>>>;

/// Thread-safe storage backend that keeps entries in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Returns a point-in-time copy of every entry.
	pub fn snapshot(&self) -> BTreeMap<String, String> {
		self.0.read().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}

	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl SessionStore for MemoryStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.read().get(key).cloned()) })
	}

	fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().insert(key.to_owned(), value);

			Ok(())
		})
	}

	fn remove<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().remove(key);

			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn clones_share_entries() {
		let store = MemoryStore::default();
		let other = store.clone();

		store.set("accessToken", "A1".into()).await.expect("Write should succeed.");

		assert_eq!(other.get("accessToken").await.expect("Read should succeed."), Some("A1".into()));
		assert_eq!(other.len(), 1);

		other.remove("accessToken").await.expect("Remove should succeed.");

		assert!(store.is_empty());
	}
}
