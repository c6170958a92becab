//! Simple file-backed [`SessionStore`] for CLIs and desktop hosts that keep a session
//! across restarts.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	store::{SessionStore, StoreError, StoreFuture},
};

/// Persists entries to a JSON object file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<BTreeMap<String, String>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	/// Location of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
		if !path.exists() {
			return Ok(BTreeMap::new());
		}

		let metadata = path.metadata().map_err(|e| StoreError::Backend {
			message: format!("Failed to inspect {}: {e}", path.display()),
		})?;

		if metadata.len() == 0 {
			return Ok(BTreeMap::new());
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
			message: format!("Failed to parse {}: {e}", path.display()),
		})
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn persist_locked(&self, contents: &BTreeMap<String, String>) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let serialized =
			serde_json::to_vec_pretty(contents).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize store snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl SessionStore for FileStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
		Box::pin(async move { Ok(self.inner.read().get(key).cloned()) })
	}

	fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			guard.insert(key.to_owned(), value);
			self.persist_locked(&guard)
		})
	}

	fn remove<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			if guard.remove(key).is_some() {
				self.persist_locked(&guard)?;
			}

			Ok(())
		})
	}
}
