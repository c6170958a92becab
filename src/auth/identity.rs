//! Signed-in user identity persisted next to the credentials after login.

// self
use crate::{
	_prelude::*,
	auth::USER_KEY,
	store::{SessionStore, StoreError},
};

/// Backend role attached to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
	/// Back-office operator.
	Admin,
	/// Rider booking trips.
	Customer,
	/// Driver accepting trips.
	Driver,
}
impl UserRole {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			UserRole::Admin => "ADMIN",
			UserRole::Customer => "CUSTOMER",
			UserRole::Driver => "DRIVER",
		}
	}
}
impl Display for UserRole {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Account status managed by administrators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
	/// Account may sign in.
	#[default]
	Active,
	/// Account is locked out.
	Blocked,
}
impl UserStatus {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			UserStatus::Active => "active",
			UserStatus::Blocked => "blocked",
		}
	}
}
impl Display for UserStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Identity of the signed-in user, read by application code and never mutated by the
/// request interceptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
	/// User account identifier.
	pub id: i64,
	/// Login name.
	pub username: String,
	/// Account role.
	pub role: UserRole,
	/// Linked customer profile, for customer accounts.
	#[serde(default)]
	pub customer_id: Option<i64>,
	/// Linked driver profile, for driver accounts.
	#[serde(default)]
	pub driver_id: Option<i64>,
	/// Account status; older backends omit it.
	#[serde(default)]
	pub status: UserStatus,
}
impl SessionIdentity {
	/// Persists the identity as JSON under [`USER_KEY`].
	pub async fn persist(&self, store: &dyn SessionStore) -> Result<(), StoreError> {
		let encoded = serde_json::to_string(self).map_err(|e| StoreError::Serialization {
			message: format!("Failed to encode session identity: {e}"),
		})?;

		store.set(USER_KEY, encoded).await
	}

	/// Loads the stored identity. A value that no longer parses is removed and treated as
	/// absent.
	pub async fn load(store: &dyn SessionStore) -> Result<Option<Self>, StoreError> {
		let Some(raw) = store.get(USER_KEY).await? else {
			return Ok(None);
		};

		match serde_json::from_str(&raw) {
			Ok(identity) => Ok(Some(identity)),
			Err(_) => {
				store.remove(USER_KEY).await?;

				Ok(None)
			},
		}
	}

	/// Removes the stored identity.
	pub async fn forget(store: &dyn SessionStore) -> Result<(), StoreError> {
		store.remove(USER_KEY).await
	}
}
