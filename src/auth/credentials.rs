//! Fixed store keys and helpers for reading and writing the credential pair.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	store::{SessionStore, StoreError},
};

/// Store key holding the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Store key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Store key holding the JSON-encoded [`SessionIdentity`](crate::auth::SessionIdentity).
pub const USER_KEY: &str = "user";
/// Keys removed when a session is invalidated.
pub const CREDENTIAL_KEYS: [&str; 2] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY];

/// Access + refresh token pair issued by login, register, or refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPair {
	/// Short-lived bearer token.
	pub access_token: TokenSecret,
	/// Longer-lived token exchanged for new access tokens.
	pub refresh_token: TokenSecret,
}
impl CredentialPair {
	/// Builds a pair from raw token strings.
	pub fn new(access_token: impl Into<TokenSecret>, refresh_token: impl Into<TokenSecret>) -> Self {
		Self { access_token: access_token.into(), refresh_token: refresh_token.into() }
	}

	/// Writes both tokens under their fixed keys.
	pub async fn persist(&self, store: &dyn SessionStore) -> Result<(), StoreError> {
		store.set(ACCESS_TOKEN_KEY, self.access_token.expose().to_owned()).await?;
		store.set(REFRESH_TOKEN_KEY, self.refresh_token.expose().to_owned()).await
	}

	/// Loads the pair when both tokens are present.
	pub async fn load(store: &dyn SessionStore) -> Result<Option<Self>, StoreError> {
		let access = access_token(store).await?;
		let refresh = refresh_token(store).await?;

		Ok(access.zip(refresh).map(|(access_token, refresh_token)| Self {
			access_token,
			refresh_token,
		}))
	}
}

/// Reads the stored access token.
pub async fn access_token(store: &dyn SessionStore) -> Result<Option<TokenSecret>, StoreError> {
	Ok(store.get(ACCESS_TOKEN_KEY).await?.map(TokenSecret::new))
}

/// Reads the stored refresh token.
pub async fn refresh_token(store: &dyn SessionStore) -> Result<Option<TokenSecret>, StoreError> {
	Ok(store.get(REFRESH_TOKEN_KEY).await?.map(TokenSecret::new))
}

/// Removes both tokens, leaving any stored identity untouched.
pub async fn clear_credentials(store: &dyn SessionStore) -> Result<(), StoreError> {
	store.clear(&CREDENTIAL_KEYS).await
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::MemoryStore;

	#[tokio::test]
	async fn pair_round_trips_through_fixed_keys() {
		let store = MemoryStore::default();
		let pair = CredentialPair::new("A1", "R1");

		pair.persist(&store).await.expect("Persisting the pair should succeed.");

		assert_eq!(store.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed."), Some("A1".into()));
		assert_eq!(
			store.get(REFRESH_TOKEN_KEY).await.expect("Read should succeed."),
			Some("R1".into())
		);
		assert_eq!(CredentialPair::load(&store).await.expect("Load should succeed."), Some(pair));

		clear_credentials(&store).await.expect("Clearing should succeed.");

		assert_eq!(CredentialPair::load(&store).await.expect("Load should succeed."), None);
		assert!(access_token(&store).await.expect("Read should succeed.").is_none());
	}

	#[tokio::test]
	async fn load_requires_both_tokens() {
		let store = MemoryStore::default();

		store.set(ACCESS_TOKEN_KEY, "A1".into()).await.expect("Write should succeed.");

		assert_eq!(CredentialPair::load(&store).await.expect("Load should succeed."), None);
	}
}
