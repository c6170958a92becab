//! Typed async client for the Mega Cab booking API: bearer credentials on every call,
//! one transparent refresh-and-retry on expiry, and pluggable session stores.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod store;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY},
		client::ApiClient,
		config::ClientConfig,
		http::ReqwestTransport,
		store::{MemoryStore, SessionStore},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = ApiClient<ReqwestTransport>;

	/// Constructs an [`ApiClient`] pointed at `base_url`, backed by an in-memory store.
	pub fn build_reqwest_test_client(base_url: &str) -> (ReqwestTestClient, Arc<MemoryStore>) {
		let config = ClientConfig::new(base_url).expect("Test base URL should be valid.");
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let transport =
			ReqwestTransport::from_config(&config).expect("Failed to build Reqwest transport.");
		let client = ApiClient::with_transport(config, store, transport);

		(client, store_backend)
	}

	/// Seeds the credential pair into a memory store.
	pub async fn seed_credentials(store: &MemoryStore, access: Option<&str>, refresh: Option<&str>) {
		if let Some(access) = access {
			store.set(ACCESS_TOKEN_KEY, access.into()).await.expect("Failed to seed access token.");
		}
		if let Some(refresh) = refresh {
			store
				.set(REFRESH_TOKEN_KEY, refresh.into())
				.await
				.expect("Failed to seed refresh token.");
		}
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
