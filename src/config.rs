//! Client configuration: backend base URL, login entry point, and transport knobs.

// std
use std::{env, time::Duration as StdDuration};
// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "MEGA_API_BASE_URL";
/// Environment variable holding the login entry point path.
pub const LOGIN_PATH_ENV: &str = "MEGA_LOGIN_PATH";
/// Environment variable holding the transport timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "MEGA_API_TIMEOUT_SECS";
/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Login entry point reported in session invalidation events.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Settings shared by the client and its transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Backend base URL; request paths are appended to it.
	pub base_url: Url,
	/// Path the host navigates to once the session is invalidated.
	pub login_path: String,
	/// User agent sent by the default transport.
	pub user_agent: String,
	/// Whole-request timeout applied by the default transport, if any.
	pub timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Builds a configuration for `base_url` with defaults for everything else.
	pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
		Ok(Self {
			base_url: parse_base_url(base_url.as_ref())?,
			login_path: DEFAULT_LOGIN_PATH.into(),
			user_agent: concat!("mega-client/", env!("CARGO_PKG_VERSION")).into(),
			timeout: None,
		})
	}

	/// Loads the configuration from `MEGA_API_BASE_URL`, `MEGA_LOGIN_PATH`, and
	/// `MEGA_API_TIMEOUT_SECS`, falling back to the defaults.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Same as [`ClientConfig::from_env`] but reads variables through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		let base_url = non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.into());
		let mut config = Self::new(base_url.trim())?;

		if let Some(path) = non_empty(LOGIN_PATH_ENV) {
			config = config.with_login_path(path.trim());
		}
		if let Some(raw) = non_empty(TIMEOUT_ENV) {
			let secs = raw
				.trim()
				.parse::<u64>()
				.map_err(|_| ConfigError::InvalidEnv { name: TIMEOUT_ENV })?;

			config = config.with_timeout(StdDuration::from_secs(secs));
		}

		Ok(config)
	}

	/// Overrides the login entry point.
	pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
		self.login_path = path.into();

		self
	}

	/// Overrides the user agent.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Sets a whole-request timeout for the default transport.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Resolves `path` against the base URL, keeping any base path prefix.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let base = self.base_url.as_str().trim_end_matches('/');
		let joined = if path.is_empty() || path.starts_with('/') {
			format!("{base}{path}")
		} else {
			format!("{base}/{path}")
		};

		Url::parse(&joined).map_err(|source| ConfigError::InvalidPath { path: path.into(), source })
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url =
		Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl { value: raw.into(), source })?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(ConfigError::UnsupportedScheme { scheme: other.into() }),
	}
}
