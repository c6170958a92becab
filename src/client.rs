//! Authenticated API client: bearer attachment plus a single refresh-and-retry cycle.
//!
//! Every request goes through [`ApiClient::request`]. The stored access token is attached as
//! `Authorization: Bearer <token>` on a per-attempt copy of the descriptor. A 401 on a
//! first attempt triggers exactly one exchange against `/auth/refresh-token`; on success the
//! new access token is stored and the request is resent once. Any failure to recover clears
//! both credentials and notifies every [`SessionListener`] before the error is returned.

mod metrics;
mod refresh;

pub use metrics::{RefreshMetrics, RefreshMetricsSnapshot};
pub use refresh::REFRESH_PATH;

pub(crate) use metrics::RefreshEvent;

// self
use crate::{
	_prelude::*,
	auth::{
		self, CredentialPair, SessionIdentity, SessionListener, TokenSecret, listener::Listeners,
	},
	config::ClientConfig,
	http::{ApiRequest, ApiResponse, ApiTransport},
	obs::{self, CallKind, CallOutcome, CallSpan},
	store::SessionStore,
};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestTransport};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// Backend client shared by every endpoint group.
///
/// Clones share the transport, store, metrics, and listener registry.
pub struct ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Transport used for every outbound request, including the refresh exchange.
	pub transport: Arc<T>,
	/// Store holding the credential pair and the signed-in identity.
	pub store: Arc<dyn SessionStore>,
	/// Base URL, login path, and transport settings.
	pub config: ClientConfig,
	/// Shared counters for refresh cycles.
	pub refresh_metrics: Arc<RefreshMetrics>,
	listeners: Listeners,
}
impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		config: ClientConfig,
		store: Arc<dyn SessionStore>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			config,
			refresh_metrics: Default::default(),
			listeners: Default::default(),
		}
	}

	/// Registers a listener notified whenever the session is invalidated.
	pub fn subscribe(&self, listener: impl 'static + SessionListener) {
		self.listeners.push(Arc::new(listener));
	}

	/// Returns the refresh-cycle counters.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	/// Sends `request` with the stored bearer credential, recovering once from a 401.
	///
	/// 2xx responses are returned as-is; any other final status becomes [`Error::Http`].
	pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Request;

		let span = CallSpan::new(KIND, "request");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.execute(request)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Sends a `GET` and decodes the JSON response.
	pub async fn get<R>(&self, path: impl Into<String>) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.send_json(ApiRequest::get(path)).await
	}

	/// Sends a `POST` with a JSON body and decodes the JSON response.
	pub async fn post<B, R>(&self, path: impl Into<String>, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.send_json(ApiRequest::post(path).with_json(body)?).await
	}

	/// Sends a `PUT` with a JSON body and decodes the JSON response.
	pub async fn put<B, R>(&self, path: impl Into<String>, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.send_json(ApiRequest::put(path).with_json(body)?).await
	}

	/// Sends a `DELETE`, ignoring any response body.
	pub async fn delete(&self, path: impl Into<String>) -> Result<()> {
		self.send_empty(ApiRequest::delete(path)).await
	}

	/// Sends `request` and decodes the JSON response.
	pub async fn send_json<R>(&self, request: ApiRequest) -> Result<R>
	where
		R: DeserializeOwned,
	{
		Ok(self.request(request).await?.json()?)
	}

	/// Sends `request` and decodes a JSON array.
	///
	/// `204 No Content` or an empty body yields an empty list.
	pub async fn send_list<R>(&self, request: ApiRequest) -> Result<Vec<R>>
	where
		R: DeserializeOwned,
	{
		self.send_list_as::<Vec<R>, R>(request).await
	}

	/// Like [`ApiClient::send_list`], decoding through the wire shape `E` first.
	pub(crate) async fn send_list_as<E, R>(&self, request: ApiRequest) -> Result<Vec<R>>
	where
		E: DeserializeOwned + Into<Vec<R>>,
	{
		let response = self.request(request).await?;

		if response.status() == 204 || response.body().iter().all(u8::is_ascii_whitespace) {
			return Ok(Vec::new());
		}

		Ok(response.json::<E>()?.into())
	}

	/// Sends `request` and returns the body as text, for endpoints answering with plain strings.
	pub async fn send_text(&self, request: ApiRequest) -> Result<String> {
		Ok(self.request(request).await?.text())
	}

	/// Sends `request`, ignoring any response body.
	pub async fn send_empty(&self, request: ApiRequest) -> Result<()> {
		self.request(request).await.map(|_| ())
	}

	/// Stores the credential pair, as done after login or registration.
	pub async fn store_credentials(&self, credentials: &CredentialPair) -> Result<()> {
		Ok(credentials.persist(self.store.as_ref()).await?)
	}

	/// Loads the stored credential pair, if both tokens are present.
	pub async fn credentials(&self) -> Result<Option<CredentialPair>> {
		Ok(CredentialPair::load(self.store.as_ref()).await?)
	}

	/// Loads the stored identity; a corrupt entry is discarded.
	pub async fn session_identity(&self) -> Result<Option<SessionIdentity>> {
		Ok(SessionIdentity::load(self.store.as_ref()).await?)
	}

	/// Ends the session locally: both credentials and the stored identity are removed.
	///
	/// No invalidation event is emitted since the user asked for it.
	pub async fn logout(&self) -> Result<()> {
		auth::clear_credentials(self.store.as_ref()).await?;

		Ok(SessionIdentity::forget(self.store.as_ref()).await?)
	}

	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
		let response = self.dispatch(&request).await?;

		if response.status() != 401 || request.is_retried() {
			return Ok(response.error_for_status()?);
		}

		let original = response.into_http_error();
		let retry = request.into_retry();
		let access = self.recover(original).await?;

		self.resend(retry, &access).await
	}

	async fn resend(&self, mut retry: ApiRequest, access: &TokenSecret) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Resend;

		let span = CallSpan::new(KIND, "resend");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		retry.set_bearer(access);

		let result = span
			.instrument(self.dispatch(&retry))
			.await
			.and_then(|response| response.error_for_status().map_err(Error::from));

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Attaches the stored access token (when any) to a copy of `request` and sends it.
	async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
		let mut outbound = request.clone();

		if let Some(token) = auth::access_token(self.store.as_ref()).await? {
			outbound.set_bearer(&token);
		}

		let url = self.resolve(&outbound)?;

		Ok(self.transport.send(url, &outbound).await?)
	}

	fn resolve(&self, request: &ApiRequest) -> Result<Url> {
		let mut url = self.config.endpoint(request.path())?;

		if !request.query().is_empty() {
			url.query_pairs_mut().extend_pairs(request.query());
		}

		Ok(url)
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client with a reqwest transport built from `config`.
	pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ConfigError> {
		let transport = ReqwestTransport::from_config(&config)?;

		Ok(Self::with_transport(config, store, transport))
	}

	/// Creates a client configured from the `MEGA_*` environment variables.
	pub fn from_env(store: Arc<dyn SessionStore>) -> Result<Self, ConfigError> {
		Self::new(ClientConfig::from_env()?, store)
	}
}
impl<T> Clone for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			store: self.store.clone(),
			config: self.config.clone(),
			refresh_metrics: self.refresh_metrics.clone(),
			listeners: self.listeners.clone(),
		}
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.config.base_url.as_str())
			.field("login_path", &self.config.login_path)
			.field("listeners", &self.listeners)
			.finish()
	}
}
