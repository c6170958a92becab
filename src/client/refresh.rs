//! Access-token recovery after a 401 and session invalidation when it fails.

// self
use crate::{
	_prelude::*,
	auth::{self, ACCESS_TOKEN_KEY, InvalidationReason, SessionInvalidated, TokenSecret},
	client::{ApiClient, RefreshEvent},
	error::{HttpError, RefreshError},
	http::{ApiRequest, ApiTransport},
	model::{RefreshTokenRequest, RefreshTokenResponse},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Endpoint exchanging a refresh token for a new access token.
pub const REFRESH_PATH: &str = "/auth/refresh-token";

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Obtains and stores a new access token after `original` was answered with 401.
	///
	/// Without a stored refresh token the session is invalidated and `original` is returned.
	pub(crate) async fn recover(&self, original: HttpError) -> Result<TokenSecret> {
		const KIND: CallKind = CallKind::Refresh;

		let Some(refresh) = auth::refresh_token(self.store.as_ref()).await? else {
			self.invalidate(InvalidationReason::MissingRefreshToken).await;

			return Err(original.into());
		};
		let span = CallSpan::new(KIND, "recover");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		self.refresh_metrics.record(RefreshEvent::Exchanged);

		let access = match span.instrument(self.exchange(&refresh)).await {
			Ok(access) => access,
			Err(e) => {
				self.refresh_metrics.record(RefreshEvent::Failed);
				obs::record_call_outcome(KIND, CallOutcome::Failure);
				self.invalidate(InvalidationReason::RefreshFailed).await;

				return Err(e);
			},
		};

		// The refresh token is not rotated.
		if let Err(e) = self.store.set(ACCESS_TOKEN_KEY, access.expose().to_owned()).await {
			self.refresh_metrics.record(RefreshEvent::Failed);
			obs::record_call_outcome(KIND, CallOutcome::Failure);

			return Err(e.into());
		}

		self.refresh_metrics.record(RefreshEvent::Renewed);
		obs::record_call_outcome(KIND, CallOutcome::Success);

		Ok(access)
	}

	/// Bare call to the refresh endpoint: no bearer header and no 401 interception.
	async fn exchange(&self, refresh: &TokenSecret) -> Result<TokenSecret> {
		let url = self.config.endpoint(REFRESH_PATH)?;
		let request = ApiRequest::post(REFRESH_PATH)
			.with_json(&RefreshTokenRequest { refresh_token: refresh.expose() })?;
		let response = self
			.transport
			.send(url, &request)
			.await
			.map_err(RefreshError::Transport)?
			.error_for_status()
			.map_err(RefreshError::Rejected)?;
		let body = response.json::<RefreshTokenResponse>().map_err(RefreshError::Decode)?;

		Ok(body.usable_access_token().ok_or(RefreshError::MissingAccessToken)?)
	}

	/// Clears both credentials, then notifies the host.
	async fn invalidate(&self, reason: InvalidationReason) {
		if let Err(e) = auth::clear_credentials(self.store.as_ref()).await {
			obs::trace_clear_failed(&e);
		}

		obs::trace_session_invalidated(reason, &self.config.login_path);
		obs::record_session_invalidated(reason);
		self.refresh_metrics.record(RefreshEvent::Invalidated(reason));
		self.listeners
			.emit(&SessionInvalidated { reason, login_path: self.config.login_path.clone() });
	}
}
