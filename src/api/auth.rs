//! `/auth` endpoints.

// self
use crate::{
	_prelude::*,
	api::AuthApi,
	auth::{SessionIdentity, UserStatus},
	client::REFRESH_PATH,
	http::{ApiRequest, ApiTransport},
	model::{
		LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterResponse,
		UpdatePasswordRequest, User, UserDto,
	},
};

impl<T> AuthApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates an account and stores the issued credential pair.
	pub async fn register(&self, user: &UserDto) -> Result<RegisterResponse> {
		let response: RegisterResponse = self.client.post("/auth/register", user).await?;

		self.client.store_credentials(&response.credentials()).await?;

		Ok(response)
	}

	/// Signs in and stores the credential pair and identity.
	pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
		let request = ApiRequest::post("/auth/login")
			.with_query("username", username)
			.with_query("password", password);
		let response: LoginResponse = self.client.send_json(request).await?;

		self.client.store_credentials(&response.credentials()).await?;
		response.identity().persist(self.client.store.as_ref()).await?;

		Ok(response)
	}

	/// Exchanges `refresh_token` explicitly. The result is not stored.
	pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshTokenResponse> {
		self.client.post(REFRESH_PATH, &RefreshTokenRequest { refresh_token }).await
	}

	/// Fetches one account.
	pub async fn user(&self, id: i64) -> Result<User> {
		self.client.get(format!("/auth/user/{id}")).await
	}

	/// Changes the signed-in user's password, returning the backend's confirmation.
	pub async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<String> {
		self.client.send_text(ApiRequest::put("/auth/update-password").with_json(request)?).await
	}

	/// Lists every account.
	pub async fn users(&self) -> Result<Vec<User>> {
		self.client.send_list(ApiRequest::get("/auth/users")).await
	}

	/// Activates or blocks an account, returning the backend's confirmation.
	pub async fn update_user_status(&self, id: i64, status: UserStatus) -> Result<String> {
		let request = ApiRequest::put(format!("/auth/user/{id}/status")).with_query("status", status);

		self.client.send_text(request).await
	}

	/// Clears the local session.
	pub async fn logout(&self) -> Result<()> {
		self.client.logout().await
	}

	/// Returns the identity stored by the last login.
	pub async fn current_user(&self) -> Result<Option<SessionIdentity>> {
		self.client.session_identity().await
	}
}
