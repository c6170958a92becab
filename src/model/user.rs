//! Account DTOs for the `/auth` endpoints.

// self
use crate::{
	_prelude::*,
	auth::{CredentialPair, SessionIdentity, TokenSecret, UserRole, UserStatus},
};

/// User account as listed by administrators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// Account identifier.
	pub id: i64,
	/// Login name.
	pub username: String,
	/// Account role.
	pub role: UserRole,
	/// Linked customer profile.
	#[serde(default)]
	pub customer_id: Option<i64>,
	/// Linked driver profile.
	#[serde(default)]
	pub driver_id: Option<i64>,
	/// Account status.
	#[serde(default)]
	pub status: UserStatus,
}

/// Registration payload and partial account update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
	/// Account identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Login name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// Plain-text password, only sent on registration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// Account role.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<UserRole>,
	/// Linked customer profile.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<i64>,
	/// Linked driver profile.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub driver_id: Option<i64>,
	/// Account status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<UserStatus>,
}

/// Body returned by registration. The backend fills the identity fields with
/// nulls on this path, so only the token pair is read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
	/// Bearer access token.
	pub access_token: TokenSecret,
	/// Refresh token.
	pub refresh_token: TokenSecret,
}
impl RegisterResponse {
	/// Splits out the credential pair.
	pub fn credentials(&self) -> CredentialPair {
		CredentialPair {
			access_token: self.access_token.clone(),
			refresh_token: self.refresh_token.clone(),
		}
	}
}

/// Body returned by login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// Bearer access token.
	pub access_token: TokenSecret,
	/// Refresh token.
	pub refresh_token: TokenSecret,
	/// Account identifier.
	pub id: i64,
	/// Login name.
	pub username: String,
	/// Account role.
	pub role: UserRole,
	/// Linked customer profile.
	#[serde(default)]
	pub customer_id: Option<i64>,
	/// Linked driver profile.
	#[serde(default)]
	pub driver_id: Option<i64>,
	/// Account status.
	#[serde(default)]
	pub status: UserStatus,
}
impl LoginResponse {
	/// Splits out the credential pair.
	pub fn credentials(&self) -> CredentialPair {
		CredentialPair {
			access_token: self.access_token.clone(),
			refresh_token: self.refresh_token.clone(),
		}
	}

	/// Splits out the identity persisted next to the credentials.
	pub fn identity(&self) -> SessionIdentity {
		SessionIdentity {
			id: self.id,
			username: self.username.clone(),
			role: self.role,
			customer_id: self.customer_id,
			driver_id: self.driver_id,
			status: self.status,
		}
	}
}

/// Body sent to `/auth/refresh-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest<'a> {
	/// Refresh token being exchanged.
	pub refresh_token: &'a str,
}

/// Body returned by `/auth/refresh-token`. The access token may be missing on a
/// misbehaving backend; callers decide what that means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
	/// Newly issued access token.
	#[serde(default)]
	pub access_token: Option<String>,
}
impl RefreshTokenResponse {
	/// Returns the access token when it is present and non-empty.
	pub fn usable_access_token(self) -> Option<TokenSecret> {
		self.access_token.filter(|token| !token.trim().is_empty()).map(TokenSecret::new)
	}
}

/// Body sent to `/auth/update-password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
	/// Current password.
	pub old_password: String,
	/// Replacement password.
	pub new_password: String,
}
