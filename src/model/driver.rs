//! Driver profile DTOs for the `/drivers` endpoints.

// self
use crate::_prelude::*;

/// Driver profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
	/// Profile identifier.
	pub driver_id: i64,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Driving license number.
	#[serde(default)]
	pub license_number: Option<String>,
	/// Contact number.
	#[serde(default)]
	pub phone_number: Option<String>,
	/// Availability status.
	#[serde(default)]
	pub status: Option<String>,
	/// Owning account.
	#[serde(default)]
	pub user_id: Option<i64>,
	/// Server-side path of the uploaded profile picture.
	#[serde(default)]
	pub profile_picture_path: Option<String>,
}

/// Driver fields sent as multipart text parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
	/// Profile identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub driver_id: Option<i64>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Driving license number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub license_number: Option<String>,
	/// Contact number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone_number: Option<String>,
	/// Availability status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Owning account.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<i64>,
	/// Existing picture path.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_picture_path: Option<String>,
}
