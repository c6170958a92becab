//! Customer profile DTOs for the `/customers` endpoints.

// self
use crate::_prelude::*;

/// Customer profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
	/// Profile identifier.
	pub customer_id: i64,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Postal address.
	#[serde(default)]
	pub address: Option<String>,
	/// National identity card number.
	#[serde(default)]
	pub nic: Option<String>,
	/// Contact number.
	#[serde(default)]
	pub phone_number: Option<String>,
	/// Owning account.
	#[serde(default)]
	pub user_id: Option<i64>,
	/// Server-side path of the uploaded profile picture.
	#[serde(default)]
	pub profile_picture_path: Option<String>,
}

/// Customer fields sent as multipart text parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
	/// Profile identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<i64>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Postal address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	/// National identity card number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nic: Option<String>,
	/// Contact number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone_number: Option<String>,
	/// Owning account.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<i64>,
	/// Existing picture path, kept when no new picture is uploaded.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_picture_path: Option<String>,
}
