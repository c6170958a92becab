//! Vehicle DTOs for the `/vehicles` endpoints.
//!
//! Depending on the backend build, vehicle endpoints answer either with the bare DTO or with
//! a `{ "vehicle": ... }` / `{ "vehicles": [...] }` envelope, so both shapes are accepted.

// self
use crate::_prelude::*;

/// Vehicle registered by a driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
	/// Vehicle identifier.
	pub vehicle_id: i64,
	/// Registration plate.
	#[serde(default)]
	pub registration_number: String,
	/// Manufacturer.
	#[serde(default)]
	pub make: Option<String>,
	/// Model name.
	#[serde(default)]
	pub model: Option<String>,
	/// Model year.
	#[serde(default)]
	pub year: Option<i32>,
	/// Vehicle class (car, van, tuk).
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
	/// Availability status.
	#[serde(default)]
	pub status: Option<String>,
	/// Driver currently assigned.
	#[serde(default)]
	pub current_driver_id: Option<i64>,
	/// Server-side path of the uploaded picture.
	#[serde(default)]
	pub vehicle_picture_path: Option<String>,
}

/// Vehicle fields sent as multipart text parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
	/// Vehicle identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vehicle_id: Option<i64>,
	/// Registration plate.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub registration_number: Option<String>,
	/// Manufacturer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub make: Option<String>,
	/// Model name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	/// Model year.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub year: Option<i32>,
	/// Vehicle class.
	#[serde(skip_serializing_if = "Option::is_none", rename = "type")]
	pub kind: Option<String>,
	/// Availability status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Driver currently assigned.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_driver_id: Option<i64>,
	/// Existing picture path.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vehicle_picture_path: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum VehicleEnvelope {
	Wrapped { vehicle: Vehicle },
	Bare(Vehicle),
}
impl From<VehicleEnvelope> for Vehicle {
	fn from(value: VehicleEnvelope) -> Self {
		match value {
			VehicleEnvelope::Wrapped { vehicle } | VehicleEnvelope::Bare(vehicle) => vehicle,
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum VehicleListEnvelope {
	Wrapped {
		#[serde(default)]
		vehicles: Vec<Vehicle>,
	},
	Bare(Vec<Vehicle>),
}
impl From<VehicleListEnvelope> for Vec<Vehicle> {
	fn from(value: VehicleListEnvelope) -> Self {
		match value {
			VehicleListEnvelope::Wrapped { vehicles } | VehicleListEnvelope::Bare(vehicles) =>
				vehicles,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn envelopes_accept_both_shapes() {
		let bare: VehicleEnvelope =
			serde_json::from_str(r#"{"vehicleId":1,"registrationNumber":"CAB-1","type":"VAN"}"#)
				.expect("Bare vehicle should parse.");
		let wrapped: VehicleEnvelope = serde_json::from_str(
			r#"{"message":"ok","vehicle":{"vehicleId":1,"registrationNumber":"CAB-1","type":"VAN"}}"#,
		)
		.expect("Wrapped vehicle should parse.");

		assert_eq!(Vehicle::from(bare), Vehicle::from(wrapped));

		let list: VehicleListEnvelope =
			serde_json::from_str(r#"[{"vehicleId":2,"registrationNumber":"CAB-2"}]"#)
				.expect("Bare list should parse.");
		let list = Vec::<Vehicle>::from(list);

		assert_eq!(list.len(), 1);
		assert_eq!(list[0].kind, None);

		let wrapped: VehicleListEnvelope =
			serde_json::from_str(r#"{"vehicles":[]}"#).expect("Wrapped list should parse.");

		assert!(Vec::<Vehicle>::from(wrapped).is_empty());
	}
}
