//! Booking DTOs for the `/bookings` endpoints.

// self
use crate::_prelude::*;

/// Trip booking as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
	/// Booking identifier.
	pub booking_id: i64,
	/// Human-facing reference.
	#[serde(default)]
	pub booking_number: Option<String>,
	/// Customer who booked the trip.
	#[serde(default)]
	pub customer_id: Option<i64>,
	/// Vehicle assigned to the trip.
	#[serde(default)]
	pub vehicle_id: Option<i64>,
	/// Driver assigned to the trip, once accepted.
	#[serde(default)]
	pub driver_id: Option<i64>,
	/// Pickup address.
	#[serde(default)]
	pub pickup_address: String,
	/// Destination address.
	#[serde(default)]
	pub destination_address: String,
	/// Pickup time as sent by the backend (ISO local date-time).
	#[serde(default)]
	pub pickup_time: Option<String>,
	/// Drop-off time, once completed.
	#[serde(default)]
	pub dropoff_time: Option<String>,
	/// Lifecycle status such as `PENDING` or `ACCEPTED`.
	#[serde(default)]
	pub status: Option<String>,
	/// Trip distance in kilometres.
	#[serde(default)]
	pub distance: Option<f64>,
	/// Fare.
	#[serde(default)]
	pub amount: Option<f64>,
	/// Creation time.
	#[serde(default)]
	pub booking_date: Option<String>,
}

/// Booking creation payload and partial update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
	/// Booking identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub booking_id: Option<i64>,
	/// Human-facing reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub booking_number: Option<String>,
	/// Customer who booked the trip.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<i64>,
	/// Vehicle assigned to the trip.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vehicle_id: Option<i64>,
	/// Driver assigned to the trip.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub driver_id: Option<i64>,
	/// Pickup address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pickup_address: Option<String>,
	/// Destination address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub destination_address: Option<String>,
	/// Pickup time (ISO local date-time).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pickup_time: Option<String>,
	/// Drop-off time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dropoff_time: Option<String>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Trip distance in kilometres.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub distance: Option<f64>,
	/// Fare.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
}

/// Payload of `POST /bookings`. The customer is taken from the authenticated account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
	/// Pickup address.
	pub pickup_address: String,
	/// Destination address.
	pub destination_address: String,
	/// Trip distance in kilometres.
	pub distance: f64,
	/// Requested driver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub driver_id: Option<i64>,
	/// Pickup time (ISO local date-time).
	pub pickup_time: String,
	/// Requested vehicle.
	pub vehicle_id: i64,
}
