//! Billing DTOs for the `/billing/bills` endpoints.

// self
use crate::_prelude::*;

/// Invoice raised for a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
	/// Bill identifier.
	pub bill_id: i64,
	/// Booking being billed.
	#[serde(default)]
	pub booking_id: Option<i64>,
	/// Gross amount.
	#[serde(default)]
	pub total_amount: Option<f64>,
	/// Tax component.
	#[serde(default)]
	pub tax_amount: Option<f64>,
	/// Discount granted on acceptance.
	#[serde(default)]
	pub discount_amount: Option<f64>,
	/// `PENDING` or `PAID`.
	#[serde(default)]
	pub payment_status: Option<String>,
	/// Payment channel.
	#[serde(default)]
	pub payment_method: Option<String>,
	/// Issue time (ISO local date-time).
	#[serde(default)]
	pub bill_date: Option<String>,
}
impl Bill {
	/// Returns `true` once the bill has been settled.
	pub fn is_paid(&self) -> bool {
		self.payment_status.as_deref().is_some_and(|status| status.eq_ignore_ascii_case("PAID"))
	}
}

/// Bill creation payload and partial update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
	/// Bill identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bill_id: Option<i64>,
	/// Booking being billed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub booking_id: Option<i64>,
	/// Gross amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_amount: Option<f64>,
	/// Tax component.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tax_amount: Option<f64>,
	/// Discount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discount_amount: Option<f64>,
	/// Payment status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payment_status: Option<String>,
	/// Payment channel.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payment_method: Option<String>,
	/// Issue time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bill_date: Option<String>,
}
