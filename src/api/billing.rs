//! `/billing/bills` endpoints.

// self
use crate::{
	_prelude::*,
	api::BillingApi,
	http::{ApiRequest, ApiTransport},
	model::{Bill, BillDto},
};

const BILLS: &str = "/billing/bills";

impl<T> BillingApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Raises a bill.
	pub async fn create(&self, bill: &BillDto) -> Result<Bill> {
		self.client.post(BILLS, bill).await
	}

	/// Fetches a bill by identifier.
	pub async fn get(&self, id: i64) -> Result<Bill> {
		self.client.get(format!("{BILLS}/{id}")).await
	}

	/// Fetches the bill raised for a booking.
	pub async fn by_booking(&self, booking_id: i64) -> Result<Bill> {
		self.client.get(format!("{BILLS}/booking/{booking_id}")).await
	}

	/// Updates a bill.
	pub async fn update(&self, id: i64, bill: &BillDto) -> Result<Bill> {
		self.client.put(format!("{BILLS}/{id}"), bill).await
	}

	/// Deletes a bill.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.delete(format!("{BILLS}/{id}")).await
	}

	/// Lists every bill.
	pub async fn list(&self) -> Result<Vec<Bill>> {
		self.client.send_list(ApiRequest::get(BILLS)).await
	}

	/// Marks a bill as paid.
	pub async fn pay(&self, id: i64) -> Result<Bill> {
		self.client.send_json(ApiRequest::put(format!("{BILLS}/pay/{id}"))).await
	}
}
