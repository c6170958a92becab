//! `/bookings` endpoints.

// self
use crate::{
	_prelude::*,
	api::BookingsApi,
	http::{ApiRequest, ApiTransport},
	model::{Booking, BookingDto, BookingNumber, CreateBookingDto},
};

impl<T> BookingsApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Books a trip for the signed-in customer.
	pub async fn create(&self, booking: &CreateBookingDto) -> Result<Booking> {
		self.client.post("/bookings", booking).await
	}

	/// Fetches a booking by identifier.
	pub async fn get(&self, id: i64) -> Result<Booking> {
		self.client.get(format!("/bookings/{id}")).await
	}

	/// Fetches a booking by its human-facing number.
	pub async fn by_number(&self, number: &BookingNumber) -> Result<Booking> {
		self.client.get(format!("/bookings/number/{number}")).await
	}

	/// Lists a customer's bookings.
	pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Booking>> {
		self.client.send_list(ApiRequest::get(format!("/bookings/customer/{customer_id}"))).await
	}

	/// Lists a driver's bookings.
	pub async fn by_driver(&self, driver_id: i64) -> Result<Vec<Booking>> {
		self.client.send_list(ApiRequest::get(format!("/bookings/driver/{driver_id}"))).await
	}

	/// Updates a booking.
	pub async fn update(&self, id: i64, booking: &BookingDto) -> Result<Booking> {
		self.client.put(format!("/bookings/{id}"), booking).await
	}

	/// Cancels a booking, returning the backend's confirmation.
	pub async fn cancel(&self, id: i64) -> Result<String> {
		self.client.send_text(ApiRequest::put(format!("/bookings/{id}/cancel"))).await
	}

	/// Accepts a booking as the signed-in driver, granting `discount_amount`.
	pub async fn accept(&self, id: i64, discount_amount: f64) -> Result<Booking> {
		let request = ApiRequest::put(format!("/bookings/{id}/accept"))
			.with_query("discountAmount", discount_amount);

		self.client.send_json(request).await
	}

	/// Deletes a booking.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.delete(format!("/bookings/{id}")).await
	}

	/// Lists every booking.
	pub async fn list(&self) -> Result<Vec<Booking>> {
		self.client.send_list(ApiRequest::get("/bookings")).await
	}

	/// Moves a booking to `new_status`.
	pub async fn change_status(&self, id: i64, new_status: &str) -> Result<Booking> {
		let request =
			ApiRequest::put(format!("/bookings/{id}/status")).with_query("newStatus", new_status);

		self.client.send_json(request).await
	}
}
