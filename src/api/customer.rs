//! `/customers` endpoints.

// self
use crate::{
	_prelude::*,
	api::{self, CustomersApi},
	http::{ApiRequest, ApiTransport, FileUpload},
	model::{Customer, CustomerDto, Nic},
};

const PICTURE_FIELD: &str = "profilePicture";

impl<T> CustomersApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a customer profile, optionally uploading a profile picture.
	pub async fn create(
		&self,
		customer: &CustomerDto,
		picture: Option<FileUpload>,
	) -> Result<Customer> {
		let form = api::profile_form(customer, PICTURE_FIELD, picture)?;

		self.client.send_json(ApiRequest::post("/customers").with_multipart(form)).await
	}

	/// Fetches a customer by identifier.
	pub async fn get(&self, id: i64) -> Result<Customer> {
		self.client.get(format!("/customers/{id}")).await
	}

	/// Fetches a customer by NIC.
	pub async fn by_nic(&self, nic: &Nic) -> Result<Customer> {
		self.client.get(format!("/customers/nic/{nic}")).await
	}

	/// Updates a customer profile, optionally replacing the profile picture.
	pub async fn update(
		&self,
		id: i64,
		customer: &CustomerDto,
		picture: Option<FileUpload>,
	) -> Result<Customer> {
		let form = api::profile_form(customer, PICTURE_FIELD, picture)?;

		self.client.send_json(ApiRequest::put(format!("/customers/{id}")).with_multipart(form)).await
	}

	/// Deletes a customer profile.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.delete(format!("/customers/{id}")).await
	}

	/// Lists every customer.
	pub async fn list(&self) -> Result<Vec<Customer>> {
		self.client.send_list(ApiRequest::get("/customers")).await
	}
}
