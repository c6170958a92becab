//! `/drivers` endpoints.

// self
use crate::{
	_prelude::*,
	api::{self, DriversApi},
	http::{ApiRequest, ApiTransport, FileUpload},
	model::{Driver, DriverDto, LicenseNumber, StatusLabel},
};

const PICTURE_FIELD: &str = "profilePicture";

impl<T> DriversApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a driver profile, optionally uploading a profile picture.
	pub async fn create(&self, driver: &DriverDto, picture: Option<FileUpload>) -> Result<Driver> {
		let form = api::profile_form(driver, PICTURE_FIELD, picture)?;

		self.client.send_json(ApiRequest::post("/drivers").with_multipart(form)).await
	}

	/// Fetches a driver by identifier.
	pub async fn get(&self, id: i64) -> Result<Driver> {
		self.client.get(format!("/drivers/{id}")).await
	}

	/// Fetches a driver by license number.
	pub async fn by_license(&self, license: &LicenseNumber) -> Result<Driver> {
		self.client.get(format!("/drivers/license/{license}")).await
	}

	/// Updates a driver profile, optionally replacing the profile picture.
	pub async fn update(
		&self,
		id: i64,
		driver: &DriverDto,
		picture: Option<FileUpload>,
	) -> Result<Driver> {
		let form = api::profile_form(driver, PICTURE_FIELD, picture)?;

		self.client.send_json(ApiRequest::put(format!("/drivers/{id}")).with_multipart(form)).await
	}

	/// Deletes a driver profile.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.delete(format!("/drivers/{id}")).await
	}

	/// Lists every driver.
	pub async fn list(&self) -> Result<Vec<Driver>> {
		self.client.send_list(ApiRequest::get("/drivers")).await
	}

	/// Lists drivers in `status`.
	pub async fn by_status(&self, status: &StatusLabel) -> Result<Vec<Driver>> {
		self.client.send_list(ApiRequest::get(format!("/drivers/status/{status}"))).await
	}
}
