//! `/vehicles` endpoints.

// self
use crate::{
	_prelude::*,
	api::{self, VehiclesApi},
	http::{ApiRequest, ApiTransport, FileUpload},
	model::{
		RegistrationNumber, StatusLabel, Vehicle, VehicleDto,
		vehicle::{VehicleEnvelope, VehicleListEnvelope},
	},
};

const PICTURE_FIELD: &str = "vehiclePicture";

impl<T> VehiclesApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Registers a vehicle for the signed-in driver, optionally uploading a picture.
	pub async fn create(
		&self,
		vehicle: &VehicleDto,
		picture: Option<FileUpload>,
	) -> Result<Vehicle> {
		let form = api::profile_form(vehicle, PICTURE_FIELD, picture)?;

		self.one(ApiRequest::post("/vehicles").with_multipart(form)).await
	}

	/// Fetches a vehicle by identifier.
	pub async fn get(&self, id: i64) -> Result<Vehicle> {
		self.one(ApiRequest::get(format!("/vehicles/{id}"))).await
	}

	/// Fetches a vehicle by registration number.
	pub async fn by_registration(&self, registration: &RegistrationNumber) -> Result<Vehicle> {
		self.one(ApiRequest::get(format!("/vehicles/registration/{registration}"))).await
	}

	/// Updates a vehicle, optionally replacing its picture.
	pub async fn update(
		&self,
		id: i64,
		vehicle: &VehicleDto,
		picture: Option<FileUpload>,
	) -> Result<Vehicle> {
		let form = api::profile_form(vehicle, PICTURE_FIELD, picture)?;

		self.one(ApiRequest::put(format!("/vehicles/{id}")).with_multipart(form)).await
	}

	/// Deletes a vehicle.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.delete(format!("/vehicles/{id}")).await
	}

	/// Lists every vehicle.
	pub async fn list(&self) -> Result<Vec<Vehicle>> {
		self.many(ApiRequest::get("/vehicles")).await
	}

	/// Lists the vehicles assigned to the signed-in driver.
	pub async fn mine(&self) -> Result<Vec<Vehicle>> {
		self.many(ApiRequest::get("/vehicles/driver")).await
	}

	/// Lists vehicles in `status`.
	pub async fn by_status(&self, status: &StatusLabel) -> Result<Vec<Vehicle>> {
		self.many(ApiRequest::get(format!("/vehicles/status/{status}"))).await
	}

	async fn one(&self, request: ApiRequest) -> Result<Vehicle> {
		Ok(self.client.send_json::<VehicleEnvelope>(request).await?.into())
	}

	async fn many(&self, request: ApiRequest) -> Result<Vec<Vehicle>> {
		self.client.send_list_as::<VehicleListEnvelope, _>(request).await
	}
}
