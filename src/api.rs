//! Typed endpoint groups borrowed from an [`ApiClient`].
//!
//! Each group is a thin view over the client, so every call goes through the same bearer
//! attachment and refresh-and-retry path as [`ApiClient::request`].

pub mod auth;
pub mod billing;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod vehicle;

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	error::ConfigError,
	http::{ApiTransport, FileUpload, MultipartForm},
};

macro_rules! def_api {
	($name:ident, $accessor:ident, $doc:literal) => {
		#[doc = $doc]
		pub struct $name<'a, T>
		where
			T: ?Sized + ApiTransport,
		{
			client: &'a ApiClient<T>,
		}
		impl<'a, T> $name<'a, T>
		where
			T: ?Sized + ApiTransport,
		{
			/// Returns the client this group sends through.
			pub fn client(&self) -> &'a ApiClient<T> {
				self.client
			}
		}
		impl<T> Clone for $name<'_, T>
		where
			T: ?Sized + ApiTransport,
		{
			fn clone(&self) -> Self {
				*self
			}
		}
		impl<T> Copy for $name<'_, T> where T: ?Sized + ApiTransport {}
		impl<T> Debug for $name<'_, T>
		where
			T: ?Sized + ApiTransport,
		{
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_struct(stringify!($name)).field("client", self.client).finish()
			}
		}
		impl<T> ApiClient<T>
		where
			T: ?Sized + ApiTransport,
		{
			#[doc = concat!("Returns the [`", stringify!($name), "`] endpoint group.")]
			pub fn $accessor(&self) -> $name<'_, T> {
				$name { client: self }
			}
		}
	};
}

def_api! { AuthApi, auth, "Registration, login, and account management under `/auth`." }
def_api! { BookingsApi, bookings, "Trip bookings under `/bookings`." }
def_api! { BillingApi, billing, "Invoices under `/billing/bills`." }
def_api! { CustomersApi, customers, "Customer profiles under `/customers`." }
def_api! { DriversApi, drivers, "Driver profiles under `/drivers`." }
def_api! { VehiclesApi, vehicles, "Vehicles under `/vehicles`." }

/// Flattens `fields` into a multipart form and attaches `upload` under `file_field`.
fn profile_form<F>(
	fields: &F,
	file_field: &str,
	upload: Option<FileUpload>,
) -> Result<MultipartForm, ConfigError>
where
	F: ?Sized + Serialize,
{
	let form = MultipartForm::from_fields(fields)?;

	Ok(match upload {
		Some(upload) => form.file(file_field, upload),
		None => form,
	})
}
