//! Transport primitives: request descriptors, received responses, and the
//! [`ApiTransport`] seam.
//!
//! The client never talks to an HTTP stack directly. It hands a fully resolved [`Url`]
//! (query string included) plus the [`ApiRequest`] descriptor to an [`ApiTransport`],
//! which returns whatever status the backend produced. Only failures without a response
//! surface as [`TransportError`]; status classification stays in the client so that
//! fake transports used in tests exercise the same interception path.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{ConfigError, DecodeError, HttpError, TransportError},
};
#[cfg(feature = "reqwest")] use crate::config::ClientConfig;

/// Header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

/// Boxed future returned by [`ApiTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks able to deliver [`ApiRequest`] descriptors.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// clone of a client, and the returned futures must be `Send`.
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` to `url`, which already carries the request's query parameters.
	///
	/// Any received status, including 4xx and 5xx, resolves to `Ok`.
	fn send<'a>(&'a self, url: Url, request: &'a ApiRequest) -> TransportFuture<'a>;
}

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl HttpMethod {
	/// Returns the canonical verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request payload. Kept as plain data so the same descriptor can be sent twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
	/// No body.
	#[default]
	Empty,
	/// JSON document sent with `Content-Type: application/json`.
	Json(serde_json::Value),
	/// `multipart/form-data` payload.
	Multipart(MultipartForm),
}

/// Ordered multipart form made of text fields and file uploads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
	parts: Vec<FormPart>,
}
impl MultipartForm {
	/// Flattens a serializable DTO into text fields, skipping `null` values.
	pub fn from_fields<T>(fields: &T) -> Result<Self, ConfigError>
	where
		T: ?Sized + Serialize,
	{
		let value = serde_json::to_value(fields).map_err(ConfigError::BodySerialize)?;
		let mut form = Self::default();

		if let serde_json::Value::Object(map) = value {
			for (name, value) in map {
				match value {
					serde_json::Value::Null => {},
					serde_json::Value::String(text) => form = form.text(name, text),
					other => form = form.text(name, other.to_string()),
				}
			}
		}

		Ok(form)
	}

	/// Appends a text field.
	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parts.push(FormPart { name: name.into(), value: PartValue::Text(value.into()) });

		self
	}

	/// Appends a file field.
	pub fn file(mut self, name: impl Into<String>, upload: FileUpload) -> Self {
		self.parts.push(FormPart { name: name.into(), value: PartValue::File(upload) });

		self
	}

	/// Returns the parts in insertion order.
	pub fn parts(&self) -> &[FormPart] {
		&self.parts
	}

	/// Returns the first text value stored under `name`.
	pub fn text_value(&self, name: &str) -> Option<&str> {
		self.parts.iter().find(|part| part.name == name).and_then(|part| match &part.value {
			PartValue::Text(text) => Some(text.as_str()),
			PartValue::File(_) => None,
		})
	}

	#[cfg(feature = "reqwest")]
	fn to_reqwest(&self) -> Result<reqwest::multipart::Form, TransportError> {
		use reqwest::multipart::{Form, Part};

		let mut form = Form::new();

		for part in &self.parts {
			form = match &part.value {
				PartValue::Text(text) => form.text(part.name.clone(), text.clone()),
				PartValue::File(upload) => {
					let mut file =
						Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());

					if let Some(mime) = &upload.mime {
						file = file.mime_str(mime).map_err(TransportError::network)?;
					}

					form.part(part.name.clone(), file)
				},
			};
		}

		Ok(form)
	}
}

/// Named multipart field.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
	/// Field name.
	pub name: String,
	/// Field payload.
	pub value: PartValue,
}

/// Multipart field payload.
#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
	/// Plain text value.
	Text(String),
	/// Binary upload.
	File(FileUpload),
}

/// In-memory file attached to a multipart form.
#[derive(Clone, PartialEq)]
pub struct FileUpload {
	/// File name reported to the backend.
	pub file_name: String,
	/// MIME type, if known.
	pub mime: Option<String>,
	/// File contents.
	pub bytes: Vec<u8>,
}
impl FileUpload {
	/// Wraps raw bytes under `file_name`.
	pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
		Self { file_name: file_name.into(), mime: None, bytes: bytes.into() }
	}

	/// Sets the MIME type.
	pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
		self.mime = Some(mime.into());

		self
	}
}
impl Debug for FileUpload {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FileUpload")
			.field("file_name", &self.file_name)
			.field("mime", &self.mime)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Outbound request descriptor.
///
/// Each attempt works on its own value: the client attaches the bearer credential to a copy,
/// and the single permitted resend is a new value whose retried marker is set. Callers cannot
/// set that marker themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	method: HttpMethod,
	path: String,
	headers: BTreeMap<String, String>,
	query: Vec<(String, String)>,
	body: RequestBody,
	retried: bool,
}
impl ApiRequest {
	/// Creates a descriptor for `method` + `path` (relative to the base URL).
	pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			headers: BTreeMap::new(),
			query: Vec::new(),
			body: RequestBody::Empty,
			retried: false,
		}
	}

	/// `GET` descriptor.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(HttpMethod::Get, path)
	}

	/// `POST` descriptor.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(HttpMethod::Post, path)
	}

	/// `PUT` descriptor.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(HttpMethod::Put, path)
	}

	/// `DELETE` descriptor.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(HttpMethod::Delete, path)
	}

	/// Serializes `body` as the JSON payload.
	pub fn with_json<B>(self, body: &B) -> Result<Self, ConfigError>
	where
		B: ?Sized + Serialize,
	{
		let value = serde_json::to_value(body).map_err(ConfigError::BodySerialize)?;

		Ok(self.with_body(RequestBody::Json(value)))
	}

	/// Replaces the payload.
	pub fn with_body(mut self, body: RequestBody) -> Self {
		self.body = body;

		self
	}

	/// Uses `form` as a multipart payload.
	pub fn with_multipart(self, form: MultipartForm) -> Self {
		self.with_body(RequestBody::Multipart(form))
	}

	/// Appends a query parameter.
	pub fn with_query(mut self, name: impl Into<String>, value: impl Display) -> Self {
		self.query.push((name.into(), value.to_string()));

		self
	}

	/// Sets a header, replacing any value stored under the same case-insensitive name.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert_header(name.into(), value.into());

		self
	}

	/// HTTP verb.
	pub fn method(&self) -> HttpMethod {
		self.method
	}

	/// Path relative to the base URL.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Caller-supplied headers, plus `Authorization` once attached.
	pub fn headers(&self) -> &BTreeMap<String, String> {
		&self.headers
	}

	/// Case-insensitive header lookup.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}

	/// Query parameters in insertion order.
	pub fn query(&self) -> &[(String, String)] {
		&self.query
	}

	/// Request payload.
	pub fn body(&self) -> &RequestBody {
		&self.body
	}

	/// `true` once this descriptor is the single permitted resend after a refresh.
	pub fn is_retried(&self) -> bool {
		self.retried
	}

	pub(crate) fn set_bearer(&mut self, token: &TokenSecret) {
		self.insert_header(AUTHORIZATION.into(), token.bearer());
	}

	pub(crate) fn into_retry(mut self) -> Self {
		self.retried = true;

		self
	}

	fn insert_header(&mut self, name: String, value: String) {
		self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
		self.headers.insert(name, value);
	}
}

/// Response received from the backend, whatever its status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	status: u16,
	headers: BTreeMap<String, String>,
	body: Vec<u8>,
}
impl ApiResponse {
	/// Builds a response with `status` and raw `body`.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers: BTreeMap::new(), body: body.into() }
	}

	/// Builds a JSON response.
	pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
		Self::new(status, value.to_string()).with_header("content-type", "application/json")
	}

	/// Adds a header; names are stored lowercase.
	pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
		self.headers.insert(name.to_ascii_lowercase(), value.into());

		self
	}

	/// HTTP status code.
	pub fn status(&self) -> u16 {
		self.status
	}

	/// `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Case-insensitive header lookup.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	/// Raw body bytes.
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Body decoded as lossy UTF-8.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Decodes the body as JSON, reporting the failing path on mismatch.
	pub fn json<T>(&self) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		DecodeError::decode(&self.body, Some(self.status))
	}

	/// Returns `self` for 2xx statuses, otherwise the matching [`HttpError`].
	pub fn error_for_status(self) -> Result<Self, HttpError> {
		if self.is_success() { Ok(self) } else { Err(self.into_http_error()) }
	}

	/// Converts the response into an [`HttpError`], keeping the body and Retry-After hint.
	pub fn into_http_error(self) -> HttpError {
		let retry_after = self.header("retry-after").and_then(parse_retry_after);

		HttpError { status: self.status, body: self.text(), retry_after }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client carrying the configured user agent and timeout.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().user_agent(config.user_agent.clone());

		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn send<'a>(&'a self, url: Url, request: &'a ApiRequest) -> TransportFuture<'a> {
		use reqwest::{Method, header::CONTENT_TYPE};

		Box::pin(async move {
			let method = match request.method() {
				HttpMethod::Get => Method::GET,
				HttpMethod::Post => Method::POST,
				HttpMethod::Put => Method::PUT,
				HttpMethod::Delete => Method::DELETE,
			};
			let multipart = matches!(request.body(), RequestBody::Multipart(_));
			let mut builder = self.0.request(method, url);

			for (name, value) in request.headers() {
				// reqwest computes the multipart boundary itself.
				if multipart && name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
					continue;
				}

				builder = builder.header(name.as_str(), value.as_str());
			}

			builder = match request.body() {
				RequestBody::Empty => builder,
				RequestBody::Json(value) => {
					if request.header(CONTENT_TYPE.as_str()).is_none() {
						builder = builder.header(CONTENT_TYPE, "application/json");
					}

					builder.body(value.to_string())
				},
				RequestBody::Multipart(form) => builder.multipart(form.to_reqwest()?),
			};

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, headers, body })
		})
	}
}

fn parse_retry_after(raw: &str) -> Option<Duration> {
	use time::format_description::well_known::Rfc2822;

	let raw = raw.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bearer_replaces_existing_authorization_header() {
		let mut request = ApiRequest::get("/bookings").with_header("authorization", "Basic abc");

		request.set_bearer(&TokenSecret::new("A1"));

		assert_eq!(request.headers().len(), 1);
		assert_eq!(request.header("Authorization"), Some("Bearer A1"));
	}

	#[test]
	fn retry_copy_keeps_payload_and_sets_marker() {
		let request = ApiRequest::put("/bookings/3/accept")
			.with_query("discountAmount", 5)
			.with_json(&serde_json::json!({ "note": "x" }))
			.expect("JSON body should serialize.");
		let retry = request.clone().into_retry();

		assert!(!request.is_retried());
		assert!(retry.is_retried());
		assert_eq!(retry.query(), &[("discountAmount".to_owned(), "5".to_owned())]);
		assert_eq!(retry.body(), request.body());
	}

	#[test]
	fn multipart_from_fields_skips_nulls_and_stringifies() {
		let form = MultipartForm::from_fields(&serde_json::json!({
			"name": "Kamal",
			"userId": 4,
			"profilePicturePath": null,
		}))
		.expect("Fields should flatten.")
		.file("profilePicture", FileUpload::new("me.png", vec![1, 2, 3]).with_mime("image/png"));

		assert_eq!(form.text_value("name"), Some("Kamal"));
		assert_eq!(form.text_value("userId"), Some("4"));
		assert_eq!(form.text_value("profilePicturePath"), None);
		assert_eq!(form.parts().len(), 3);
	}

	#[test]
	fn error_for_status_captures_retry_after() {
		let err = ApiResponse::new(503, "busy")
			.with_header("Retry-After", "120")
			.error_for_status()
			.expect_err("503 must map to an error.");

		assert_eq!(err.status, 503);
		assert_eq!(err.body, "busy");
		assert_eq!(err.retry_after, Some(Duration::seconds(120)));

		let ok = ApiResponse::new(204, Vec::new()).error_for_status().expect("204 is a success.");

		assert!(ok.body().is_empty());
	}

	#[test]
	fn file_upload_debug_omits_contents() {
		let upload = FileUpload::new("car.jpg", vec![0_u8; 16]);

		assert_eq!(
			format!("{upload:?}"),
			"FileUpload { file_name: \"car.jpg\", mime: None, len: 16 }"
		);
	}
}
