//! Client-level error types shared across the transport, stores, and endpoint groups.

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// No response was received (DNS, TCP, TLS, IO).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The backend answered with a non-success status.
	#[error(transparent)]
	Http(#[from] HttpError),
	/// Access-credential recovery failed; the session has been invalidated.
	#[error(transparent)]
	Refresh(#[from] RefreshError),
	/// The response body could not be decoded into the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl Error {
	/// Returns the HTTP status carried by the error, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Http(e) => Some(e.status),
			Self::Refresh(RefreshError::Rejected(e)) => Some(e.status),
			Self::Decode(e) => e.status,
			_ => None,
		}
	}

	/// Returns `true` when the backend rejected the caller's credentials.
	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(401)
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value supplied by the caller or environment.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than http or https.
	#[error("Base URL scheme `{scheme}` is not supported.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// Request path cannot be joined onto the base URL.
	#[error("Request path `{path}` is invalid.")]
	InvalidPath {
		/// Offending path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Environment variable holds an unusable value.
	#[error("Environment variable {name} holds an invalid value.")]
	InvalidEnv {
		/// Variable name.
		name: &'static str,
	},
	/// Path identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::model::IdentifierError),
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	BodySerialize(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO); no response was received.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-success HTTP status returned by the backend.
#[derive(Clone, Debug)]
pub struct HttpError {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as lossy UTF-8.
	pub body: String,
	/// Retry-After hint from upstream, if supplied.
	pub retry_after: Option<Duration>,
}
impl HttpError {
	/// Returns the backend's `message` (or `error`) field when the body is a JSON object,
	/// otherwise the raw body.
	pub fn message(&self) -> Cow<'_, str> {
		let trimmed = self.body.trim();

		if trimmed.is_empty() {
			return Cow::Borrowed("no response body");
		}
		if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(trimmed) {
			for field in ["message", "error"] {
				if let Some(serde_json::Value::String(text)) = map.get(field) {
					return Cow::Owned(text.to_owned());
				}
			}
		}

		Cow::Borrowed(trimmed)
	}

	/// Decodes the error body as JSON.
	pub fn json<T>(&self) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		DecodeError::decode(self.body.as_bytes(), Some(self.status))
	}
}
impl Display for HttpError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "API responded with HTTP {}: {}.", self.status, self.message())
	}
}
impl StdError for HttpError {}

/// JSON body failed to decode into the requested type.
#[derive(Debug, ThisError)]
#[error("Response body does not match the expected shape at `{}`.", .source.path())]
pub struct DecodeError {
	/// Structured parsing failure, including the JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code, when available.
	pub status: Option<u16>,
}
impl DecodeError {
	pub(crate) fn decode<T>(bytes: &[u8], status: Option<u16>) -> Result<T, Self>
	where
		T: DeserializeOwned,
	{
		let de = &mut serde_json::Deserializer::from_slice(bytes);

		serde_path_to_error::deserialize(de).map_err(|source| Self { source, status })
	}
}

/// Failures of the refresh-and-retry cycle. Each one invalidates the session.
#[derive(Debug, ThisError)]
pub enum RefreshError {
	/// The refresh endpoint could not be reached.
	#[error("Refresh endpoint could not be reached.")]
	Transport(#[source] TransportError),
	/// The refresh endpoint rejected the refresh credential.
	#[error("Refresh endpoint rejected the refresh token.")]
	Rejected(#[source] HttpError),
	/// The refresh endpoint returned an undecodable body.
	#[error("Refresh endpoint returned a malformed body.")]
	Decode(#[source] DecodeError),
	/// The refresh endpoint answered without a usable access token.
	#[error("Refresh endpoint response is missing an access token.")]
	MissingAccessToken,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_is_exposed_for_http_and_refresh_rejections() {
		let http = HttpError { status: 404, body: "missing".into(), retry_after: None };
		let err = Error::from(http.clone());

		assert_eq!(err.status(), Some(404));
		assert!(!err.is_unauthorized());

		let err = Error::from(RefreshError::Rejected(HttpError { status: 401, ..http }));

		assert!(err.is_unauthorized());
		assert_eq!(Error::from(RefreshError::MissingAccessToken).status(), None);
	}

	#[test]
	fn decode_error_reports_json_path() {
		#[derive(Debug, Deserialize)]
		struct Payload {
			#[allow(dead_code)]
			inner: Inner,
		}
		#[derive(Debug, Deserialize)]
		struct Inner {
			#[allow(dead_code)]
			count: u32,
		}

		let err = DecodeError::decode::<Payload>(br#"{"inner":{"count":"nope"}}"#, Some(200))
			.expect_err("String count must fail to decode.");

		assert_eq!(err.source.path().to_string(), "inner.count");
		assert_eq!(err.status, Some(200));
		assert!(err.to_string().contains("inner.count"));
	}

	#[test]
	fn http_error_message_falls_back_for_empty_bodies() {
		let err = HttpError { status: 500, body: "  ".into(), retry_after: None };

		assert_eq!(err.message(), "no response body");
		assert_eq!(err.to_string(), "API responded with HTTP 500: no response body.");
	}

	#[test]
	fn http_error_message_prefers_backend_fields() {
		let err = HttpError {
			status: 401,
			body: r#"{"status":401,"error":"Unauthorized","path":"/bookings"}"#.into(),
			retry_after: None,
		};

		assert_eq!(err.message(), "Unauthorized");

		let err = HttpError { status: 400, body: "Booking not found".into(), retry_after: None };

		assert_eq!(err.message(), "Booking not found");
	}
}
