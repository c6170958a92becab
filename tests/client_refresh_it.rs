#![cfg(feature = "reqwest")]

// std
use std::sync::{Arc, Mutex};
// crates.io
use httpmock::prelude::*;
// self
use mega_client::{
	auth::{ACCESS_TOKEN_KEY, InvalidationReason, REFRESH_TOKEN_KEY, SessionInvalidated},
	client::ReqwestApiClient,
	config::ClientConfig,
	error::{Error, RefreshError},
	model::Booking,
	store::{MemoryStore, SessionStore},
};

fn build_client(base_url: &str) -> (ReqwestApiClient, Arc<MemoryStore>) {
	let store = Arc::new(MemoryStore::default());
	let config = ClientConfig::new(base_url).expect("Test base URL should be valid.");
	let client =
		ReqwestApiClient::new(config, store.clone()).expect("Reqwest transport should build.");

	(client, store)
}

async fn seed(store: &MemoryStore, access: Option<&str>, refresh: Option<&str>) {
	if let Some(access) = access {
		store.set(ACCESS_TOKEN_KEY, access.into()).await.expect("Failed to seed access token.");
	}
	if let Some(refresh) = refresh {
		store.set(REFRESH_TOKEN_KEY, refresh.into()).await.expect("Failed to seed refresh token.");
	}
}

fn record_events(client: &ReqwestApiClient) -> Arc<Mutex<Vec<SessionInvalidated>>> {
	let events = Arc::new(Mutex::new(Vec::new()));
	let sink = events.clone();

	client.subscribe(move |event: &SessionInvalidated| {
		sink.lock().expect("Event sink lock should not be poisoned.").push(event.clone());
	});

	events
}

const BOOKINGS: &str = r#"[{"bookingId":1,"bookingNumber":"BK-1","pickupAddress":"Fort",
	"destinationAddress":"Kandy","status":"PENDING"}]"#;

#[tokio::test]
async fn stored_access_token_is_sent_as_bearer() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings").header("authorization", "Bearer A1");
			then.status(200).header("content-type", "application/json").body(BOOKINGS);
		})
		.await;

	seed(&store, Some("A1"), Some("R1")).await;

	let before = store.snapshot();
	let bookings = client.bookings().list().await.expect("Listing bookings should succeed.");

	mock.assert_async().await;

	assert_eq!(bookings.len(), 1);
	assert_eq!(bookings[0].booking_number.as_deref(), Some("BK-1"));
	assert_eq!(store.snapshot(), before);
	assert_eq!(client.refresh_metrics().attempts(), 0);
}

#[tokio::test]
async fn expired_access_token_is_refreshed_and_request_resent() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings").header("authorization", "Bearer A1");
			then.status(401).body("expired");
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/auth/refresh-token")
				.json_body(serde_json::json!({ "refreshToken": "R1" }));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"accessToken":"A2"}"#);
		})
		.await;
	let fresh = server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings").header("authorization", "Bearer A2");
			then.status(200).header("content-type", "application/json").body(BOOKINGS);
		})
		.await;
	let events = record_events(&client);

	seed(&store, Some("A1"), Some("R1")).await;

	let bookings: Vec<Booking> =
		client.get("/bookings").await.expect("Resent request should succeed.");

	expired.assert_calls_async(1).await;
	refresh.assert_calls_async(1).await;
	fresh.assert_calls_async(1).await;

	assert_eq!(bookings.len(), 1);
	assert_eq!(store.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed."), Some("A2".into()));
	assert_eq!(store.get(REFRESH_TOKEN_KEY).await.expect("Read should succeed."), Some("R1".into()));
	assert!(events.lock().expect("Event sink lock should not be poisoned.").is_empty());
	assert_eq!(client.refresh_metrics().successes(), 1);
}

#[tokio::test]
async fn second_unauthorized_response_is_returned_without_another_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let denied = server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings/3");
			then.status(401).body(r#"{"error":"Unauthorized"}"#);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"accessToken":"A2"}"#);
		})
		.await;

	seed(&store, Some("A1"), Some("R1")).await;

	let err = client.bookings().get(3).await.expect_err("Second 401 must surface.");

	denied.assert_calls_async(2).await;
	refresh.assert_calls_async(1).await;

	match err {
		Error::Http(http) => {
			assert_eq!(http.status, 401);
			assert_eq!(http.message(), "Unauthorized");
		},
		other => panic!("Unexpected error: {other:?}"),
	}

	assert_eq!(store.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed."), Some("A2".into()));
}

#[tokio::test]
async fn missing_refresh_token_invalidates_session_with_original_error() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let denied = server
		.mock_async(|when, then| {
			when.method(GET).path("/billing/bills");
			then.status(401).body("no session");
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200).body(r#"{"accessToken":"never"}"#);
		})
		.await;
	let events = record_events(&client);

	seed(&store, Some("A1"), None).await;

	let err = client.billing().list().await.expect_err("401 without refresh token must fail.");

	denied.assert_calls_async(1).await;
	refresh.assert_calls_async(0).await;

	assert!(matches!(&err, Error::Http(http) if http.status == 401 && http.body == "no session"));
	assert!(store.is_empty());
	assert_eq!(
		events.lock().expect("Event sink lock should not be poisoned.").as_slice(),
		&[SessionInvalidated {
			reason: InvalidationReason::MissingRefreshToken,
			login_path: "/login".into(),
		}]
	);
	assert_eq!(client.refresh_metrics().attempts(), 0);
	assert_eq!(client.refresh_metrics().invalidations(InvalidationReason::MissingRefreshToken), 1);
}

#[tokio::test]
async fn rejected_refresh_clears_credentials_and_notifies_listeners() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let denied = server
		.mock_async(|when, then| {
			when.method(GET).path("/drivers");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(403).body("Invalid refresh token");
		})
		.await;
	let events = record_events(&client);

	seed(&store, Some("A1"), Some("R1")).await;

	let err = client.drivers().list().await.expect_err("Rejected refresh must fail.");

	denied.assert_calls_async(1).await;
	refresh.assert_calls_async(1).await;

	assert!(matches!(&err, Error::Refresh(RefreshError::Rejected(http)) if http.status == 403));
	assert!(store.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed.").is_none());
	assert!(store.get(REFRESH_TOKEN_KEY).await.expect("Read should succeed.").is_none());

	let events = events.lock().expect("Event sink lock should not be poisoned.");

	assert_eq!(events.len(), 1);
	assert_eq!(events[0].reason, InvalidationReason::RefreshFailed);
	assert_eq!(client.refresh_metrics().failures(), 1);
	assert_eq!(client.refresh_metrics().snapshot().refresh_failed, 1);
}

#[tokio::test]
async fn refresh_without_access_token_counts_as_failure() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());

	server
		.mock_async(|when, then| {
			when.method(GET).path("/customers");
			then.status(401);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	seed(&store, Some("A1"), Some("R1")).await;

	let err = client.customers().list().await.expect_err("Empty refresh body must fail.");

	assert!(matches!(err, Error::Refresh(RefreshError::MissingAccessToken)));
	assert!(store.is_empty());
}

#[tokio::test]
async fn other_error_statuses_never_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server.base_url());
	let failing = server
		.mock_async(|when, then| {
			when.method(GET).path("/vehicles/4");
			then.status(500)
				.header("content-type", "application/json")
				.body(r#"{"message":"boom"}"#);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/refresh-token");
			then.status(200).body(r#"{"accessToken":"A2"}"#);
		})
		.await;

	seed(&store, Some("A1"), Some("R1")).await;

	let err = client.vehicles().get(4).await.expect_err("500 must surface.");

	failing.assert_calls_async(1).await;
	refresh.assert_calls_async(0).await;

	assert_eq!(err.status(), Some(500));
	assert!(err.to_string().contains("boom"));
	assert_eq!(store.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed."), Some("A1".into()));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
	let (client, store) = build_client("http://127.0.0.1:9");

	seed(&store, Some("A1"), Some("R1")).await;

	let err = client.bookings().list().await.expect_err("Closed port must fail.");

	assert!(matches!(err, Error::Transport(_)));
	assert_eq!(client.refresh_metrics().attempts(), 0);
	assert_eq!(store.len(), 2);
}
