// std
use std::{
	env,
	sync::{Arc, Mutex},
};
// self
use mega_client::{
	auth::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SessionInvalidated},
	client::ApiClient,
	config::ClientConfig,
	error::{Error, RefreshError, TransportError},
	http::{
		ApiRequest, ApiResponse, ApiTransport, FileUpload, PartValue, RequestBody,
		TransportFuture,
	},
	model::CustomerDto,
	store::{FileStore, MemoryStore, SessionStore},
	url::Url,
};

/// Answers 401 unless the request carries `Bearer A2`; the refresh endpoint issues `A2`.
#[derive(Default)]
struct RotatingBackend {
	seen: Mutex<Vec<(String, ApiRequest)>>,
	refresh_offline: bool,
}
impl RotatingBackend {
	fn seen(&self) -> Vec<(String, ApiRequest)> {
		self.seen.lock().expect("Request log lock should not be poisoned.").clone()
	}
}
impl ApiTransport for RotatingBackend {
	fn send<'a>(&'a self, url: Url, request: &'a ApiRequest) -> TransportFuture<'a> {
		self.seen
			.lock()
			.expect("Request log lock should not be poisoned.")
			.push((url.path().to_owned(), request.clone()));

		let outcome = if url.path() == "/auth/refresh-token" {
			if self.refresh_offline {
				Err(TransportError::Io(std::io::Error::other("refresh endpoint offline")))
			} else {
				Ok(ApiResponse::json_body(200, &serde_json::json!({ "accessToken": "A2" })))
			}
		} else if request.header("authorization") == Some("Bearer A2") {
			Ok(ApiResponse::json_body(
				200,
				&serde_json::json!({ "customerId": 5, "name": "Nimal", "nic": "901234567V" }),
			))
		} else {
			Ok(ApiResponse::new(401, "expired"))
		};

		Box::pin(async move { outcome })
	}
}

fn config() -> ClientConfig {
	ClientConfig::new("http://cab.test").expect("Base URL should parse.").with_login_path("/signin")
}

#[tokio::test]
async fn multipart_body_is_resent_intact_after_refresh() {
	let store = Arc::new(MemoryStore::default());
	let client: ApiClient<RotatingBackend> =
		ApiClient::with_transport(config(), store.clone(), RotatingBackend::default());

	store.set(ACCESS_TOKEN_KEY, "A1".into()).await.expect("Seed should succeed.");
	store.set(REFRESH_TOKEN_KEY, "R1".into()).await.expect("Seed should succeed.");

	let dto = CustomerDto {
		name: Some("Nimal".into()),
		nic: Some("901234567V".into()),
		..Default::default()
	};
	let picture = FileUpload::new("nimal.png", vec![1, 2, 3, 4]).with_mime("image/png");
	let customer = client
		.customers()
		.update(5, &dto, Some(picture))
		.await
		.expect("Update should succeed after refresh.");

	assert_eq!(customer.customer_id, 5);

	let seen = client.transport.seen();

	assert_eq!(seen.len(), 3);
	assert_eq!(seen[0].0, "/customers/5");
	assert_eq!(seen[1].0, "/auth/refresh-token");
	assert_eq!(seen[2].0, "/customers/5");
	assert_eq!(seen[0].1.body(), seen[2].1.body());
	assert!(seen[2].1.is_retried());

	let RequestBody::Multipart(form) = seen[2].1.body() else {
		panic!("Resent body should stay multipart.");
	};

	assert_eq!(form.text_value("name"), Some("Nimal"));
	assert!(form.parts().iter().any(|part| part.name == "profilePicture"
		&& matches!(&part.value, PartValue::File(upload) if upload.bytes == [1, 2, 3, 4])));
}

#[tokio::test]
async fn listeners_run_after_credentials_are_cleared() {
	let store = Arc::new(MemoryStore::default());
	let backend = RotatingBackend { refresh_offline: true, ..Default::default() };
	let client: ApiClient<RotatingBackend> =
		ApiClient::with_transport(config(), store.clone(), backend);
	let observed = Arc::new(Mutex::new(Vec::new()));
	let sink = observed.clone();
	let view = store.clone();

	client.subscribe(move |event: &SessionInvalidated| {
		sink.lock()
			.expect("Observation lock should not be poisoned.")
			.push((event.login_path.clone(), view.len()));
	});

	store.set(ACCESS_TOKEN_KEY, "A1".into()).await.expect("Seed should succeed.");
	store.set(REFRESH_TOKEN_KEY, "R1".into()).await.expect("Seed should succeed.");

	let err = client.vehicles().list().await.expect_err("Offline refresh must fail.");

	assert!(matches!(err, Error::Refresh(RefreshError::Transport(_))));
	assert_eq!(
		observed.lock().expect("Observation lock should not be poisoned.").as_slice(),
		&[("/signin".to_owned(), 0)]
	);
}

#[tokio::test]
async fn refreshed_token_survives_in_file_store() {
	let path = env::temp_dir().join(format!("mega-client-it-{}.json", std::process::id()));

	let _ = std::fs::remove_file(&path);

	let store = Arc::new(FileStore::open(&path).expect("File store should open."));
	let client: ApiClient<RotatingBackend> =
		ApiClient::with_transport(config(), store.clone(), RotatingBackend::default());

	store.set(ACCESS_TOKEN_KEY, "A1".into()).await.expect("Seed should succeed.");
	store.set(REFRESH_TOKEN_KEY, "R1".into()).await.expect("Seed should succeed.");
	client.customers().get(5).await.expect("Lookup should succeed after refresh.");

	let reopened = FileStore::open(&path).expect("File store should reopen.");

	assert_eq!(
		reopened.get(ACCESS_TOKEN_KEY).await.expect("Read should succeed."),
		Some("A2".into())
	);
	assert_eq!(
		reopened.get(REFRESH_TOKEN_KEY).await.expect("Read should succeed."),
		Some("R1".into())
	);

	let _ = std::fs::remove_file(&path);
}
