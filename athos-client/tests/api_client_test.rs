mod common;

use athos_client::config::ApiSettings;
use athos_client::services::{ApiClient, ApiRequest};
use athos_client::session::Session;
use athos_client::{ClientError, ParsedBody};
use common::{TestApp, TEST_TIMEZONE};
use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Status {
    status: String,
}

#[tokio::test]
async fn attaches_bearer_token_when_auth_required() {
    let app = TestApp::spawn_signed_in("my-token").await;

    Mock::given(method("GET"))
        .and(path("/v1/auth/me"))
        .and(header("Authorization", "Bearer my-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .insert_header("x-request-id", "req-auth"),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request::<Value>(ApiRequest::get("/v1/auth/me").authenticated())
        .await
        .expect("authenticated request succeeds");

    assert_eq!(envelope.data, json!({"ok": true}));
}

#[tokio::test]
async fn attaches_client_timezone_header() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-Client-Timezone", TEST_TIMEZONE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&app.server)
        .await;

    app.api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .expect("request succeeds");
}

#[tokio::test]
async fn unauthenticated_call_sends_no_authorization_header() {
    let app = TestApp::spawn_signed_in("my-token").await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&app.server)
        .await;

    app.api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .unwrap();

    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .headers
        .keys()
        .all(|name| !name.as_str().eq_ignore_ascii_case("authorization")));
}

#[tokio::test]
async fn returns_request_id_from_response_headers() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .insert_header("X-Request-ID", "req-123"),
        )
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .unwrap();

    assert_eq!(envelope.request_id.as_deref(), Some("req-123"));
    assert_eq!(envelope.data.status, "ok");
}

#[tokio::test]
async fn lowercase_request_id_header_is_recognized() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .insert_header("x-request-id", "req-lower"),
        )
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .unwrap();

    assert_eq!(envelope.request_id.as_deref(), Some("req-lower"));
}

#[tokio::test]
async fn missing_request_id_is_none() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .unwrap();

    assert_eq!(envelope.request_id, None);
}

#[tokio::test]
async fn missing_token_fails_locally_without_network_call() {
    let app = TestApp::spawn().await;

    let err = app
        .api()
        .request::<Value>(ApiRequest::get("/v1/dashboard/day?date=2024-05-01").authenticated())
        .await
        .expect_err("request without a token must fail");

    let api_error = err.as_api_error().expect("normalized API error");
    assert_eq!(api_error.status, 401);
    assert_eq!(api_error.detail, "Missing token");
    assert_eq!(api_error.request_id, None);
    assert_eq!(app.request_count().await, 0);
}

#[tokio::test]
async fn server_error_detail_and_request_id_are_normalized() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Invalid credentials"}))
                .insert_header("X-Request-ID", "test-req-id"),
        )
        .mount(&app.server)
        .await;

    let err = app
        .api()
        .request::<Value>(
            ApiRequest::post("/v1/auth/login")
                .json(&json!({"email": "bad@example.com", "password": "wrongpass"}))
                .unwrap(),
        )
        .await
        .expect_err("401 must fail");

    let api_error = err.as_api_error().expect("normalized API error");
    assert_eq!(api_error.status, 401);
    assert_eq!(api_error.request_id.as_deref(), Some("test-req-id"));
    assert_eq!(api_error.detail, "Invalid credentials");
    assert_eq!(
        api_error.raw_body,
        ParsedBody::Json(json!({"detail": "Invalid credentials"}))
    );
}

#[tokio::test]
async fn empty_error_body_synthesizes_detail_from_status() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    let err = app
        .api()
        .request::<Value>(ApiRequest::get("/health"))
        .await
        .expect_err("500 must fail");

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.detail(), "Request failed with status 500");
    assert_eq!(err.as_api_error().unwrap().raw_body, ParsedBody::Null);
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html>Bad Gateway</html>")
                .insert_header("x-request-id", "edge-1"),
        )
        .mount(&app.server)
        .await;

    let err = app
        .api()
        .request::<Value>(ApiRequest::get("/health"))
        .await
        .expect_err("502 must fail");

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.detail, "Request failed with status 502");
    assert_eq!(api_error.request_id.as_deref(), Some("edge-1"));
    assert_eq!(
        api_error.raw_body,
        ParsedBody::Text("<html>Bad Gateway</html>".to_string())
    );
}

#[tokio::test]
async fn malformed_success_body_falls_back_to_text() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request_raw(ApiRequest::get("/health"))
        .await
        .unwrap();
    assert_eq!(envelope.data, ParsedBody::Text("ok".to_string()));

    let as_string = app
        .api()
        .request::<String>(ApiRequest::get("/health"))
        .await
        .unwrap();
    assert_eq!(as_string.data, "ok");
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&app.server)
        .await;

    let envelope = app
        .api()
        .request::<Option<Value>>(ApiRequest::post("/v1/ping"))
        .await
        .unwrap();
    assert_eq!(envelope.data, None);
}

#[tokio::test]
async fn json_body_is_sent_with_content_type() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "a@example.com", "password": "password1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "t", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    app.api()
        .request::<Value>(
            ApiRequest::post("/v1/auth/login")
                .json(&json!({"email": "a@example.com", "password": "password1"}))
                .unwrap(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn request_without_body_has_no_content_type() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header_exists("x-client-timezone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&app.server)
        .await;

    app.api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .unwrap();

    let requests = app.server.received_requests().await.unwrap();
    assert!(requests[0]
        .headers
        .keys()
        .all(|name| !name.as_str().eq_ignore_ascii_case("content-type")));
}

#[tokio::test]
async fn success_body_of_wrong_shape_is_a_decode_error() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"unexpected": true}))
                .insert_header("x-request-id", "req-shape"),
        )
        .mount(&app.server)
        .await;

    let err = app
        .api()
        .request::<Status>(ApiRequest::get("/health"))
        .await
        .expect_err("shape mismatch must fail");

    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.request_id(), Some("req-shape"));
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    let settings = ApiSettings {
        // Port 1 is reserved and never accepts connections.
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: Some(5),
    };
    let api = ApiClient::new(&settings, "UTC", Session::in_memory()).unwrap();

    let err = api
        .request::<Value>(ApiRequest::get("/health"))
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.status(), None);
    assert_eq!(err.request_id(), None);
}
