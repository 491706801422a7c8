//! Integration tests for the REST client against a mock BrickLink server.
//!
//! These tests verify envelope normalization end to end:
//! - `data` is returned exactly when `meta.code` is 200
//! - non-200 codes map to the matching error kind, whatever the HTTP status
//! - non-JSON and envelope-less bodies are reported distinctly
//! - every call sends exactly one signed request

use bricklink_api::{
    AccessToken, BaseUrl, Bricklink, BricklinkConfig, ConsumerKey, ConsumerSecret, HttpError,
    RestError, TokenSecret,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client that talks to the given mock server.
fn client_for(server: &MockServer) -> Bricklink {
    let config = BricklinkConfig::builder()
        .consumer_key(ConsumerKey::new("test-consumer-key").unwrap())
        .consumer_secret(ConsumerSecret::new("test-consumer-secret").unwrap())
        .token(AccessToken::new("test-token").unwrap())
        .token_secret(TokenSecret::new("test-token-secret").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Bricklink::with_config(&config).unwrap()
}

fn success(data: Value) -> Value {
    json!({
        "meta": {"code": 200, "message": "OK", "description": "OK"},
        "data": data
    })
}

fn failure(code: u16, message: &str) -> Value {
    json!({
        "meta": {"code": code, "message": message, "description": "details"},
        "data": {}
    })
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Successful Envelopes
// ============================================================================

#[tokio::test]
async fn test_success_returns_data_exactly() {
    let server = MockServer::start().await;
    let data = json!({"color_id": 5, "color_name": "Red", "nested": [1, 2, {"x": null}]});
    mount_get(&server, "/colors/5", success(data.clone())).await;

    let client = client_for(&server);
    let result = client.rest().get("colors/5", None).await.unwrap();

    assert_eq!(result, data);
}

#[tokio::test]
async fn test_success_without_data_returns_null() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/notifications",
        json!({"meta": {"code": 200, "message": "OK"}}),
    )
    .await;

    let client = client_for(&server);
    let result = client.rest().get("notifications", None).await.unwrap();

    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn test_http_status_does_not_override_meta_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_json(success(json!([]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let categories = client.categories().get_category_list().await.unwrap();

    assert!(categories.is_empty());
}

// ============================================================================
// Error Classification
// ============================================================================

#[tokio::test]
async fn test_meta_404_is_not_found() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors/999", failure(404, "Not Found")).await;

    let client = client_for(&server);
    let error = client.colors().get_color(999).await.unwrap_err();

    match error {
        RestError::NotFound(failure) => {
            assert_eq!(failure.code, 404);
            assert_eq!(failure.message, "Not Found");
            assert_eq!(failure.envelope["meta"]["description"], "details");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_meta_429_is_rate_limited() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors", failure(429, "Too Many Requests")).await;

    let client = client_for(&server);
    let error = client.colors().get_color_list().await.unwrap_err();

    assert!(matches!(error, RestError::RateLimited(ref f) if f.code == 429));
    assert_eq!(error.code(), Some(429));
}

#[tokio::test]
async fn test_meta_401_and_403_are_authentication_errors() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors/1", failure(401, "BAD_OAUTH_REQUEST")).await;
    mount_get(&server, "/colors/2", failure(403, "PERMISSION_DENIED")).await;

    let client = client_for(&server);

    let unauthorized = client.colors().get_color(1).await.unwrap_err();
    assert!(matches!(unauthorized, RestError::Authentication(ref f) if f.code == 401));

    let forbidden = client.colors().get_color(2).await.unwrap_err();
    assert!(matches!(forbidden, RestError::Authentication(ref f) if f.code == 403));
}

#[tokio::test]
async fn test_other_meta_codes_are_api_errors() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors/3", failure(400, "INVALID_URI")).await;

    let client = client_for(&server);
    let error = client.colors().get_color(3).await.unwrap_err();

    match error {
        RestError::Api(failure) => {
            assert_eq!(failure.code, 400);
            assert_eq!(failure.message, "INVALID_URI");
        }
        other => panic!("Expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_message_defaults_to_unknown_error() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors/4", json!({"meta": {"code": 500}})).await;

    let client = client_for(&server);
    let error = client.colors().get_color(4).await.unwrap_err();

    assert_eq!(error.failure().unwrap().message, "Unknown error");
}

#[tokio::test]
async fn test_non_json_body_is_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/colors"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.colors().get_color_list().await.unwrap_err();

    match error {
        RestError::Http(HttpError::InvalidBody { status, body }) => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("Expected InvalidBody, got {other:?}"),
    }
}

#[tokio::test]
async fn test_json_without_meta_is_malformed_envelope() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors", json!({"data": []})).await;

    let client = client_for(&server);
    let error = client.colors().get_color_list().await.unwrap_err();

    assert!(matches!(error, RestError::MalformedEnvelope { .. }));
}

#[tokio::test]
async fn test_data_of_the_wrong_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_get(&server, "/colors/5", success(json!("not an object"))).await;

    let client = client_for(&server);
    let error = client.colors().get_color(5).await.unwrap_err();

    assert!(matches!(error, RestError::Decode { resource: "Color", .. }));
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_requests_carry_oauth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/colors"))
        .and(header_exists("Authorization"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.colors().get_color_list().await.unwrap();
}

#[tokio::test]
async fn test_json_body_is_sent_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feedback/77/reply"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"reply": "Thanks!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .feedback()
        .reply_feedback(
            77,
            &bricklink_api::rest::resources::FeedbackReply {
                reply: "Thanks!".to_string(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_repeated_calls_send_repeated_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/colors/11"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(json!({"color_id": 11}))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.colors().get_color(11).await.unwrap();
    let second = client.colors().get_color(11).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_body_on_get_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = client
        .rest()
        .request(
            bricklink_api::HttpMethod::Get,
            "colors",
            None,
            Some(json!({"x": 1})),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        RestError::Http(HttpError::InvalidRequest(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
