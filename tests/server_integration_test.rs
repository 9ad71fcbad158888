//! Spawns the real router on an ephemeral port and drives it over HTTP,
//! with both remote services mocked.

use httpmock::prelude::*;
use shipping_checker::server::{build_router, state::AppState};
use shipping_checker::utils::validation::Validate;
use shipping_checker::TomlConfig;
use std::sync::Arc;

async fn spawn_app(mock_server: &MockServer) -> String {
    let config_toml = format!(
        r#"
[service]
name = "shipping-checker"
bind_addr = "127.0.0.1:0"

[geocode]
endpoint = "{}"
timeout_seconds = 5

[rate_engine]
endpoint = "{}"

[security]
nonce_ttl_seconds = 60
"#,
        mock_server.url("/zip"),
        mock_server.url("/rates"),
    );

    let config = TomlConfig::from_toml_str(&config_toml).unwrap();
    config.validate().unwrap();

    let state = Arc::new(AppState::from_config(&config, config.nonce_ttl()).unwrap());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn mock_california(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/zip/90210");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"state_id": "CA", "state_name": "California", "city": "Beverly Hills"}
            ]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/rates");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "rates": {"flat_rate:1": {"label": "Flat rate", "cost": 5.99}}
            }));
    });
}

async fn fetch_nonce(client: &reqwest::Client, base: &str) -> String {
    let body: serde_json::Value = client
        .get(format!("{}/api/v1/nonce", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["nonce"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_probe() {
    let mocks = MockServer::start();
    let base = spawn_app(&mocks).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_check_happy_path_with_disclosure() {
    let mocks = MockServer::start();
    mock_california(&mocks);
    let base = spawn_app(&mocks).await;
    let client = reqwest::Client::new();

    let nonce = fetch_nonce(&client, &base).await;
    let response = client
        .post(format!("{}/api/v1/check", base))
        .json(&serde_json::json!({"postal_code": "90210", "nonce": nonce}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let verdict: serde_json::Value = response.json().await.unwrap();
    assert_eq!(verdict["can_ship"], true);
    assert_eq!(verdict["quotes"][0]["method_id"], "flat_rate:1");
    assert!(verdict["disclosure"]
        .as_str()
        .unwrap()
        .contains("CALIFORNIA"));
}

#[tokio::test]
async fn test_nonce_cannot_be_replayed() {
    let mocks = MockServer::start();
    mock_california(&mocks);
    let base = spawn_app(&mocks).await;
    let client = reqwest::Client::new();

    let nonce = fetch_nonce(&client, &base).await;
    let request = serde_json::json!({"postal_code": "90210", "nonce": nonce});

    let first = client
        .post(format!("{}/api/v1/check", base))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let replay = client
        .post(format!("{}/api/v1/check", base))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(replay.status(), 403);
    let body: serde_json::Value = replay.json().await.unwrap();
    assert_eq!(body["code"], 2001);
}

#[tokio::test]
async fn test_missing_nonce_rejected_before_any_remote_call() {
    let mocks = MockServer::start();
    let geocode_mock = mocks.mock(|when, then| {
        when.method(GET).path_contains("/zip");
        then.status(200).json_body(serde_json::json!([]));
    });
    let base = spawn_app(&mocks).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/v1/check", base))
        .json(&serde_json::json!({"postal_code": "90210", "nonce": "bogus"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
    geocode_mock.assert_hits(0);
}

#[tokio::test]
async fn test_blank_postal_code_is_a_400() {
    let mocks = MockServer::start();
    let base = spawn_app(&mocks).await;
    let client = reqwest::Client::new();

    let nonce = fetch_nonce(&client, &base).await;
    let response = client
        .post(format!("{}/api/v1/check", base))
        .json(&serde_json::json!({"postal_code": "  ", "nonce": nonce}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "Please enter a ZIP code.");
}

#[tokio::test]
async fn test_engine_outage_maps_to_503() {
    let mocks = MockServer::start();
    mocks.mock(|when, then| {
        when.method(GET).path("/zip/10001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"state_id": "NY", "state_name": "New York", "city": "New York"}
            ]));
    });
    mocks.mock(|when, then| {
        when.method(POST).path("/rates");
        then.status(500);
    });
    let base = spawn_app(&mocks).await;
    let client = reqwest::Client::new();

    let nonce = fetch_nonce(&client, &base).await;
    let response = client
        .post(format!("{}/api/v1/check", base))
        .json(&serde_json::json!({"postal_code": "10001", "nonce": nonce}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 503);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 5001);
}
