mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use login_portal::config::Config;
use login_portal::routes::app_router;
use std::net::SocketAddr;

fn test_config(burst: u32) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        session_api_url: "http://127.0.0.1:9/api/v1".to_string(),
        session_api_timeout_ms: 1000,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        login_rate_per_second: 1,
        login_burst_size: burst,
        secure_cookies: false,
    }
}

/// Serves the full router on an ephemeral port, with peer addresses.
async fn spawn_app(config: Config) -> String {
    let base_url = common::unreachable_base_url().await;
    let app = app_router(common::create_test_state(&base_url), &config).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
        )
        .await
        .unwrap();
    });

    format!("http://{addr}")
}

async fn post_empty_login(client: &reqwest::Client, app_url: &str) -> reqwest::StatusCode {
    client
        .post(format!("{app_url}/login"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("email=&password=")
        .send()
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_login_rate_limited_after_burst() {
    let app_url = spawn_app(test_config(3)).await;
    let client = reqwest::Client::new();

    let page = client.get(format!("{app_url}/login")).send().await.unwrap();
    assert_eq!(page.status(), StatusCode::OK);

    assert_eq!(post_empty_login(&client, &app_url).await, StatusCode::OK);
    assert_eq!(post_empty_login(&client, &app_url).await, StatusCode::OK);
    assert_eq!(
        post_empty_login(&client, &app_url).await,
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn test_health_not_rate_limited() {
    let app_url = spawn_app(test_config(1)).await;
    let client = reqwest::Client::new();

    assert_eq!(post_empty_login(&client, &app_url).await, StatusCode::OK);
    assert_eq!(
        post_empty_login(&client, &app_url).await,
        StatusCode::TOO_MANY_REQUESTS
    );

    let health = client.get(format!("{app_url}/health")).send().await.unwrap();
    assert_eq!(health.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app_url = spawn_app(test_config(10)).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{app_url}/login/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Sign in"));
}
