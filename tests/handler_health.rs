mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let store = common::MemoryStore::new();
    let server = common::make_server(&store);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let store = common::MemoryStore::unreachable();
    let server = common::make_server(&store);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(
        json["checks"]["database"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Database error")
    );
    assert_eq!(store.sessions_closed(), 1);
}
