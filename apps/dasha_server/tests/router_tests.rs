use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use dasha_server::error::panic_response;
use dasha_server::{create_router, AppState, RecordStore};
use jyotish_config::ServerSettings;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

fn router() -> Router {
    let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    create_router(AppState::with_fixed_today(
        ServerSettings::default(),
        RecordStore::in_memory(),
        today,
    ))
}

fn request(method: Method, path: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

async fn send(router: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(
    router: Router,
    method: Method,
    path: &str,
    body: Body,
) -> (StatusCode, Value) {
    let (status, bytes) = send(router, request(method, path, body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(router: Router, path: &str, payload: Value) -> (StatusCode, Value) {
    send_json(router, Method::POST, path, Body::from(payload.to_string())).await
}

#[tokio::test]
async fn test_health_routes() {
    for path in ["/", "/health"] {
        let (status, bytes) = send(router(), request(Method::GET, path, Body::empty())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"Dasha server is running");
    }
}

#[tokio::test]
async fn test_dasha_paths() {
    for path in ["/api/dasha", "/calculate/"] {
        let (status, json) = post_json(router(), path, json!({ "birth_date": "1990-05-15" })).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(json["start_number"], 6);
        assert_eq!(json["periods"].as_array().unwrap().len(), 30);
    }
}

#[tokio::test]
async fn test_compare_paths() {
    let payload = json!({
        "birth_date_a": "1990-05-15",
        "birth_date_b": "1988-02-10",
        "years": 5
    });
    for path in ["/api/compare", "/calculate_comparison/"] {
        let (status, json) = post_json(router(), path, payload.clone()).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(json["granularity"], "yearly");
        assert_eq!(json["rows"].as_array().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_numerology_paths() {
    let payload = json!({ "name": "たなかケン", "birth_date": "1990-05-15" });
    for path in ["/api/numerology", "/numerology/calculate/"] {
        let (status, json) = post_json(router(), path, payload.clone()).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(json["converted_name"], "TANAKAKEN");
    }
}

#[tokio::test]
async fn test_saved_record_is_listed_through_router() {
    let router = router();
    let (status, json) = post_json(
        router.clone(),
        "/api/dasha",
        json!({ "birth_date": "1984-11-27", "save": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["record_id"], 1);

    let (status, json) = send_json(router, Method::GET, "/api/records", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["records"][0]["birth_date"], "1984-11-27");
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let (status, json) = send_json(router(), Method::GET, "/api/dasha", Body::empty()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("/api/dasha"));

    let (status, json) = send_json(router(), Method::POST, "/api/records", Body::empty()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let (status, json) = send_json(router(), Method::GET, "/api/nope", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_oversized_body_is_json_413() {
    let filler = "x".repeat(3 * 1024 * 1024);
    let payload = json!({ "birth_date": "1990-05-15", "filler": filler });
    let (status, json) = post_json(router(), "/api/dasha", payload).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Request body too large"));
}

async fn explode() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn test_panic_becomes_json_500() {
    let router = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(panic_response));
    let (status, json) = send_json(router, Method::GET, "/explode", Body::empty()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Internal error: unexpected server error");
}
