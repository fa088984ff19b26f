use axum::body::{to_bytes, Body};
use axum::extract::Query;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceExt;

// Router de test con los mismos contratos de superficie que la app real,
// sin base de datos.
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "car-rental-backend",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/rentals/calculate-cost",
            get(|Query(query): Query<CalculateCostQuery>| async move {
                // Misma aritmética que el backend: días inclusivos × tarifa
                let days = (query.end_date - query.start_date).num_days() + 1;
                Json(json!({ "days": days }))
            }),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateCostQuery {
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "car-rental-backend");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _) = get_json(create_test_app(), "/motorcycles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_calculate_cost_query_parses_iso_dates() {
    let (status, body) = get_json(
        create_test_app(),
        "/rentals/calculate-cost?startDate=2026-08-23&endDate=2026-08-25",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 3);
}

#[tokio::test]
async fn test_calculate_cost_query_rejects_malformed_date() {
    let (status, _) = get_json(
        create_test_app(),
        "/rentals/calculate-cost?startDate=23-08-2026&endDate=2026-08-25",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
