//! End-to-end tests of the REST surface against an in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use car_service_shop::config::environment::EnvironmentConfig;
use car_service_shop::database;
use car_service_shop::routes;
use car_service_shop::state::AppState;

async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool")
}

async fn test_app() -> Router {
    let pool = memory_pool().await;
    database::initialize(&pool).await.expect("schema + seed");
    routes::api_router().with_state(AppState::new(pool, EnvironmentConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn seed_loads_expected_dataset() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/car", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cars = body_json(response).await;
    assert_eq!(cars.as_array().unwrap().len(), 5);

    let first = &cars[0];
    assert_eq!(first["licensePlate"], "ABC-123");
    assert_eq!(first["brand"], "Toyota");
    assert_eq!(first["model"], "Corolla");
    assert_eq!(first["yearOfManufacture"], 2018);

    let services = body_json(send(&app, Method::GET, "/api/service/bycar/1", None).await).await;
    assert_eq!(services.as_array().unwrap().len(), 2);

    let parts = body_json(send(&app, Method::GET, "/api/part/byservice/1", None).await).await;
    let parts = parts.as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["name"], "Motorolaj 5W-30");
    assert_eq!(parts[0]["quantity"], 5);
    assert_eq!(parts[1]["name"], "Olajszűrő");
    assert_eq!(parts[1]["quantity"], 1);
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate() {
    let pool = memory_pool().await;
    database::initialize(&pool).await.unwrap();
    database::initialize(&pool).await.unwrap();

    let app = routes::api_router().with_state(AppState::new(pool, EnvironmentConfig::default()));
    let cars = body_json(send(&app, Method::GET, "/api/car", None).await).await;
    assert_eq!(cars.as_array().unwrap().len(), 5);
    let parts = body_json(send(&app, Method::GET, "/api/part", None).await).await;
    assert_eq!(parts.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn create_car_round_trips() {
    let app = test_app().await;

    let payload = json!({
        "licensePlate": "MNO-987",
        "brand": "Skoda",
        "model": "Octavia",
        "yearOfManufacture": 2023,
        "dateOfTechnicalInspection": "2027-01-31",
        "mileage": 12000,
        "ownerName": "Kovács Béla"
    });

    let response = send(&app, Method::POST, "/api/car", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/car/{}", id));

    let fetched = body_json(send(&app, Method::GET, &location, None).await).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched["mileage"], 12000);
    assert_eq!(fetched["ownerName"], "Kovács Béla");
    // Null optionals stay off the wire.
    assert!(fetched.get("vin").is_none());
}

#[tokio::test]
async fn create_car_with_missing_mandatory_fields_is_rejected() {
    let app = test_app().await;

    let payload = json!({
        "licensePlate": "",
        "brand": "",
        "model": "Corolla",
        "yearOfManufacture": 2018,
        "dateOfTechnicalInspection": "2025-12-15"
    });

    let response = send(&app, Method::POST, "/api/car", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn replace_with_mismatched_id_is_rejected() {
    let app = test_app().await;

    let request = json!({
        "id": 2,
        "licensePlate": "ABC-123",
        "brand": "Toyota",
        "model": "Corolla",
        "yearOfManufacture": 2018,
        "dateOfTechnicalInspection": "2025-12-15"
    });

    let response = send(&app, Method::PUT, "/api/car/1", Some(request)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn replace_overwrites_the_whole_record() {
    let app = test_app().await;

    let request = json!({
        "id": 1,
        "licensePlate": "ABC-123",
        "brand": "Toyota",
        "model": "Corolla Touring",
        "yearOfManufacture": 2019,
        "dateOfTechnicalInspection": "2026-06-01",
        "mileage": 89000
    });

    let response = send(&app, Method::PUT, "/api/car/1", Some(request)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let car = body_json(send(&app, Method::GET, "/api/car/1", None).await).await;
    assert_eq!(car["model"], "Corolla Touring");
    assert_eq!(car["yearOfManufacture"], 2019);
    assert_eq!(car["mileage"], 89000);
}

#[tokio::test]
async fn replace_of_unknown_record_is_not_found() {
    let app = test_app().await;

    let request = json!({
        "id": 999,
        "licensePlate": "ZZZ-999",
        "brand": "Lada",
        "model": "Niva",
        "yearOfManufacture": 1995,
        "dateOfTechnicalInspection": "2026-06-01"
    });

    let response = send(&app, Method::PUT, "/api/car/999", Some(request)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_service_with_unknown_car_never_reaches_the_store() {
    let app = test_app().await;

    let payload = json!({
        "carId": 999,
        "workHours": 1.5,
        "workHourPrice": 15000.0,
        "serviceDate": "2025-11-01",
        "serviceDescription": "Izzócsere"
    });

    let response = send(&app, Method::POST, "/api/service", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let services = body_json(send(&app, Method::GET, "/api/service", None).await).await;
    assert_eq!(services.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_part_with_unknown_service_is_rejected() {
    let app = test_app().await;

    let payload = json!({
        "serviceId": 999,
        "partNumber": "BULB-001",
        "name": "H7 izzó",
        "quantity": 2,
        "netPrice": 1500.0
    });

    let response = send(&app, Method::POST, "/api/part", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_service_reports_estimated_cost() {
    let app = test_app().await;

    let payload = json!({
        "carId": 2,
        "workHours": 2.0,
        "workHourPrice": 15000.0,
        "serviceDate": "2025-11-01",
        "serviceDescription": "Olajcsere"
    });

    let response = send(&app, Method::POST, "/api/service", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["estimatedCost"], 30000.0);
}

#[tokio::test]
async fn part_reports_vat_derived_gross_price() {
    let app = test_app().await;

    let part = body_json(send(&app, Method::GET, "/api/part/1", None).await).await;
    assert_eq!(part["netPrice"], 8500.0);
    assert_eq!(part["vatRate"], 0.27);

    let gross = part["grossPrice"].as_f64().unwrap();
    assert!((gross - 10795.0).abs() < 1e-6);
}

#[tokio::test]
async fn delete_of_unknown_id_reports_not_found() {
    let app = test_app().await;

    for uri in ["/api/car/999", "/api/service/999", "/api/part/999"] {
        let response = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn deleting_a_car_cascades_to_services_and_parts() {
    let app = test_app().await;

    let response = send(&app, Method::DELETE, "/api/car/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, "/api/car/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let services = body_json(send(&app, Method::GET, "/api/service/bycar/1", None).await).await;
    assert!(services.as_array().unwrap().is_empty());

    // Parts of both of car 1's services are gone with them.
    for service_id in [1, 2] {
        let uri = format!("/api/part/byservice/{}", service_id);
        let parts = body_json(send(&app, Method::GET, &uri, None).await).await;
        assert!(parts.as_array().unwrap().is_empty(), "{}", uri);
    }
}

#[tokio::test]
async fn deleting_a_service_cascades_to_parts() {
    let app = test_app().await;

    let response = send(&app, Method::DELETE, "/api/service/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let parts = body_json(send(&app, Method::GET, "/api/part/byservice/1", None).await).await;
    assert!(parts.as_array().unwrap().is_empty());

    // The car itself is untouched.
    let response = send(&app, Method::GET, "/api/car/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn parts_by_unknown_service_is_an_empty_list() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/part/byservice/999", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn services_by_unknown_car_is_an_empty_list() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/service/bycar/999", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn worksheet_assembles_job_car_parts_and_totals() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/service/1/worksheet", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let worksheet = body_json(response).await;
    assert_eq!(worksheet["car"]["licensePlate"], "ABC-123");
    assert_eq!(worksheet["service"]["serviceDescription"], "Olajcsere és szűrőcsere");
    assert_eq!(worksheet["parts"].as_array().unwrap().len(), 2);
    assert_eq!(worksheet["laborCost"], 30000.0);

    // 5 × 8500 × 1.27 + 1 × 2500 × 1.27
    let parts_total = worksheet["partsTotal"].as_f64().unwrap();
    assert!((parts_total - 57150.0).abs() < 1e-6);

    let total = worksheet["totalCost"].as_f64().unwrap();
    assert!((total - 87150.0).abs() < 1e-6);
}

#[tokio::test]
async fn worksheet_of_unknown_service_is_not_found() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/api/service/999/worksheet", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_service_revalidates_parent() {
    let app = test_app().await;

    let request = json!({
        "id": 1,
        "carId": 999,
        "workHours": 2.0,
        "workHourPrice": 15000.0,
        "serviceDate": "2025-09-15",
        "serviceDescription": "Olajcsere és szűrőcsere"
    });

    let response = send(&app, Method::PUT, "/api/service/1", Some(request)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
