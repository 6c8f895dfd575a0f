use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::service_controller::ServiceController;
use crate::dto::service_dto::{
    ServicePayload, ServiceResponse, UpdateServiceRequest, WorksheetResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/", post(create_service))
        .route("/bycar/:car_id", get(list_services_by_car))
        .route("/:id", get(get_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
        .route("/:id/worksheet", get(get_worksheet))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_services_by_car(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list_by_car(car_id).await?;
    Ok(Json(response))
}

async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.create(payload).await?;
    let location = format!("/api/service/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<StatusCode, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_worksheet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WorksheetResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.worksheet(id).await?;
    Ok(Json(response))
}
