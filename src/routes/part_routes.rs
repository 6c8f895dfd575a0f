use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::part_controller::PartController;
use crate::dto::part_dto::{PartPayload, PartResponse, UpdatePartRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_part_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parts))
        .route("/", post(create_part))
        .route("/byservice/:service_id", get(list_parts_by_service))
        .route("/:id", get(get_part))
        .route("/:id", put(update_part))
        .route("/:id", delete(delete_part))
}

async fn list_parts(State(state): State<AppState>) -> Result<Json<Vec<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PartResponse>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_parts_by_service(
    State(state): State<AppState>,
    Path(service_id): Path<i64>,
) -> Result<Json<Vec<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.list_by_service(service_id).await?;
    Ok(Json(response))
}

async fn create_part(
    State(state): State<AppState>,
    Json(payload): Json<PartPayload>,
) -> Result<impl IntoResponse, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.create(payload).await?;
    let location = format!("/api/part/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePartRequest>,
) -> Result<StatusCode, AppError> {
    let controller = PartController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let controller = PartController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
