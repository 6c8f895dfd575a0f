pub mod car_routes;
pub mod part_routes;
pub mod service_routes;

use axum::Router;

use crate::state::AppState;

/// The full REST surface, one nested router per entity.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/car", car_routes::create_car_router())
        .nest("/api/service", service_routes::create_service_router())
        .nest("/api/part", part_routes::create_part_router())
}
