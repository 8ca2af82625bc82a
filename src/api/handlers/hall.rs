use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateHallRequest;
use crate::domain::models::hall::Hall;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_hall(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateHallRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Hall name must not be empty".into()));
    }
    if payload.seats_count <= 0 {
        return Err(AppError::Validation("Hall seat count must be positive".into()));
    }

    let hall = Hall::new(payload.name, payload.seats_count);
    let created = state.hall_repo.create(&hall).await?;
    info!("Created hall: {} with {} seats", created.name, created.seats_count);
    Ok(Json(created))
}

pub async fn list_halls(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let halls = state.hall_repo.list().await?;
    Ok(Json(halls))
}

pub async fn delete_hall(
    State(state): State<Arc<AppState>>,
    Path(hall_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.hall_repo.delete(&hall_id).await?;
    info!("Hall deleted: {}", hall_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
