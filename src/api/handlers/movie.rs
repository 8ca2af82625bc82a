use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateMovieRequest, UpdateMovieRequest};
use crate::domain::models::movie::Movie;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Movie title must not be empty".into()));
    }
    if payload.duration_min.is_some_and(|d| d <= 0) {
        return Err(AppError::Validation("Movie duration must be positive".into()));
    }

    let movie = Movie::new(
        payload.title,
        payload.description,
        payload.release_date,
        payload.duration_min,
    );
    let created = state.movie_repo.create(&movie).await?;
    info!("Created movie: {} ({})", created.title, created.id);
    Ok(Json(created))
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.movie_repo.list().await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.movie_repo.find_by_id(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    Ok(Json(movie))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut movie = state.movie_repo.find_by_id(&movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Movie title must not be empty".into()));
        }
        movie.title = title;
    }
    if let Some(description) = payload.description {
        movie.description = Some(description);
    }
    if let Some(release_date) = payload.release_date {
        movie.release_date = Some(release_date);
    }
    if let Some(duration_min) = payload.duration_min {
        if duration_min <= 0 {
            return Err(AppError::Validation("Movie duration must be positive".into()));
        }
        movie.duration_min = Some(duration_min);
    }

    let updated = state.movie_repo.update(&movie).await?;
    info!("Movie updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.movie_repo.delete(&movie_id).await?;
    info!("Movie deleted: {}", movie_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
