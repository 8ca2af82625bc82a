use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateScreeningRequest, ListScreeningsQuery, UpdateSpectatorsRequest};
use crate::domain::models::screening::{NewScreening, ScreeningCandidate};
use crate::domain::services::calendar::generate_ics;
use crate::domain::services::scheduling::{validate, RejectionReason};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_screening(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateScreeningRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;
    let time = NaiveTime::parse_from_str(&payload.time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;
    let starts_at = date.and_time(time);

    state.hall_repo.find_by_id(&payload.hall_id).await?
        .ok_or(AppError::NotFound("Hall not found".into()))?;

    if payload.spectators_count.is_some_and(|n| n < 0) {
        return Err(AppError::Validation("Spectator count must not be negative".into()));
    }

    // Snapshot for the admission decision. The validator is a pure function
    // over these two lists; nothing is fetched or written while it runs.
    let movies = state.movie_repo.list().await?;
    let existing = state.screening_repo.list().await?;

    // The screening runs as long as the movie says it does. A caller-supplied
    // duration only applies when the movie has no stated duration.
    let duration_min = match movies.iter().find(|m| m.id == payload.movie_id) {
        Some(movie) => match movie.duration_min.or(payload.duration_min) {
            Some(d) if d > 0 => d,
            Some(_) => return Err(AppError::Validation("Screening duration must be positive".into())),
            None => return Err(AppError::Validation("Movie has no stated duration and none was provided".into())),
        },
        // Unknown movie still goes through the validator so the rejection
        // reason is uniform with every other caller.
        None => payload.duration_min.unwrap_or(0),
    };

    let candidate = ScreeningCandidate {
        movie_id: payload.movie_id,
        hall_id: payload.hall_id,
        starts_at,
        duration_min,
    };

    validate(&candidate, &movies, &existing).map_err(|reason| {
        warn!("Screening rejected for hall {} at {}: {}", candidate.hall_id, starts_at, reason);
        match reason {
            RejectionReason::MovieNotFound => AppError::NotFound(reason.to_string()),
            RejectionReason::OutsideOperatingHours => AppError::Validation(reason.to_string()),
            RejectionReason::WeeklyCapExceeded | RejectionReason::HallOverlap => {
                AppError::Conflict(reason.to_string())
            }
        }
    })?;

    let screening = NewScreening::from_candidate(&candidate, payload.spectators_count);
    let created = state.screening_repo.create(&screening).await?;

    info!("Screening scheduled: {} in hall {} at {}", created.id, created.hall_id, created.starts_at);
    Ok(Json(created))
}

pub async fn list_screenings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListScreeningsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let screenings = state.screening_repo.list_detailed(query.date).await?;
    Ok(Json(screenings))
}

pub async fn get_screening(
    State(state): State<Arc<AppState>>,
    Path(screening_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let screening = state.screening_repo.find_by_id(&screening_id).await?
        .ok_or(AppError::NotFound("Screening not found".into()))?;
    Ok(Json(screening))
}

pub async fn update_spectators(
    State(state): State<Arc<AppState>>,
    Path(screening_id): Path<String>,
    Json(payload): Json<UpdateSpectatorsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.spectators_count < 0 {
        return Err(AppError::Validation("Spectator count must not be negative".into()));
    }

    let updated = state.screening_repo.set_spectators(&screening_id, payload.spectators_count).await?;
    info!("Screening {} now has {} spectators", updated.id, updated.spectators_count);
    Ok(Json(updated))
}

pub async fn delete_screening(
    State(state): State<Arc<AppState>>,
    Path(screening_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.screening_repo.delete(&screening_id).await?;
    info!("Screening cancelled: {}", screening_id);
    Ok(Json(serde_json::json!({"status": "cancelled"})))
}

pub async fn get_screening_calendar(
    State(state): State<Arc<AppState>>,
    Path(screening_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let screening = state.screening_repo.find_by_id(&screening_id).await?
        .ok_or(AppError::NotFound("Screening not found".into()))?;
    let movie = state.movie_repo.find_by_id(&screening.movie_id).await?
        .ok_or(AppError::NotFound("Movie not found".into()))?;

    let ics = generate_ics(&movie, &screening);
    Ok(([(header::CONTENT_TYPE, "text/calendar")], ics))
}
