use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{hall, health, movie, screening};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Movie catalog
        .route("/api/v1/movies", get(movie::list_movies).post(movie::create_movie))
        .route("/api/v1/movies/{movie_id}", get(movie::get_movie).put(movie::update_movie).delete(movie::delete_movie))

        // Hall inventory
        .route("/api/v1/halls", get(hall::list_halls).post(hall::create_hall))
        .route("/api/v1/halls/{hall_id}", delete(hall::delete_hall))

        // Screening schedule
        .route("/api/v1/screenings", get(screening::list_screenings).post(screening::create_screening))
        .route("/api/v1/screenings/{screening_id}", get(screening::get_screening).delete(screening::delete_screening))
        .route("/api/v1/screenings/{screening_id}/spectators", put(screening::update_spectators))
        .route("/api/v1/screenings/{screening_id}/calendar.ics", get(screening::get_screening_calendar))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
