use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration_min: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration_min: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateHallRequest {
    pub name: String,
    pub seats_count: i32,
}

#[derive(Deserialize)]
pub struct CreateScreeningRequest {
    pub movie_id: String,
    pub hall_id: String,
    pub date: String,
    pub time: String,
    /// Only honored when the movie has no stated duration of its own.
    pub duration_min: Option<i32>,
    pub spectators_count: Option<i32>,
}

#[derive(Deserialize)]
pub struct ListScreeningsQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct UpdateSpectatorsRequest {
    pub spectators_count: i32,
}
