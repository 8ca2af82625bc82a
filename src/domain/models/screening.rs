use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted screening. `starts_at` is a naive local instant; `end_time`
/// is the derived "HH:MM" time of day stored alongside it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Screening {
    pub id: String,
    pub movie_id: String,
    pub hall_id: String,
    pub starts_at: NaiveDateTime,
    pub duration_min: i32,
    pub end_time: String,
    pub spectators_count: i32,
    pub created_at: DateTime<Utc>,
}

/// A proposed screening, before admission. The duration is the movie's
/// stated duration; callers only supply their own when the movie has none.
#[derive(Debug, Clone)]
pub struct ScreeningCandidate {
    pub movie_id: String,
    pub hall_id: String,
    pub starts_at: NaiveDateTime,
    pub duration_min: i32,
}

/// A validated screening ready to persist. Carries no identity; the
/// repository assigns one at insert.
#[derive(Debug, Clone)]
pub struct NewScreening {
    pub movie_id: String,
    pub hall_id: String,
    pub starts_at: NaiveDateTime,
    pub duration_min: i32,
    pub end_time: String,
    pub spectators_count: i32,
}

impl NewScreening {
    /// Materializes the record for a candidate that already passed
    /// validation. The end time wraps around midnight without a date carry;
    /// the operating-hours check rejects midnight-crossing candidates, so a
    /// wrapped value never reaches the store through admission.
    pub fn from_candidate(candidate: &ScreeningCandidate, spectators_count: Option<i32>) -> Self {
        let end = candidate.starts_at.time() + Duration::minutes(candidate.duration_min as i64);

        Self {
            movie_id: candidate.movie_id.clone(),
            hall_id: candidate.hall_id.clone(),
            starts_at: candidate.starts_at,
            duration_min: candidate.duration_min,
            end_time: end.format("%H:%M").to_string(),
            spectators_count: spectators_count.unwrap_or(0),
        }
    }
}

/// Listing shape with the joined movie title and hall name, the way the
/// admin calendar consumes screenings.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ScreeningDetail {
    pub id: String,
    pub movie_id: String,
    pub hall_id: String,
    pub starts_at: NaiveDateTime,
    pub duration_min: i32,
    pub end_time: String,
    pub spectators_count: i32,
    pub movie_title: Option<String>,
    pub hall_name: Option<String>,
}
