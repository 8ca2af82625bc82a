use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A film in the catalog. `release_date` and `duration_min` are optional:
/// a movie without a release date cannot be week-number-validated, and a
/// movie without a stated duration falls back to the screening's own.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration_min: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(
        title: String,
        description: Option<String>,
        release_date: Option<NaiveDate>,
        duration_min: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            release_date,
            duration_min,
            created_at: Utc::now(),
        }
    }
}
