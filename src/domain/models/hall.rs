use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A projection hall. Halls carry no scheduling state of their own; they
/// only partition screenings for the overlap check.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub seats_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Hall {
    pub fn new(name: String, seats_count: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            seats_count,
            created_at: Utc::now(),
        }
    }
}
