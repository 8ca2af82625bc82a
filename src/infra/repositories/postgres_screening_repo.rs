use crate::domain::{
    models::screening::{NewScreening, Screening, ScreeningDetail},
    ports::ScreeningRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresScreeningRepo {
    pool: PgPool,
}

impl PostgresScreeningRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScreeningRepository for PostgresScreeningRepo {
    async fn create(&self, screening: &NewScreening) -> Result<Screening, AppError> {
        sqlx::query_as::<_, Screening>(
            r#"INSERT INTO screenings (id, movie_id, hall_id, starts_at, duration_min, end_time, spectators_count, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#
        )
            .bind(Uuid::new_v4().to_string())
            .bind(&screening.movie_id)
            .bind(&screening.hall_id)
            .bind(screening.starts_at)
            .bind(screening.duration_min)
            .bind(&screening.end_time)
            .bind(screening.spectators_count)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Screening>, AppError> {
        sqlx::query_as::<_, Screening>(
            "SELECT * FROM screenings WHERE id = $1"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Screening>, AppError> {
        sqlx::query_as::<_, Screening>(
            "SELECT * FROM screenings ORDER BY starts_at ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_detailed(&self, date: Option<NaiveDate>) -> Result<Vec<ScreeningDetail>, AppError> {
        let rows = match date {
            Some(date) => {
                sqlx::query_as::<_, ScreeningDetail>(
                    r#"SELECT s.id, s.movie_id, s.hall_id, s.starts_at, s.duration_min,
                              s.end_time, s.spectators_count,
                              m.title AS movie_title, h.name AS hall_name
                       FROM screenings s
                       LEFT JOIN movies m ON m.id = s.movie_id
                       LEFT JOIN halls h ON h.id = s.hall_id
                       WHERE s.starts_at::date = $1
                       ORDER BY s.starts_at ASC"#
                )
                    .bind(date)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, ScreeningDetail>(
                    r#"SELECT s.id, s.movie_id, s.hall_id, s.starts_at, s.duration_min,
                              s.end_time, s.spectators_count,
                              m.title AS movie_title, h.name AS hall_name
                       FROM screenings s
                       LEFT JOIN movies m ON m.id = s.movie_id
                       LEFT JOIN halls h ON h.id = s.hall_id
                       ORDER BY s.starts_at ASC"#
                )
                    .fetch_all(&self.pool)
                    .await
            }
        };

        rows.map_err(AppError::Database)
    }

    async fn set_spectators(&self, id: &str, spectators_count: i32) -> Result<Screening, AppError> {
        sqlx::query_as::<_, Screening>(
            r#"UPDATE screenings SET spectators_count=$1 WHERE id=$2 RETURNING *"#
        )
            .bind(spectators_count)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Screening not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM screenings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Screening not found".into()));
        }
        Ok(())
    }
}
