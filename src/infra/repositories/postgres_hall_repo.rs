use crate::domain::{models::hall::Hall, ports::HallRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresHallRepo {
    pool: PgPool,
}

impl PostgresHallRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HallRepository for PostgresHallRepo {
    async fn create(&self, hall: &Hall) -> Result<Hall, AppError> {
        sqlx::query_as::<_, Hall>(
            r#"INSERT INTO halls (id, name, seats_count, created_at)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#
        )
            .bind(&hall.id)
            .bind(&hall.name)
            .bind(hall.seats_count)
            .bind(hall.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hall>, AppError> {
        sqlx::query_as::<_, Hall>(
            "SELECT * FROM halls WHERE id = $1"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Hall>, AppError> {
        sqlx::query_as::<_, Hall>(
            "SELECT * FROM halls ORDER BY name ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM halls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hall not found".into()));
        }
        Ok(())
    }
}
