use crate::domain::{models::movie::Movie, ports::MovieRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMovieRepo {
    pool: SqlitePool,
}

impl SqliteMovieRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepo {
    async fn create(&self, movie: &Movie) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(
            r#"INSERT INTO movies (id, title, description, release_date, duration_min, created_at)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&movie.id)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(movie.release_date)
            .bind(movie.duration_min)
            .bind(movie.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, AppError> {
        sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies WHERE id = ?"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies ORDER BY title ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(
            r#"UPDATE movies SET title=?, description=?, release_date=?, duration_min=? WHERE id=? RETURNING *"#
        )
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(movie.release_date)
            .bind(movie.duration_min)
            .bind(&movie.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Movie not found".into()));
        }
        Ok(())
    }
}
