use crate::domain::{models::movie::Movie, ports::MovieRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMovieRepo {
    pool: PgPool,
}

impl PostgresMovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepo {
    async fn create(&self, movie: &Movie) -> Result<Movie, AppError> {
        sqlx::query_as::<_, Movie>(
            r#"INSERT INTO movies (id, title, description, release_date, duration_min, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
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
            "SELECT * FROM movies WHERE id = $1"
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
            r#"UPDATE movies SET title=$1, description=$2, release_date=$3, duration_min=$4 WHERE id=$5 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
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
