use crate::domain::models::{
    hall::Hall,
    movie::Movie,
    screening::{NewScreening, Screening, ScreeningDetail},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: &Movie) -> Result<Movie, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, AppError>;
    async fn list(&self) -> Result<Vec<Movie>, AppError>;
    async fn update(&self, movie: &Movie) -> Result<Movie, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait HallRepository: Send + Sync {
    async fn create(&self, hall: &Hall) -> Result<Hall, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Hall>, AppError>;
    async fn list(&self) -> Result<Vec<Hall>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    /// Persists a validated screening and assigns its identity.
    async fn create(&self, screening: &NewScreening) -> Result<Screening, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Screening>, AppError>;
    async fn list(&self) -> Result<Vec<Screening>, AppError>;
    async fn list_detailed(&self, date: Option<NaiveDate>) -> Result<Vec<ScreeningDetail>, AppError>;
    async fn set_spectators(&self, id: &str, spectators_count: i32) -> Result<Screening, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
