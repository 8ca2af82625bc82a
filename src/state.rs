use std::sync::Arc;
use crate::domain::ports::{HallRepository, MovieRepository, ScreeningRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub movie_repo: Arc<dyn MovieRepository>,
    pub hall_repo: Arc<dyn HallRepository>,
    pub screening_repo: Arc<dyn ScreeningRepository>,
}
