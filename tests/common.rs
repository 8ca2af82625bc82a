use screening_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_hall_repo::SqliteHallRepo,
        sqlite_movie_repo::SqliteMovieRepo,
        sqlite_screening_repo::SqliteScreeningRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            movie_repo: Arc::new(SqliteMovieRepo::new(pool.clone())),
            hall_repo: Arc::new(SqliteHallRepo::new(pool.clone())),
            screening_repo: Arc::new(SqliteScreeningRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(payload) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(payload.to_string())
            }
            None => Body::empty(),
        };

        let response = self.router.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn request_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self.router.clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn create_movie(&self, payload: &Value) -> String {
        let (status, body) = self.request("POST", "/api/v1/movies", Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "movie creation failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_hall(&self, name: &str, seats_count: i32) -> String {
        let payload = serde_json::json!({ "name": name, "seats_count": seats_count });
        let (status, body) = self.request("POST", "/api/v1/halls", Some(&payload)).await;
        assert_eq!(status, StatusCode::OK, "hall creation failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn schedule(&self, movie_id: &str, hall_id: &str, date: &str, time: &str) -> (StatusCode, Value) {
        let payload = serde_json::json!({
            "movie_id": movie_id,
            "hall_id": hall_id,
            "date": date,
            "time": time,
        });
        self.request("POST", "/api/v1/screenings", Some(&payload)).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
