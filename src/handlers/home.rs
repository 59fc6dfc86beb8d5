use axum::response::IntoResponse;
use chrono::Local;

pub async fn home() -> impl IntoResponse {
    format!("Welcome! Time now: {}", Local::now())
}
