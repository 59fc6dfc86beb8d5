use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

pub async fn list_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let documents = state.db.fetch_all().await?;
    Ok(Json(documents))
}

pub async fn insert_data(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    // MongoDB stores objects only; arrays and scalars are rejected here rather
    // than passed through to the driver.
    let document = mongodb::bson::to_document(&body).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Request body must be a JSON object: {}", e))
    })?;

    state.db.insert(document).await?;

    Ok((StatusCode::CREATED, Json(json!({ "msg": "Inserted" }))))
}
