use axum::{extract::State, http::StatusCode, response::Redirect, Json};
use serde_json::Value;

use crate::web::error::AppError;
use crate::web::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn root_redirect_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "build": env!("ACTIVITY_SIGNUP_BUILD_ID"),
        })),
    ))
}
