use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::ActivityDirectory;
use crate::services::activities_service::{self, SignupError};
use crate::web::error::AppError;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Result<Json<ActivityDirectory>, AppError> {
    let directory = activities_service::list_activities(&state.pool).await?;
    Ok(Json(directory))
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query?;
    let result =
        activities_service::sign_up(&state.pool, &activity_name, &query.email, state.capacity)
            .await;
    respond("signup", &activity_name, &query.email, result)
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query?;
    let result = activities_service::unregister(&state.pool, &activity_name, &query.email).await;
    respond("unregister", &activity_name, &query.email, result)
}

fn respond(
    action: &str,
    activity: &str,
    email: &str,
    result: Result<String, SignupError>,
) -> Result<Json<MessageResponse>, AppError> {
    match result {
        Ok(message) => {
            info!(action, activity, email, "participant updated");
            Ok(Json(MessageResponse { message }))
        }
        Err(SignupError::Database(e)) => Err(AppError::Database(e)),
        Err(e) => {
            warn!(action, activity, email, reason = %e, "participant update rejected");
            Err(e.into())
        }
    }
}
