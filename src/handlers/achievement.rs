// src/handlers/achievement.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{error::AppError, state::AppState, utils::jwt::Claims};

/// Returns the user's unlocked achievements and total points.
pub async fn get_achievements(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({
        "achievements": user.achievements,
        "totalPoints": user.total_points,
    })))
}
