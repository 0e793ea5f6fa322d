// src/handlers/user.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{path::LearningPath, user::UpdateUserRequest},
    state::AppState,
    utils::jwt::Claims,
};

/// Returns the current user, current path embedded.
pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Partial update of the user's learning state. Only the fields present in
/// the payload are touched; a supplied path replaces the stored one.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    if let Some(track) = payload.track {
        user.track = track;
    }
    if let Some(completed) = payload.assessment_completed {
        user.assessment_completed = completed;
    }
    if let Some(skill_level) = payload.skill_level {
        user.skill_level = skill_level;
    }
    if let Some(completed_modules) = payload.completed_modules {
        user.completed_modules = completed_modules;
    }
    if let Some(achievements) = payload.achievements {
        user.achievements = achievements;
    }
    if let Some(total_points) = payload.total_points {
        user.total_points = total_points;
    }

    if let Some(path_update) = payload.current_path {
        let path = LearningPath {
            // Server-assigned on upsert; the incoming id is ignored.
            id: 0,
            user_id: user.id,
            track: path_update.track,
            modules: path_update.modules,
            progress: path_update.progress,
            adaptation_history: path_update.adaptation_history,
            created_at: user
                .current_path
                .as_ref()
                .map(|p| p.created_at)
                .unwrap_or_else(Utc::now),
        };
        user.current_path = Some(state.store.save_path(&path).await?);
    }

    state.store.save_user(&user).await?;

    Ok(Json(user))
}
