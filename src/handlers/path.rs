// src/handlers/path.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{
    core::{achievements, path_adapter},
    error::AppError,
    state::AppState,
    utils::jwt::Claims,
};

/// Returns the user's current learning path.
pub async fn get_path(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let path = state
        .store
        .load_path(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("No learning path yet".to_string()))?;

    Ok(Json(path))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteModuleRequest {
    pub module_id: String,
}

/// Marks a module complete (idempotent), recomputes path progress, and
/// evaluates achievements in the same user action.
pub async fn complete_module(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CompleteModuleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let previous_completed = user.completed_modules.clone();
    if !user.completed_modules.contains(&req.module_id) {
        user.completed_modules.push(req.module_id.clone());
    }

    if let Some(mut path) = user.current_path.take() {
        path.recompute_progress(&user.completed_modules);
        user.current_path = Some(state.store.save_path(&path).await?);
    }

    let new_achievements = achievements::check_for_new_achievements(&user, &previous_completed);
    if !new_achievements.is_empty() {
        tracing::info!(
            user_id = user.id,
            unlocked = new_achievements.len(),
            "new achievements unlocked"
        );
    }
    user.achievements.extend(new_achievements.iter().cloned());
    user.total_points = achievements::calculate_total_points(&user.achievements);

    state.store.save_user(&user).await?;

    Ok(Json(json!({
        "user": user,
        "newAchievements": new_achievements,
    })))
}

/// Re-plans the stored path against the user's progress: completed modules
/// drop out and, past the stretch threshold, harder content is appended.
/// Appends a history entry and recomputes progress.
pub async fn adapt_path(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let mut path = user
        .current_path
        .ok_or(AppError::NotFound("No learning path yet".to_string()))?;

    let track_tags = state.catalog.track_tags(&user.track);
    let adapted = path_adapter::adapt_learning_path(
        &path.modules,
        &user.completed_modules,
        user.skill_level,
        track_tags,
        state.catalog.modules(),
    );

    let kept = adapted
        .iter()
        .filter(|m| path.modules.iter().any(|p| p.id == m.id))
        .count();
    let removed = path.modules.len() - kept;
    let added = adapted.len() - kept;
    path.adaptation_history.push(format!(
        "{}: removed {} completed module(s), added {} advanced module(s)",
        Utc::now().to_rfc3339(),
        removed,
        added
    ));

    path.modules = adapted;
    path.recompute_progress(&user.completed_modules);

    let saved = state.store.save_path(&path).await?;

    Ok(Json(saved))
}
