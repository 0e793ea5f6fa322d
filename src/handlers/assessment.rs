// src/handlers/assessment.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    core::{achievements, path_generator, scorer},
    error::AppError,
    models::assessment::{PublicQuestion, SubmitAssessmentRequest},
    models::path::LearningPath,
    state::AppState,
    utils::jwt::Claims,
};

/// Returns the assessment for a track, answer key withheld.
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(track): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let assessment = state
        .catalog
        .assessment_for(&track)
        .ok_or_else(|| AppError::NotFound(format!("No assessment for track '{}'", track)))?;

    let questions: Vec<PublicQuestion> =
        assessment.questions.iter().map(PublicQuestion::from).collect();

    Ok(Json(json!({
        "id": assessment.id,
        "track": assessment.track,
        "questions": questions,
    })))
}

/// Scores a submission, folds the result into the user, generates a fresh
/// learning path for the track, and evaluates achievements. One call runs
/// the whole Scorer -> Generator -> Engine sequence.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(track): Path<String>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .store
        .load_user(claims.user_id())
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let assessment = state
        .catalog
        .assessment_for(&track)
        .ok_or_else(|| AppError::NotFound(format!("No assessment for track '{}'", track)))?;

    let result = scorer::analyze_assessment(&req.answers, &assessment.questions);
    tracing::info!(
        user_id = user.id,
        track = %track,
        score = result.score,
        skill_level = %result.skill_level,
        "assessment scored"
    );

    user.track = track.clone();
    user.skill_level = result.skill_level;
    user.assessment_completed = true;

    let track_tags = state.catalog.track_tags(&track);
    let modules =
        path_generator::generate_personalized_path(&result, track_tags, state.catalog.modules());

    let mut path = LearningPath {
        id: 0,
        user_id: user.id,
        track,
        modules,
        progress: 0.0,
        adaptation_history: vec![],
        created_at: Utc::now(),
    };
    path.recompute_progress(&user.completed_modules);
    let saved_path = state.store.save_path(&path).await?;
    user.current_path = Some(saved_path);

    let previous_completed = user.completed_modules.clone();
    let new_achievements = achievements::check_for_new_achievements(&user, &previous_completed);
    user.achievements.extend(new_achievements.iter().cloned());
    user.total_points = achievements::calculate_total_points(&user.achievements);

    state.store.save_user(&user).await?;

    Ok(Json(json!({
        "result": result,
        "path": user.current_path,
        "newAchievements": new_achievements,
        "user": user,
    })))
}
