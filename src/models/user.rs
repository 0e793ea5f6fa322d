// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{achievement::Achievement, module::Difficulty, path::LearningPath};

/// A registered learner. Mutated on every learning action; persisted
/// through the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    pub email: String,

    /// Argon2 password hash. Never serialized.
    #[serde(skip)]
    pub password: String,

    pub name: String,

    /// Selected track id; empty until the user picks one.
    pub track: String,

    pub assessment_completed: bool,

    pub skill_level: Difficulty,

    /// Ids of modules the user has finished, in completion order.
    pub completed_modules: Vec<String>,

    /// The user's current path, if one has been generated.
    pub current_path: Option<LearningPath>,

    pub achievements: Vec<Achievement>,

    pub total_points: i64,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    /// Ids of achievements already unlocked by this user.
    pub fn unlocked_achievement_ids(&self) -> Vec<&str> {
        self.achievements.iter().map(|a| a.id.as_str()).collect()
    }
}

/// DTO for registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password must be at least 6 characters long."
    ))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: String,
}

/// DTO for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 120))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// DTO for the partial user update (PUT /api/user). Absent fields are
/// left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub track: Option<String>,
    pub assessment_completed: Option<bool>,
    pub skill_level: Option<Difficulty>,
    pub completed_modules: Option<Vec<String>>,
    pub achievements: Option<Vec<Achievement>>,
    pub total_points: Option<i64>,
    pub current_path: Option<UpdatePathRequest>,
}

/// Path fields accepted inside the user update, mirroring the stored shape
/// minus the server-assigned id and timestamps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePathRequest {
    pub track: String,
    pub modules: Vec<crate::models::module::LearningModule>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub adaptation_history: Vec<String>,
}
