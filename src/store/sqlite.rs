// src/store/sqlite.rs

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::module::Difficulty;
use crate::models::{path::LearningPath, user::User};
use crate::store::Store;

/// SQLite-backed store. User list fields and path modules are JSON text
/// columns, read and written whole.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    name: String,
    track: String,
    assessment_completed: bool,
    skill_level: String,
    completed_modules: String,
    achievements: String,
    total_points: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(sqlx::FromRow)]
struct PathRow {
    id: i64,
    user_id: i64,
    track: String,
    modules: String,
    progress: f64,
    adaptation_history: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self, current_path: Option<LearningPath>) -> Result<User, AppError> {
        let skill_level = Difficulty::from_str(&self.skill_level)
            .map_err(AppError::InternalServerError)?;
        Ok(User {
            id: self.id,
            email: self.email,
            password: self.password,
            name: self.name,
            track: self.track,
            assessment_completed: self.assessment_completed,
            skill_level,
            completed_modules: serde_json::from_str(&self.completed_modules)?,
            current_path,
            achievements: serde_json::from_str(&self.achievements)?,
            total_points: self.total_points,
            created_at: Some(self.created_at),
        })
    }
}

impl PathRow {
    fn into_path(self) -> Result<LearningPath, AppError> {
        Ok(LearningPath {
            id: self.id,
            user_id: self.user_id,
            track: self.track,
            modules: serde_json::from_str(&self.modules)?,
            progress: self.progress,
            adaptation_history: serde_json::from_str(&self.adaptation_history)?,
            created_at: self.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, email, password, name, track, assessment_completed, \
     skill_level, completed_modules, achievements, total_points, created_at";

const PATH_COLUMNS: &str =
    "id, user_id, track, modules, progress, adaptation_history, created_at";

#[async_trait]
impl Store for SqliteStore {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, password, name, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                AppError::Conflict(format!("User already exists with email '{}'", email))
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::from(e)
            }
        })?;

        row.into_user(None)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let path = self.load_path(row.id).await?;
                Ok(Some(row.into_user(path)?))
            }
            None => Ok(None),
        }
    }

    async fn load_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let path = self.load_path(row.id).await?;
                Ok(Some(row.into_user(path)?))
            }
            None => Ok(None),
        }
    }

    async fn save_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE users
             SET track = ?, assessment_completed = ?, skill_level = ?,
                 completed_modules = ?, achievements = ?, total_points = ?
             WHERE id = ?",
        )
        .bind(&user.track)
        .bind(user.assessment_completed)
        .bind(user.skill_level.to_string())
        .bind(serde_json::to_string(&user.completed_modules)?)
        .bind(serde_json::to_string(&user.achievements)?)
        .bind(user.total_points)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_path(&self, user_id: i64) -> Result<Option<LearningPath>, AppError> {
        let row = sqlx::query_as::<_, PathRow>(&format!(
            "SELECT {PATH_COLUMNS} FROM learning_paths WHERE user_id = ?"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PathRow::into_path).transpose()
    }

    async fn save_path(&self, path: &LearningPath) -> Result<LearningPath, AppError> {
        // One path per user: replace modules, progress, and history in
        // place and keep the original creation timestamp.
        let row = sqlx::query_as::<_, PathRow>(&format!(
            "INSERT INTO learning_paths
                 (user_id, track, modules, progress, adaptation_history, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET
                 track = excluded.track,
                 modules = excluded.modules,
                 progress = excluded.progress,
                 adaptation_history = excluded.adaptation_history
             RETURNING {PATH_COLUMNS}"
        ))
        .bind(path.user_id)
        .bind(&path.track)
        .bind(serde_json::to_string(&path.modules)?)
        .bind(path.progress)
        .bind(serde_json::to_string(&path.adaptation_history)?)
        .bind(path.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert learning path: {:?}", e);
            AppError::from(e)
        })?;

        row.into_path()
    }
}
