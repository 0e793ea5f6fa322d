// src/store/mod.rs

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{path::LearningPath, user::User};

pub mod sqlite;

pub use sqlite::SqliteStore;

/// The persistence boundary. The core stays a set of pure functions; every
/// read and write of user state goes through this interface, so handlers
/// are indifferent to what backs it.
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a new user and returns the stored record.
    /// Duplicate email is a `Conflict`.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, AppError>;

    /// Looks a user up by email, current path included.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Loads a user by id, current path included.
    async fn load_user(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Persists the mutable learning state of an existing user
    /// (track, skill level, completions, achievements, points).
    async fn save_user(&self, user: &User) -> Result<(), AppError>;

    /// Loads the user's learning path, if one exists.
    async fn load_path(&self, user_id: i64) -> Result<Option<LearningPath>, AppError>;

    /// Upserts the user's learning path (one per user) and returns the
    /// stored row with its server-assigned id.
    async fn save_path(&self, path: &LearningPath) -> Result<LearningPath, AppError>;
}
