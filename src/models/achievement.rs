// src/models/achievement.rs

use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementType {
    Completion,
    Streak,
    LevelUp,
    Milestone,
}

/// Display classification only; no numeric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// An unlocked badge. Immutable once unlocked; owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub points: i64,
    pub rarity: Rarity,
    pub unlocked_at: chrono::DateTime<chrono::Utc>,
}

/// A static unlock rule: metadata plus a pure predicate over user state.
pub struct AchievementTemplate {
    pub id: &'static str,
    pub achievement_type: AchievementType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: i64,
    pub rarity: Rarity,
    pub condition: fn(&User) -> bool,
}
