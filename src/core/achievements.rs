// src/core/achievements.rs

use chrono::Utc;

use crate::models::achievement::{Achievement, AchievementTemplate, AchievementType, Rarity};
use crate::models::module::Difficulty;
use crate::models::user::User;

/// The static template catalog, evaluated in order. Predicates are
/// independent and not mutually exclusive.
pub fn achievement_templates() -> &'static [AchievementTemplate] {
    static TEMPLATES: [AchievementTemplate; 9] = [
        AchievementTemplate {
            id: "first_module",
            achievement_type: AchievementType::Completion,
            title: "Getting Started",
            description: "Complete your first learning module",
            icon: "play",
            points: 10,
            rarity: Rarity::Common,
            condition: |user| user.completed_modules.len() >= 1,
        },
        AchievementTemplate {
            id: "five_modules",
            achievement_type: AchievementType::Completion,
            title: "Making Progress",
            description: "Complete 5 learning modules",
            icon: "target",
            points: 50,
            rarity: Rarity::Common,
            condition: |user| user.completed_modules.len() >= 5,
        },
        AchievementTemplate {
            id: "ten_modules",
            achievement_type: AchievementType::Completion,
            title: "Dedicated Learner",
            description: "Complete 10 learning modules",
            icon: "trophy",
            points: 100,
            rarity: Rarity::Rare,
            condition: |user| user.completed_modules.len() >= 10,
        },
        AchievementTemplate {
            id: "three_day_streak",
            achievement_type: AchievementType::Streak,
            title: "Consistent Learner",
            description: "Learn for 3 days in a row",
            icon: "flame",
            points: 30,
            rarity: Rarity::Common,
            condition: |user| learning_streak(user) >= 3,
        },
        AchievementTemplate {
            id: "week_streak",
            achievement_type: AchievementType::Streak,
            title: "Week Warrior",
            description: "Learn for 7 days in a row",
            icon: "zap",
            points: 100,
            rarity: Rarity::Rare,
            condition: |user| learning_streak(user) >= 7,
        },
        AchievementTemplate {
            id: "level_intermediate",
            achievement_type: AchievementType::LevelUp,
            title: "Skill Upgrade",
            description: "Reach intermediate level",
            icon: "trending-up",
            points: 75,
            rarity: Rarity::Rare,
            condition: |user| user.skill_level == Difficulty::Intermediate,
        },
        AchievementTemplate {
            id: "level_advanced",
            achievement_type: AchievementType::LevelUp,
            title: "Expert Status",
            description: "Reach advanced level",
            icon: "crown",
            points: 150,
            rarity: Rarity::Epic,
            condition: |user| user.skill_level == Difficulty::Advanced,
        },
        AchievementTemplate {
            id: "half_path_complete",
            achievement_type: AchievementType::Milestone,
            title: "Halfway There",
            description: "Complete 50% of your learning path",
            icon: "activity",
            points: 200,
            rarity: Rarity::Epic,
            condition: |user| match &user.current_path {
                Some(path) if !path.modules.is_empty() => {
                    user.completed_modules.len() as f64 / path.modules.len() as f64 >= 0.5
                }
                _ => false,
            },
        },
        AchievementTemplate {
            id: "path_complete",
            achievement_type: AchievementType::Milestone,
            title: "Path Master",
            description: "Complete your entire learning path",
            icon: "star",
            points: 500,
            rarity: Rarity::Legendary,
            condition: |user| match &user.current_path {
                Some(path) if !path.modules.is_empty() => {
                    user.completed_modules.len() >= path.modules.len()
                }
                _ => false,
            },
        },
    ];
    &TEMPLATES
}

/// Daily-activity streak. Approximated from the completion count until
/// per-day activity is tracked, capped at a week.
fn learning_streak(user: &User) -> usize {
    user.completed_modules.len().min(7)
}

/// Returns every template whose predicate holds and whose id the user has
/// not unlocked yet, stamped with the current time. Several badges can
/// unlock in one call when a single event crosses multiple thresholds.
/// Never mutates the user; the caller persists the result.
pub fn check_for_new_achievements(user: &User, previous_completed: &[String]) -> Vec<Achievement> {
    let unlocked = user.unlocked_achievement_ids();
    tracing::debug!(
        user_id = user.id,
        previously_completed = previous_completed.len(),
        "evaluating achievement templates"
    );

    let now = Utc::now();
    achievement_templates()
        .iter()
        .filter(|template| !unlocked.contains(&template.id) && (template.condition)(user))
        .map(|template| Achievement {
            id: template.id.to_string(),
            achievement_type: template.achievement_type,
            title: template.title.to_string(),
            description: template.description.to_string(),
            icon: template.icon.to_string(),
            points: template.points,
            rarity: template.rarity,
            unlocked_at: now,
        })
        .collect()
}

/// Total points is a plain fold over the unlocked list; callers persist it.
pub fn calculate_total_points(achievements: &[Achievement]) -> i64 {
    achievements.iter().map(|a| a.points).sum()
}
