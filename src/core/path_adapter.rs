// src/core/path_adapter.rs

use crate::models::module::{Difficulty, LearningModule};

/// How many advanced modules one adaptation may append.
const MAX_APPENDED_MODULES: usize = 3;

/// Completion share above which harder content gets appended.
const STRETCH_THRESHOLD: f64 = 0.6;

/// Adapts an existing path to the user's progress.
///
/// Removes every module whose id is in `completed`. When the completed
/// count divided by the original (pre-removal) path length exceeds 0.6 and
/// the user is not already advanced, appends up to three advanced catalog
/// modules matching the track tags. Appended candidates are deduplicated
/// against both the pre-removal path and the completed set, so repeated
/// adaptation calls cannot reintroduce a module the user already worked
/// through.
///
/// The caller owns `progress`, history, and skill-level updates.
pub fn adapt_learning_path(
    current_path: &[LearningModule],
    completed: &[String],
    skill_level: Difficulty,
    track_tags: &[String],
    catalog: &[LearningModule],
) -> Vec<LearningModule> {
    let mut remaining: Vec<LearningModule> = current_path
        .iter()
        .filter(|m| !completed.contains(&m.id))
        .cloned()
        .collect();

    if current_path.is_empty() {
        return remaining;
    }

    let completion_rate = completed.len() as f64 / current_path.len() as f64;
    if completion_rate > STRETCH_THRESHOLD && skill_level != Difficulty::Advanced {
        let advanced: Vec<&LearningModule> = catalog
            .iter()
            .filter(|m| {
                m.difficulty == Difficulty::Advanced
                    && m.matches_tags(track_tags)
                    && !current_path.iter().any(|existing| existing.id == m.id)
                    && !completed.contains(&m.id)
            })
            .take(MAX_APPENDED_MODULES)
            .collect();

        tracing::debug!(appended = advanced.len(), "appending advanced modules");
        remaining.extend(advanced.into_iter().cloned());
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::module::ModuleType;

    fn module(id: &str, difficulty: Difficulty, module_tags: &[&str]) -> LearningModule {
        LearningModule {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            module_type: ModuleType::Internal,
            url: None,
            estimated_time: 60,
            difficulty,
            prerequisites: vec![],
            tags: module_tags.iter().map(|s| s.to_string()).collect(),
            source: None,
        }
    }

    fn ids(modules: &[LearningModule]) -> Vec<&str> {
        modules.iter().map(|m| m.id.as_str()).collect()
    }

    fn completed(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn track_tags() -> Vec<String> {
        vec!["rust".to_string()]
    }

    #[test]
    fn removes_all_completed_modules() {
        let path = vec![
            module("a", Difficulty::Beginner, &["rust"]),
            module("b", Difficulty::Beginner, &["rust"]),
            module("c", Difficulty::Beginner, &["rust"]),
        ];
        let adapted = adapt_learning_path(
            &path,
            &completed(&["a", "c"]),
            Difficulty::Beginner,
            &track_tags(),
            &[],
        );
        assert_eq!(ids(&adapted), vec!["b"]);
    }

    #[test]
    fn at_sixty_percent_nothing_is_appended() {
        // 3 of 5 completed = exactly 0.6, which does not exceed the threshold.
        let path: Vec<LearningModule> = (0..5)
            .map(|i| module(&format!("m{}", i), Difficulty::Beginner, &["rust"]))
            .collect();
        let catalog = vec![module("adv", Difficulty::Advanced, &["rust"])];
        let adapted = adapt_learning_path(
            &path,
            &completed(&["m0", "m1", "m2"]),
            Difficulty::Beginner,
            &track_tags(),
            &catalog,
        );
        assert_eq!(ids(&adapted), vec!["m3", "m4"]);
    }

    #[test]
    fn above_sixty_percent_appends_up_to_three_advanced_modules() {
        let path: Vec<LearningModule> = (0..5)
            .map(|i| module(&format!("m{}", i), Difficulty::Beginner, &["rust"]))
            .collect();
        let catalog = vec![
            module("adv1", Difficulty::Advanced, &["rust"]),
            module("adv2", Difficulty::Advanced, &["rust"]),
            module("adv3", Difficulty::Advanced, &["rust"]),
            module("adv4", Difficulty::Advanced, &["rust"]),
            module("adv-off-track", Difficulty::Advanced, &["cooking"]),
            module("easy", Difficulty::Beginner, &["rust"]),
        ];
        let adapted = adapt_learning_path(
            &path,
            &completed(&["m0", "m1", "m2", "m3"]),
            Difficulty::Intermediate,
            &track_tags(),
            &catalog,
        );
        assert_eq!(ids(&adapted), vec!["m4", "adv1", "adv2", "adv3"]);
    }

    #[test]
    fn advanced_users_get_no_appended_modules() {
        let path: Vec<LearningModule> = (0..4)
            .map(|i| module(&format!("m{}", i), Difficulty::Beginner, &["rust"]))
            .collect();
        let catalog = vec![module("adv", Difficulty::Advanced, &["rust"])];
        let adapted = adapt_learning_path(
            &path,
            &completed(&["m0", "m1", "m2"]),
            Difficulty::Advanced,
            &track_tags(),
            &catalog,
        );
        assert_eq!(ids(&adapted), vec!["m3"]);
    }

    #[test]
    fn does_not_reappend_modules_in_path_or_already_completed() {
        // adv1 sits uncompleted in the path from a previous adaptation;
        // adv2 was appended earlier and since completed.
        let path = vec![
            module("m0", Difficulty::Beginner, &["rust"]),
            module("m1", Difficulty::Beginner, &["rust"]),
            module("m2", Difficulty::Beginner, &["rust"]),
            module("adv1", Difficulty::Advanced, &["rust"]),
        ];
        let catalog = vec![
            module("adv1", Difficulty::Advanced, &["rust"]),
            module("adv2", Difficulty::Advanced, &["rust"]),
            module("adv3", Difficulty::Advanced, &["rust"]),
        ];
        let adapted = adapt_learning_path(
            &path,
            &completed(&["m0", "m1", "m2", "adv2"]),
            Difficulty::Intermediate,
            &track_tags(),
            &catalog,
        );
        assert_eq!(ids(&adapted), vec!["adv1", "adv3"]);
    }

    #[test]
    fn empty_path_stays_empty() {
        let adapted = adapt_learning_path(
            &[],
            &completed(&["a"]),
            Difficulty::Beginner,
            &track_tags(),
            &[],
        );
        assert!(adapted.is_empty());
    }
}
