// src/models/path.rs

use serde::{Deserialize, Serialize};

use crate::models::module::LearningModule;

/// The user's materialized, ordered module sequence. One per user,
/// replaced wholesale on regeneration and mutated in place by the adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: i64,
    pub user_id: i64,
    pub track: String,
    pub modules: Vec<LearningModule>,
    /// Percentage of the current module list already completed.
    /// Recomputed on every completion and adaptation.
    pub progress: f64,
    pub adaptation_history: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl LearningPath {
    /// Recomputes `progress` as the share of the current module list whose
    /// ids appear in `completed`. An empty path reports 0.
    pub fn recompute_progress(&mut self, completed: &[String]) {
        if self.modules.is_empty() {
            self.progress = 0.0;
            return;
        }
        let done = self
            .modules
            .iter()
            .filter(|m| completed.contains(&m.id))
            .count();
        self.progress = (done as f64 / self.modules.len() as f64) * 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::module::{Difficulty, ModuleType};

    fn module(id: &str) -> LearningModule {
        LearningModule {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            module_type: ModuleType::Internal,
            url: None,
            estimated_time: 60,
            difficulty: Difficulty::Beginner,
            prerequisites: vec![],
            tags: vec![],
            source: None,
        }
    }

    fn path(modules: Vec<LearningModule>) -> LearningPath {
        LearningPath {
            id: 1,
            user_id: 1,
            track: "fullstack".to_string(),
            modules,
            progress: 0.0,
            adaptation_history: vec![],
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn progress_counts_only_modules_in_path() {
        let mut p = path(vec![module("a"), module("b"), module("c"), module("d")]);
        p.recompute_progress(&["a".to_string(), "not-in-path".to_string()]);
        assert_eq!(p.progress, 25.0);
    }

    #[test]
    fn progress_of_empty_path_is_zero() {
        let mut p = path(vec![]);
        p.recompute_progress(&["a".to_string()]);
        assert_eq!(p.progress, 0.0);
    }
}
