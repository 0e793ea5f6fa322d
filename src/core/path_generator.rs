// src/core/path_generator.rs

use crate::models::assessment::AssessmentResult;
use crate::models::module::{Difficulty, LearningModule, ModuleType};

/// Hard cap on generated path length.
const MAX_PATH_MODULES: usize = 12;

/// Builds a personalized module sequence for one track.
///
/// Steps:
/// 1. keep catalog modules whose tags intersect the track tag set,
/// 2. gate internal modules by the user's skill level (beginners see only
///    beginner modules, intermediates beginner+intermediate, advanced all),
/// 3. insert each gated module's direct prerequisites before it (resolved
///    within the internal set, one level deep only; a prerequisite's own
///    prerequisites are not pulled in),
/// 4. keep external modules that either touch a recommended topic keyword
///    (case-insensitive substring over tags) or sit at a compatible
///    difficulty; the difficulty arm is always true above beginner,
/// 5. interleave two internal modules per external one,
/// 6. truncate to 12 entries.
///
/// Pure function; an empty catalog or unknown track yields an empty path.
pub fn generate_personalized_path(
    result: &AssessmentResult,
    track_tags: &[String],
    catalog: &[LearningModule],
) -> Vec<LearningModule> {
    let track_modules: Vec<&LearningModule> = catalog
        .iter()
        .filter(|m| m.matches_tags(track_tags))
        .collect();

    let internal_modules: Vec<&LearningModule> = track_modules
        .iter()
        .copied()
        .filter(|m| m.module_type == ModuleType::Internal)
        .collect();
    let external_modules: Vec<&LearningModule> = track_modules
        .iter()
        .copied()
        .filter(|m| m.module_type == ModuleType::External)
        .collect();

    tracing::debug!(
        internal = internal_modules.len(),
        external = external_modules.len(),
        "filtered catalog by track tags"
    );

    // Skill-level gate over internal modules.
    let starting_modules: Vec<&LearningModule> = internal_modules
        .iter()
        .copied()
        .filter(|m| m.difficulty <= result.skill_level)
        .collect();

    // Dependency-ordered insertion. Only direct prerequisites are resolved;
    // this is intentionally not a transitive topological sort.
    let mut ordered: Vec<&LearningModule> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for &module in &starting_modules {
        for prereq_id in &module.prerequisites {
            if seen.contains(&prereq_id.as_str()) {
                continue;
            }
            if let Some(prereq) = internal_modules.iter().copied().find(|m| &m.id == prereq_id) {
                ordered.push(prereq);
                seen.push(&prereq.id);
            }
        }
        if !seen.contains(&module.id.as_str()) {
            ordered.push(module);
            seen.push(&module.id);
        }
    }

    // External resources: address a weakness, or just be at a reachable
    // difficulty. The second arm makes the filter a no-op for intermediate
    // and advanced users.
    let relevant_externals: Vec<&LearningModule> = external_modules
        .iter()
        .copied()
        .filter(|m| {
            let addresses_weakness = result.recommended_topics.iter().any(|topic| {
                m.tags.iter().any(|tag| tag.to_lowercase().contains(topic))
            });
            let appropriate_difficulty = match result.skill_level {
                Difficulty::Beginner => m.difficulty != Difficulty::Advanced,
                Difficulty::Intermediate | Difficulty::Advanced => true,
            };
            addresses_weakness || appropriate_difficulty
        })
        .collect();

    // Interleave: two internal, then one external, until both run out.
    let mut final_path: Vec<LearningModule> = Vec::new();
    let mut internal_index = 0;
    let mut external_index = 0;
    while internal_index < ordered.len() || external_index < relevant_externals.len() {
        for _ in 0..2 {
            if internal_index < ordered.len() {
                final_path.push(ordered[internal_index].clone());
                internal_index += 1;
            }
        }
        if external_index < relevant_externals.len() {
            final_path.push(relevant_externals[external_index].clone());
            external_index += 1;
        }
    }

    final_path.truncate(MAX_PATH_MODULES);
    final_path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(skill_level: Difficulty, recommended_topics: &[&str]) -> AssessmentResult {
        AssessmentResult {
            score: 0.0,
            skill_level,
            strengths: vec![],
            weaknesses: vec![],
            recommended_topics: recommended_topics.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn module(
        id: &str,
        module_type: ModuleType,
        difficulty: Difficulty,
        prerequisites: &[&str],
        module_tags: &[&str],
    ) -> LearningModule {
        LearningModule {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            module_type,
            url: None,
            estimated_time: 60,
            difficulty,
            prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
            tags: tags(module_tags),
            source: None,
        }
    }

    #[test]
    fn never_returns_more_than_twelve_modules() {
        let catalog: Vec<LearningModule> = (0..30)
            .map(|i| {
                module(
                    &format!("m{}", i),
                    if i % 3 == 0 { ModuleType::External } else { ModuleType::Internal },
                    Difficulty::Beginner,
                    &[],
                    &["rust"],
                )
            })
            .collect();
        let path = generate_personalized_path(
            &result_for(Difficulty::Advanced, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        assert_eq!(path.len(), 12);
    }

    #[test]
    fn excludes_modules_outside_track_tags() {
        let catalog = vec![
            module("in-track", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("off-track", ModuleType::Internal, Difficulty::Beginner, &[], &["cooking"]),
        ];
        let path = generate_personalized_path(
            &result_for(Difficulty::Beginner, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id, "in-track");
    }

    #[test]
    fn unknown_track_yields_empty_path() {
        let catalog = vec![module(
            "m",
            ModuleType::Internal,
            Difficulty::Beginner,
            &[],
            &["rust"],
        )];
        let path = generate_personalized_path(
            &result_for(Difficulty::Advanced, &[]),
            &[],
            &catalog,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn beginner_gate_hides_harder_internal_modules() {
        let catalog = vec![
            module("easy", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("mid", ModuleType::Internal, Difficulty::Intermediate, &[], &["rust"]),
            module("hard", ModuleType::Internal, Difficulty::Advanced, &[], &["rust"]),
        ];
        let path = generate_personalized_path(
            &result_for(Difficulty::Beginner, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        assert_eq!(path.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["easy"]);

        let path = generate_personalized_path(
            &result_for(Difficulty::Intermediate, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        assert_eq!(
            path.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["easy", "mid"]
        );
    }

    #[test]
    fn prerequisites_are_inserted_before_dependents_one_level_only() {
        // C requires B, B requires A. Only C passes the advanced-tier gate
        // directly... all are beginner here, so gate admits all; instead make
        // A fail the gate to show it is still pulled in only when it is a
        // DIRECT prerequisite of a selected module.
        let catalog = vec![
            module("a", ModuleType::Internal, Difficulty::Advanced, &[], &["rust"]),
            module("b", ModuleType::Internal, Difficulty::Advanced, &["a"], &["rust"]),
            module("c", ModuleType::Internal, Difficulty::Beginner, &["b"], &["rust"]),
        ];
        let path = generate_personalized_path(
            &result_for(Difficulty::Beginner, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        // B is inserted before C; A is NOT transitively resolved.
        assert_eq!(
            path.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn external_filter_is_keyword_only_for_beginners() {
        let catalog = vec![
            module("anchor", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module(
                "ext-weak",
                ModuleType::External,
                Difficulty::Advanced,
                &[],
                &["rust", "ownership-deep-dive"],
            ),
            module("ext-hard", ModuleType::External, Difficulty::Advanced, &[], &["rust"]),
            module("ext-easy", ModuleType::External, Difficulty::Beginner, &[], &["rust"]),
        ];
        // Beginner: advanced externals only get in via the keyword match.
        let path = generate_personalized_path(
            &result_for(Difficulty::Beginner, &["ownership"]),
            &tags(&["rust"]),
            &catalog,
        );
        let ids: Vec<&str> = path.iter().map(|m| m.id.as_str()).collect();
        assert!(ids.contains(&"ext-weak"));
        assert!(ids.contains(&"ext-easy"));
        assert!(!ids.contains(&"ext-hard"));

        // Intermediate: the difficulty arm admits everything.
        let path = generate_personalized_path(
            &result_for(Difficulty::Intermediate, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        let ids: Vec<&str> = path.iter().map(|m| m.id.as_str()).collect();
        assert!(ids.contains(&"ext-hard"));
    }

    #[test]
    fn interleaves_two_internal_then_one_external() {
        let catalog = vec![
            module("i1", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("i2", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("i3", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("i4", ModuleType::Internal, Difficulty::Beginner, &[], &["rust"]),
            module("e1", ModuleType::External, Difficulty::Beginner, &[], &["rust"]),
            module("e2", ModuleType::External, Difficulty::Beginner, &[], &["rust"]),
        ];
        let path = generate_personalized_path(
            &result_for(Difficulty::Beginner, &[]),
            &tags(&["rust"]),
            &catalog,
        );
        assert_eq!(
            path.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["i1", "i2", "e1", "i3", "i4", "e2"]
        );
    }
}
