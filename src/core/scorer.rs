// src/core/scorer.rs

use crate::models::assessment::{AssessmentResult, Question};
use crate::models::module::Difficulty;

/// Per-topic tally, kept in first-seen question order so the strengths and
/// weaknesses lists come out in a stable order.
struct TopicTally {
    topic: String,
    correct: usize,
    total: usize,
}

/// Scores an assessment submission against its question list.
///
/// `answers[i]` is the selected-option index for `questions[i]`. A missing
/// trailing answer (answers shorter than questions) counts as wrong, not as
/// an error. An empty question list yields 0% / beginner.
///
/// Skill level mapping: `< 60` beginner, `60..<80` intermediate,
/// `>= 80` advanced. Topics at or above 70% correct are strengths; the
/// rest are weaknesses and their lowercased names become recommended
/// topic keywords.
pub fn analyze_assessment(answers: &[usize], questions: &[Question]) -> AssessmentResult {
    if questions.is_empty() {
        return AssessmentResult {
            score: 0.0,
            skill_level: Difficulty::Beginner,
            strengths: vec![],
            weaknesses: vec![],
            recommended_topics: vec![],
        };
    }

    let correct_count = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(*i) == Some(&q.correct_answer))
        .count();

    let percentage = (correct_count as f64 / questions.len() as f64) * 100.0;

    let skill_level = if percentage >= 80.0 {
        Difficulty::Advanced
    } else if percentage >= 60.0 {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    };

    let mut tallies: Vec<TopicTally> = Vec::new();
    for (i, question) in questions.iter().enumerate() {
        let idx = match tallies.iter().position(|t| t.topic == question.topic) {
            Some(idx) => idx,
            None => {
                tallies.push(TopicTally {
                    topic: question.topic.clone(),
                    correct: 0,
                    total: 0,
                });
                tallies.len() - 1
            }
        };
        tallies[idx].total += 1;
        if answers.get(i) == Some(&question.correct_answer) {
            tallies[idx].correct += 1;
        }
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommended_topics = Vec::new();

    for tally in tallies {
        let topic_percentage = (tally.correct as f64 / tally.total as f64) * 100.0;
        if topic_percentage >= 70.0 {
            strengths.push(tally.topic);
        } else {
            recommended_topics.push(tally.topic.to_lowercase());
            weaknesses.push(tally.topic);
        }
    }

    AssessmentResult {
        score: percentage,
        skill_level,
        strengths,
        weaknesses,
        recommended_topics,
    }
}
