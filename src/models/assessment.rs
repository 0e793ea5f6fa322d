// src/models/assessment.rs

use serde::{Deserialize, Serialize};

use crate::models::module::Difficulty;

/// A multiple-choice question from the static assessment catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    pub topic: String,
    pub difficulty: Difficulty,
}

/// The per-track question set. Statically defined, read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub track: String,
    pub questions: Vec<Question>,
}

/// DTO for sending a question to the client (excludes the answer key).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        PublicQuestion {
            id: q.id.clone(),
            question: q.question.clone(),
            options: q.options.clone(),
            topic: q.topic.clone(),
            difficulty: q.difficulty,
        }
    }
}

/// Outcome of scoring one assessment submission. Derived, not stored
/// long-term; immediately folded into user state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Percentage score in 0..=100.
    pub score: f64,
    pub skill_level: Difficulty,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Lowercased weakness topics, used downstream as keyword filters.
    pub recommended_topics: Vec<String>,
}

/// DTO for submitting assessment answers: one selected-option index per
/// question, in question order.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Vec<usize>,
}
