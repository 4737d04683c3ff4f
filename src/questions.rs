use serde::Deserialize;

use crate::error::QuestionSetError;
use crate::models::{Question, QuestionSet};

const EMBEDDED_BANK: &str = include_str!("../assets/questions.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: u32,
    question: String,
    options: Vec<String>,
    correct_index: usize,
    marks: u32,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Question::new(raw.id, raw.question, raw.options, raw.correct_index, raw.marks)
    }
}

/// The question bank compiled into the binary.
pub fn load_embedded() -> Result<QuestionSet, QuestionSetError> {
    parse_question_bank(EMBEDDED_BANK)
}

pub fn parse_question_bank(json: &str) -> Result<QuestionSet, QuestionSetError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(json)?;
    QuestionSet::new(raw.into_iter().map(Question::from).collect())
}
