//! Read-only projection of a [`QuizSession`] for drawing code.
//!
//! Before submission a question only reports whether (and which) option was
//! chosen. Correctness appears once the session is submitted.

use crate::models::{Outcome, QuestionId, QuizSession};
use crate::utils::option_letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unselected,
    Selected(usize),
    Reviewed {
        outcome: Outcome,
        selected: Option<usize>,
        correct: usize,
    },
}

/// Visual classification of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Selected,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub id: QuestionId,
    pub prompt: &'a str,
    pub options: &'a [String],
    pub marks: u32,
    pub status: QuestionStatus,
}

impl QuestionView<'_> {
    pub fn option_mark(&self, option_index: usize) -> OptionMark {
        match self.status {
            QuestionStatus::Unselected => OptionMark::Plain,
            QuestionStatus::Selected(index) if index == option_index => OptionMark::Selected,
            QuestionStatus::Selected(_) => OptionMark::Plain,
            QuestionStatus::Reviewed { correct, .. } if correct == option_index => {
                OptionMark::Correct
            }
            QuestionStatus::Reviewed {
                selected: Some(index),
                ..
            } if index == option_index => OptionMark::Wrong,
            QuestionStatus::Reviewed { .. } => OptionMark::Plain,
        }
    }

    /// Per-question review text, present only after submission.
    pub fn review_line(&self) -> Option<String> {
        let QuestionStatus::Reviewed {
            outcome, correct, ..
        } = self.status
        else {
            return None;
        };

        Some(match outcome {
            Outcome::Correct => format!("✔ Correct · +{} {}", self.marks, mark_noun(self.marks)),
            Outcome::Incorrect => format!(
                "✖ Incorrect · Correct Answer: Option {} · Marks: 0",
                option_letter(correct)
            ),
            Outcome::NotAttempted => format!(
                "✖ Not attempted · Correct Answer: Option {} · Marks: 0",
                option_letter(correct)
            ),
        })
    }
}

fn mark_noun(marks: u32) -> &'static str {
    if marks == 1 { "Mark" } else { "Marks" }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot<'a> {
    pub questions: Vec<QuestionView<'a>>,
    pub answered_count: usize,
    pub total_marks: u32,
    /// `None` until the session is submitted.
    pub obtained_marks: Option<u32>,
    pub is_submitted: bool,
}

impl QuizSnapshot<'_> {
    pub fn score_line(&self) -> Option<String> {
        self.obtained_marks
            .map(|obtained| format!("Total Marks: {} / {}", obtained, self.total_marks))
    }

    pub fn progress_line(&self) -> String {
        format!("Answered {} / {}", self.answered_count, self.questions.len())
    }
}

impl QuizSession {
    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        let questions = self
            .questions()
            .iter()
            .map(|q| {
                let selected = self.selection_for(q.id);
                let status = match (self.is_submitted(), selected) {
                    (false, None) => QuestionStatus::Unselected,
                    (false, Some(index)) => QuestionStatus::Selected(index),
                    (true, _) => QuestionStatus::Reviewed {
                        outcome: self.outcome_for(q.id).unwrap_or(Outcome::NotAttempted),
                        selected,
                        correct: q.correct_option_index,
                    },
                };
                QuestionView {
                    id: q.id,
                    prompt: &q.prompt,
                    options: &q.options,
                    marks: q.marks,
                    status,
                }
            })
            .collect();

        QuizSnapshot {
            questions,
            answered_count: self.answered_count(),
            total_marks: self.total_marks(),
            obtained_marks: self.is_submitted().then(|| self.obtained_marks()),
            is_submitted: self.is_submitted(),
        }
    }
}
