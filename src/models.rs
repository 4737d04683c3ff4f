use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::QuestionSetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
    pub marks: u32,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option_index: usize,
        marks: u32,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            options,
            correct_option_index,
            marks,
        }
    }

    pub fn is_valid_option(&self, option_index: usize) -> bool {
        option_index < self.options.len()
    }
}

/// Ordered, validated list of questions for one quiz.
///
/// Holding a `QuestionSet` guarantees the set is non-empty, ids are unique and
/// positive, every question has at least two options, a correct index inside
/// its options and a positive mark value, and the marks sum fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut seen = BTreeSet::new();
        let mut total_marks: u32 = 0;
        for question in &questions {
            if question.id.get() == 0 {
                return Err(QuestionSetError::InvalidId);
            }
            if !seen.insert(question.id) {
                return Err(QuestionSetError::DuplicateId(question.id));
            }
            if question.options.len() < 2 {
                return Err(QuestionSetError::TooFewOptions {
                    id: question.id,
                    count: question.options.len(),
                });
            }
            if !question.is_valid_option(question.correct_option_index) {
                return Err(QuestionSetError::CorrectIndexOutOfRange {
                    id: question.id,
                    index: question.correct_option_index,
                    count: question.options.len(),
                });
            }
            if question.marks == 0 {
                return Err(QuestionSetError::ZeroMarks(question.id));
            }
            total_marks = total_marks
                .checked_add(question.marks)
                .ok_or(QuestionSetError::TotalMarksOverflow)?;
        }

        Ok(Self { questions })
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Post-submission classification of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotAttempted,
    Correct,
    Incorrect,
}

/// The two quiz screens reachable from the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Daily,
    Practice,
}

impl QuizMode {
    pub const ALL: [QuizMode; 2] = [QuizMode::Daily, QuizMode::Practice];

    pub fn title(self) -> &'static str {
        match self {
            QuizMode::Daily => "Daily Quiz",
            QuizMode::Practice => "Practice Quiz",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizMode::Daily => "Answer every question before submitting",
            QuizMode::Practice => "Submit whenever you like",
        }
    }

    pub fn submit_policy(self) -> SubmitPolicy {
        match self {
            QuizMode::Daily => SubmitPolicy::AllAnswered,
            QuizMode::Practice => SubmitPolicy::Anytime,
        }
    }
}

/// Screen-level gate on `submit`. The session itself accepts submit at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    Anytime,
    AllAnswered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Submitted,
}

/// One quiz attempt: the fixed questions, the chosen option per question id
/// and whether the attempt has been submitted.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub(crate) questions: QuestionSet,
    pub(crate) selections: BTreeMap<QuestionId, usize>,
    pub(crate) is_submitted: bool,
}

/// Controller state for the quiz screen. Owns the session while the screen is open.
#[derive(Debug)]
pub struct QuizScreen {
    pub session: QuizSession,
    pub mode: QuizMode,
    pub policy: SubmitPolicy,
    pub(crate) current_index: usize,
    pub(crate) highlighted_option: usize,
    pub notice: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Home,
    Quiz,
    QuizLeaveConfirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Option {}", i)).collect()
    }

    #[test]
    fn test_valid_set_is_accepted() {
        let set = QuestionSet::new(vec![
            Question::new(1, "Q1", opts(4), 1, 1),
            Question::new(2, "Q2", opts(2), 0, 2),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(QuestionId::new(2)).unwrap().marks, 2);
        assert!(set.get(QuestionId::new(3)).is_none());
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            QuestionSet::new(vec![]),
            Err(QuestionSetError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = QuestionSet::new(vec![
            Question::new(7, "Q1", opts(2), 0, 1),
            Question::new(7, "Q2", opts(2), 1, 1),
        ]);
        assert!(matches!(result, Err(QuestionSetError::DuplicateId(id)) if id.get() == 7));
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let result = QuestionSet::new(vec![Question::new(0, "Q", opts(2), 0, 1)]);
        assert!(matches!(result, Err(QuestionSetError::InvalidId)));
    }

    #[test]
    fn test_single_option_is_rejected() {
        let result = QuestionSet::new(vec![Question::new(1, "Q", opts(1), 0, 1)]);
        assert!(matches!(
            result,
            Err(QuestionSetError::TooFewOptions { count: 1, .. })
        ));
    }

    #[test]
    fn test_correct_index_out_of_range_is_rejected() {
        let result = QuestionSet::new(vec![Question::new(1, "Q", opts(3), 3, 1)]);
        assert!(matches!(
            result,
            Err(QuestionSetError::CorrectIndexOutOfRange {
                index: 3,
                count: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_marks_are_rejected() {
        let result = QuestionSet::new(vec![Question::new(1, "Q", opts(2), 0, 0)]);
        assert!(matches!(result, Err(QuestionSetError::ZeroMarks(_))));
    }

    #[test]
    fn test_total_marks_overflow_is_rejected() {
        let result = QuestionSet::new(vec![
            Question::new(1, "Q1", opts(2), 0, u32::MAX),
            Question::new(2, "Q2", opts(2), 0, 2),
        ]);
        assert!(matches!(result, Err(QuestionSetError::TotalMarksOverflow)));
    }

    #[test]
    fn test_total_marks_at_limit_is_accepted() {
        let set = QuestionSet::new(vec![
            Question::new(1, "Q1", opts(2), 0, u32::MAX - 2),
            Question::new(2, "Q2", opts(2), 0, 2),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(42).to_string(), "42");
    }
}
