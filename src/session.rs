use crate::logger;
use crate::models::{
    AppState, Outcome, Question, QuestionId, QuestionSet, QuizMode, QuizPhase, QuizScreen,
    QuizSession, SubmitPolicy,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;
use std::io;

impl QuizSession {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            selections: BTreeMap::new(),
            is_submitted: false,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Records `option_index` as the answer to `question_id`, replacing any
    /// earlier choice. Ignored once submitted, and for unknown ids or
    /// out-of-range indices. Returns whether the selection was recorded.
    pub fn select(&mut self, question_id: QuestionId, option_index: usize) -> bool {
        if self.is_submitted {
            logger::log(&format!(
                "Ignored selection for question {}: quiz already submitted",
                question_id
            ));
            return false;
        }

        let valid = self
            .questions
            .get(question_id)
            .is_some_and(|q| q.is_valid_option(option_index));
        if !valid {
            logger::log(&format!(
                "Ignored selection {} for question {}: no such question or option",
                option_index, question_id
            ));
            return false;
        }

        self.selections.insert(question_id, option_index);
        logger::log(&format!(
            "Selected option {} for question {}",
            option_index, question_id
        ));
        true
    }

    pub fn submit(&mut self) {
        if self.is_submitted {
            return;
        }
        self.is_submitted = true;
        logger::log(&format!(
            "Submitted: {} / {} marks, {} of {} answered",
            self.obtained_marks(),
            self.total_marks(),
            self.answered_count(),
            self.questions.len()
        ));
    }

    pub fn restart(&mut self) {
        self.selections.clear();
        self.is_submitted = false;
        logger::log("Quiz restarted");
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn phase(&self) -> QuizPhase {
        if self.is_submitted {
            QuizPhase::Submitted
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn selection_for(&self, question_id: QuestionId) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_fully_answered(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    pub fn obtained_marks(&self) -> u32 {
        self.questions
            .iter()
            .filter(|q| self.selection_for(q.id) == Some(q.correct_option_index))
            .map(|q| q.marks)
            .sum()
    }

    /// Correctness of one question. Only meaningful after submission; returns
    /// `None` for an id that is not part of this quiz.
    pub fn outcome_for(&self, question_id: QuestionId) -> Option<Outcome> {
        let question = self.questions.get(question_id)?;
        Some(match self.selection_for(question_id) {
            None => Outcome::NotAttempted,
            Some(index) if index == question.correct_option_index => Outcome::Correct,
            Some(_) => Outcome::Incorrect,
        })
    }
}

impl QuizScreen {
    pub fn new(questions: QuestionSet, mode: QuizMode) -> Self {
        logger::log(&format!(
            "Opened {} with {} questions",
            mode.title(),
            questions.len()
        ));
        Self {
            session: QuizSession::new(questions),
            mode,
            policy: mode.submit_policy(),
            current_index: 0,
            highlighted_option: 0,
            notice: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn current_question(&self) -> &Question {
        // current_index is kept in bounds and the set is never empty
        &self.session.questions.as_slice()[self.current_index]
    }

    /// True when leaving would discard answers the user has not submitted.
    pub fn has_unsubmitted_selections(&self) -> bool {
        !self.session.is_submitted() && self.session.answered_count() > 0
    }

    pub fn next_question(&mut self) {
        if self.current_index < self.session.questions.len().saturating_sub(1) {
            self.current_index += 1;
            self.focus_current_selection();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.focus_current_selection();
        }
    }

    pub fn highlight_next_option(&mut self) {
        let last = self.current_question().options.len().saturating_sub(1);
        if self.highlighted_option < last {
            self.highlighted_option += 1;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        self.highlighted_option = self.highlighted_option.saturating_sub(1);
    }

    pub fn choose_highlighted(&mut self) {
        self.choose(self.highlighted_option);
    }

    pub fn choose(&mut self, option_index: usize) {
        if self.session.is_submitted() {
            self.notice = Some("Quiz already submitted. Press Ctrl+R to restart.".to_string());
            return;
        }
        let id = self.current_question().id;
        if self.session.select(id, option_index) {
            self.highlighted_option = option_index;
            self.notice = None;
        }
    }

    /// Submits unless the screen's policy still requires unanswered questions.
    pub fn try_submit(&mut self) -> bool {
        if self.session.is_submitted() {
            return true;
        }
        if self.policy == SubmitPolicy::AllAnswered && !self.session.is_fully_answered() {
            let message = format!(
                "Answer all questions before submitting ({}/{} answered)",
                self.session.answered_count(),
                self.session.questions.len()
            );
            logger::log(&format!("Submit refused: {}", message));
            self.notice = Some(message);
            return false;
        }
        self.session.submit();
        self.notice = None;
        true
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.current_index = 0;
        self.highlighted_option = 0;
        self.notice = None;
    }

    fn focus_current_selection(&mut self) {
        let id = self.current_question().id;
        self.highlighted_option = self.session.selection_for(id).unwrap_or(0);
        self.notice = None;
    }
}

fn letter_to_option(c: char) -> Option<usize> {
    c.is_ascii_alphabetic()
        .then(|| (c.to_ascii_lowercase() as u8 - b'a') as usize)
}

pub fn handle_quiz_input(
    screen: &mut QuizScreen,
    key: KeyEvent,
    app_state: &mut AppState,
) -> io::Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            *app_state = if screen.has_unsubmitted_selections() {
                AppState::QuizLeaveConfirm
            } else {
                AppState::Home
            };
        }
        KeyCode::Up => screen.previous_question(),
        KeyCode::Down => screen.next_question(),
        KeyCode::Left => screen.highlight_previous_option(),
        KeyCode::Right => screen.highlight_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => screen.choose_highlighted(),
        KeyCode::Char('s') if ctrl => {
            screen.try_submit();
        }
        KeyCode::Char('r') if ctrl => screen.restart(),
        KeyCode::Char(c) if !ctrl => {
            if let Some(index) = letter_to_option(c)
                && index < screen.current_question().options.len()
            {
                screen.choose(index);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Handles the leave prompt. Returns true when the user confirmed leaving.
pub fn handle_leave_confirm_input(key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            logger::log("Left quiz with unsubmitted answers");
            *app_state = AppState::Home;
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            false
        }
        _ => false,
    }
}
