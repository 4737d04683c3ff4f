pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod questions;
pub mod session;
pub mod snapshot;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use config::AppConfig;
pub use error::{AppError, QuestionSetError};
pub use models::{
    AppState, Outcome, Question, QuestionId, QuestionSet, QuizMode, QuizPhase, QuizScreen,
    QuizSession, SubmitPolicy,
};
pub use questions::{load_embedded, parse_question_bank};
pub use session::{handle_leave_confirm_input, handle_quiz_input};
pub use snapshot::{OptionMark, QuestionStatus, QuestionView, QuizSnapshot};
pub use ui::{draw_home, draw_leave_confirmation, draw_quiz};
