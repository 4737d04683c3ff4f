use std::path::PathBuf;

use crate::models::QuizMode;

pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` disables the debug log.
    pub log_file: Option<PathBuf>,
    pub default_mode: QuizMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            default_mode: QuizMode::Daily,
        }
    }
}

impl AppConfig {
    /// Reads `QUIZ_LOG_FILE`, `QUIZ_NO_LOG` and `QUIZ_DEFAULT_MODE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("QUIZ_LOG_FILE")
            && !path.trim().is_empty()
        {
            config.log_file = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("QUIZ_NO_LOG")
            && matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        {
            config.log_file = None;
        }

        if let Some(mode) = lookup("QUIZ_DEFAULT_MODE") {
            config.default_mode = match mode.trim().to_ascii_lowercase().as_str() {
                "practice" => QuizMode::Practice,
                _ => QuizMode::Daily,
            };
        }

        config
    }
}
