use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use daily_quiz::{
    draw_home, draw_leave_confirmation, draw_quiz, handle_leave_confirm_input, handle_quiz_input,
    load_embedded, logger, AppConfig, AppError, AppState, QuestionSet, QuizMode, QuizScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

type Backend = CrosstermBackend<io::Stdout>;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_file {
        logger::init(path);
    }

    // Validate before touching the terminal so errors print normally
    let questions = load_embedded()?;
    logger::log(&format!("Loaded {} questions", questions.len()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &questions);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(AppError::from)
}

fn run(
    terminal: &mut Terminal<Backend>,
    config: &AppConfig,
    questions: &QuestionSet,
) -> io::Result<()> {
    let mut app_state = AppState::Home;
    let mut selected_mode_index = QuizMode::ALL
        .iter()
        .position(|m| *m == config.default_mode)
        .unwrap_or(0);
    let mut quiz_screen: Option<QuizScreen> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Home => draw_home(f, selected_mode_index, questions.len()),
            AppState::Quiz => {
                if let Some(screen) = &quiz_screen {
                    draw_quiz(f, screen);
                }
            }
            AppState::QuizLeaveConfirm => {
                if let Some(screen) = &quiz_screen {
                    draw_leave_confirmation(
                        f,
                        screen.session.answered_count(),
                        screen.session.questions().len(),
                    );
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            logger::log("Exit requested");
            break;
        }

        match app_state {
            AppState::Home => match key.code {
                KeyCode::Up => {
                    selected_mode_index = selected_mode_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_mode_index < QuizMode::ALL.len() - 1 {
                        selected_mode_index += 1;
                    }
                }
                KeyCode::Enter => {
                    let mode = QuizMode::ALL[selected_mode_index];
                    quiz_screen = Some(QuizScreen::new(questions.clone(), mode));
                    app_state = AppState::Quiz;
                }
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {}
            },
            AppState::Quiz => {
                if let Some(screen) = &mut quiz_screen {
                    handle_quiz_input(screen, key, &mut app_state)?;
                }
                if app_state == AppState::Home {
                    logger::log("Left quiz");
                    quiz_screen = None;
                }
            }
            AppState::QuizLeaveConfirm => {
                if handle_leave_confirm_input(key, &mut app_state) {
                    quiz_screen = None;
                }
            }
        }
    }

    Ok(())
}
