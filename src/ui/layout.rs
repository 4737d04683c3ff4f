use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct HomeLayout {
    pub header_area: Rect,
    pub modes_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        question_area: chunks[2],
        status_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_home_chunks(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    HomeLayout {
        header_area: chunks[0],
        modes_area: chunks[1],
        footer_area: chunks[2],
    }
}
