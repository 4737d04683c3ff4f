use crate::models::{Outcome, QuizScreen};
use crate::snapshot::{OptionMark, QuestionStatus, QuestionView, QuizSnapshot};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{option_letter, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{key_hint, APP_TITLE};

fn option_style(mark: OptionMark) -> Style {
    match mark {
        OptionMark::Plain => Style::default(),
        OptionMark::Selected => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        OptionMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionMark::Wrong => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn progress_marker(view: &QuestionView) -> (&'static str, Style) {
    match view.status {
        QuestionStatus::Unselected => ("○", Style::default().fg(Color::DarkGray)),
        QuestionStatus::Selected(_) => ("●", Style::default().fg(Color::Blue)),
        QuestionStatus::Reviewed { outcome, .. } => match outcome {
            Outcome::Correct => ("✔", Style::default().fg(Color::Green)),
            Outcome::Incorrect => ("✖", Style::default().fg(Color::Red)),
            Outcome::NotAttempted => ("–", Style::default().fg(Color::DarkGray)),
        },
    }
}

fn question_strip(snapshot: &QuizSnapshot, current_index: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, view) in snapshot.questions.iter().enumerate() {
        let (marker, style) = progress_marker(view);
        let label_style = if i == current_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" Q{} ", view.id), label_style));
        spans.push(Span::styled(marker, style));
        spans.push(Span::from("  "));
    }
    Line::from(spans)
}

fn question_card(view: &QuestionView, highlighted_option: usize, width: usize) -> Text<'static> {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        format!("Q{}. {}", view.id, view.prompt),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    let reviewing = matches!(view.status, QuestionStatus::Reviewed { .. });
    for (i, option) in view.options.iter().enumerate() {
        let cursor = if !reviewing && i == highlighted_option {
            "▶ "
        } else {
            "  "
        };
        let label = format!("{}. {}", option_letter(i), option);
        text.push_line(Line::from(vec![
            Span::from(cursor),
            Span::styled(
                truncate_string(&label, width.saturating_sub(2)),
                option_style(view.option_mark(i)),
            ),
        ]));
    }

    if let Some(review) = view.review_line() {
        let style = match view.status {
            QuestionStatus::Reviewed {
                outcome: Outcome::Correct,
                ..
            } => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Red),
        };
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(review, style)));
    }

    text
}

pub fn draw_quiz(f: &mut Frame, screen: &QuizScreen) {
    let layout = calculate_quiz_chunks(f.area());
    let snapshot = screen.session.snapshot();

    let header = Paragraph::new(format!("{} – {}", APP_TITLE, screen.mode.title()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let progress = Paragraph::new(question_strip(&snapshot, screen.current_index))
        .block(Block::default().borders(Borders::ALL).title(snapshot.progress_line()));
    f.render_widget(progress, layout.progress_area);

    let view = &snapshot.questions[screen.current_index];
    let marks_title = Line::from(format!(
        "{} {}",
        view.marks,
        if view.marks == 1 { "Mark" } else { "Marks" }
    ))
    .right_aligned();
    let card_width = layout.question_area.width.saturating_sub(2) as usize;
    let card = Paragraph::new(question_card(view, screen.highlighted_option, card_width))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Question {} / {}",
                    screen.current_index + 1,
                    snapshot.questions.len()
                ))
                .title_top(marks_title),
        );
    f.render_widget(card, layout.question_area);

    let mut status_spans = Vec::new();
    if let Some(score) = snapshot.score_line() {
        status_spans.push(Span::styled(
            score,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(notice) = &screen.notice {
        if !status_spans.is_empty() {
            status_spans.push(Span::from("  "));
        }
        status_spans.push(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }
    if status_spans.is_empty() {
        status_spans.push(Span::from(snapshot.progress_line()));
    }
    let status = Paragraph::new(Line::from(status_spans));
    f.render_widget(
        status
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.status_area,
    );

    let mut help_text = Vec::new();
    help_text.push(Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Question  "),
        key_hint("←/→"),
        Span::from(" Option  "),
        key_hint("Enter/A-Z"),
        Span::from(" Choose  "),
        key_hint("Esc"),
        Span::from(" Back"),
    ]));

    let mut ctrl_spans = Vec::new();
    if !snapshot.is_submitted {
        ctrl_spans.extend([key_hint("Ctrl+S"), Span::from(" Submit Quiz  ")]);
    }
    ctrl_spans.extend([
        key_hint("Ctrl+R"),
        Span::from(" Restart Quiz  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ]);
    help_text.push(Line::from(ctrl_spans));

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_leave_confirmation(f: &mut Frame, answered: usize, total: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Leave Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(vec![
        Line::from(format!(
            "You answered {} of {} questions without submitting.",
            answered, total
        )),
        Line::from("Your answers will be discarded."),
    ])
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Leave)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
