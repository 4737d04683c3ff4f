use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{key_hint, APP_TITLE};
use crate::models::QuizMode;
use crate::ui::layout::calculate_home_chunks;

pub fn draw_home(f: &mut Frame, selected_mode_index: usize, question_count: usize) {
    let layout = calculate_home_chunks(f.area());

    let title = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let items: Vec<ListItem> = QuizMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let selected = i == selected_mode_index;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{}{}", marker, mode.title()), name_style)),
                Line::from(Span::styled(
                    format!("    {}", mode.description()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Choose a quiz ({} questions)", question_count)),
    );
    f.render_widget(list, layout.modes_area);

    let help_text = vec![Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Navigate  "),
        key_hint("Enter"),
        Span::from(" Start  "),
        key_hint("Esc/q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
