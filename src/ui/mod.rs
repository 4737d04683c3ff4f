pub mod layout;
mod home;
mod quiz;

pub use home::draw_home;
pub use layout::{calculate_home_chunks, calculate_quiz_chunks};
pub use quiz::{draw_leave_confirmation, draw_quiz};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub(crate) const APP_TITLE: &str = "Bodha UPSC";

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
