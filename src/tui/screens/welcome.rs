//! Welcome screen: banner plus a short prompt.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_banner, render_help_bar, screen_chunks};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, theme: &Theme) {
    let chunks = screen_chunks(frame);

    render_banner(frame, chunks[0]);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled("AI Assistant Configuration", theme.subtitle)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", theme.highlight)),
    ];
    let paragraph = Paragraph::new(body).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);

    render_help_bar(frame, chunks[2], theme, "enter continue • q quit");
}
