//! Completion screen with session summary.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{centered_panel, render_banner, render_help_bar, screen_chunks};
use crate::tui::state::DoneState;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, state: &DoneState, theme: &Theme) {
    let chunks = screen_chunks(frame);

    render_banner(frame, chunks[0]);

    let headline = if state.aborted {
        Span::styled("⚠ Installation Aborted", theme.warning)
    } else {
        Span::styled("✓ Installation Complete", theme.success)
    };

    let mut lines = vec![
        Line::from(headline),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tools: ", theme.muted),
            Span::styled(state.tools.join(", "), theme.highlight),
        ]),
        Line::from(vec![
            Span::styled("Features: ", theme.muted),
            Span::styled(state.features.join(", "), theme.highlight),
        ]),
    ];

    if !state.warnings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Warnings:", theme.warning)));
        for warning in &state.warnings {
            lines.push(Line::from(Span::styled(
                format!("  ⚠ {warning}"),
                theme.warning,
            )));
        }
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(panel, centered_panel(chunks[1]));

    render_help_bar(frame, chunks[2], theme, "enter or q to exit");
}
