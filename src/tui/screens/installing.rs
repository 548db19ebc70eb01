//! Installation progress screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::{centered_panel, render_banner, render_help_bar, screen_chunks};
use crate::tui::state::{InstallingState, StepStatus};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, state: &InstallingState, theme: &Theme) {
    let chunks = screen_chunks(frame);

    render_banner(frame, chunks[0]);

    let panel = centered_panel(chunks[1]);
    let panel_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Overall progress
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Step list
        ])
        .split(panel);

    let title = Paragraph::new(Line::from(Span::styled("Installing", theme.title)));
    frame.render_widget(title, panel_chunks[0]);

    let total = state.steps.len().max(1);
    let done = state.completed_count();
    let gauge = Gauge::default()
        .percent((done * 100 / total) as u16)
        .label(format!("{done} of {total}"))
        .gauge_style(theme.success);
    frame.render_widget(gauge, panel_chunks[1]);

    let mut lines = Vec::new();
    for step in &state.steps {
        let icon = Theme::status_icon(&step.status);
        let style = theme.status_style(&step.status);
        lines.push(Line::from(Span::styled(
            format!("  {icon} {}", step.label),
            style,
        )));
        if let StepStatus::Skipped(warning) = &step.status {
            lines.push(Line::from(Span::styled(
                format!("      {warning}"),
                theme.warning,
            )));
        }
    }
    let steps = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(steps, panel_chunks[3]);

    let help = if state.abort_requested {
        "aborting after current step..."
    } else {
        "q abort remaining steps"
    };
    render_help_bar(frame, chunks[2], theme, help);
}
