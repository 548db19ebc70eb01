//! Feature selection screen.

use ratatui::Frame;

use super::{render_banner, render_checkbox_panel, render_help_bar, screen_chunks, SelectRow};
use crate::catalog::Session;
use crate::tui::state::SelectState;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, state: &SelectState, session: &Session, theme: &Theme) {
    let chunks = screen_chunks(frame);

    render_banner(frame, chunks[0]);

    let rows: Vec<SelectRow<'_>> = session
        .features
        .iter()
        .map(|f| SelectRow {
            name: &f.name,
            description: &f.description,
            selected: f.selected,
        })
        .collect();

    render_checkbox_panel(
        frame,
        chunks[1],
        theme,
        "Select Features",
        "Choose features to install",
        &rows,
        state.cursor,
    );

    render_help_bar(
        frame,
        chunks[2],
        theme,
        "↑/↓ navigate • space toggle • enter install • esc back • q quit",
    );
}
