//! Tool selection screen.

use ratatui::Frame;

use super::{render_banner, render_checkbox_panel, render_help_bar, screen_chunks, SelectRow};
use crate::catalog::Session;
use crate::tui::state::SelectState;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, state: &SelectState, session: &Session, theme: &Theme) {
    let chunks = screen_chunks(frame);

    render_banner(frame, chunks[0]);

    let rows: Vec<SelectRow<'_>> = session
        .tools
        .iter()
        .map(|t| SelectRow {
            name: t.kind.display_name(),
            description: &t.description,
            selected: t.selected,
        })
        .collect();

    render_checkbox_panel(
        frame,
        chunks[1],
        theme,
        "Select Tools",
        "Choose which AI assistants to configure",
        &rows,
        state.cursor,
    );

    render_help_bar(
        frame,
        chunks[2],
        theme,
        "↑/↓ navigate • space toggle • enter confirm • esc back • q quit",
    );
}
