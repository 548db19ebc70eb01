//! One render module per wizard screen, plus shared chrome.

pub mod done;
pub mod features;
pub mod installing;
pub mod tools;
pub mod welcome;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::{self, Theme};

const NEXUS_BANNER: [&str; 6] = [
    "███╗   ██╗███████╗██╗  ██╗██╗   ██╗███████╗",
    "████╗  ██║██╔════╝╚██╗██╔╝██║   ██║██╔════╝",
    "██╔██╗ ██║█████╗   ╚███╔╝ ██║   ██║███████╗",
    "██║╚██╗██║██╔══╝   ██╔██╗ ██║   ██║╚════██║",
    "██║ ╚████║███████╗██╔╝ ██╗╚██████╔╝███████║",
    "╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝",
];

/// Height of the rendered banner in terminal rows.
pub const BANNER_HEIGHT: u16 = 16;

struct Boxed {
    lines: Vec<Line<'static>>,
    width: usize,
}

fn wrap(boxed: Boxed, color: ratatui::style::Color, pad: usize) -> Boxed {
    let style = Style::default().fg(color);
    let horiz = "─".repeat(boxed.width + 2 * pad);
    let side = " ".repeat(pad);

    let mut lines = vec![Line::from(Span::styled(format!("╭{horiz}╮"), style))];
    for line in boxed.lines {
        let mut spans = vec![Span::styled(format!("│{side}"), style)];
        spans.extend(line.spans);
        spans.push(Span::styled(format!("{side}│"), style));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(format!("╰{horiz}╯"), style)));

    Boxed {
        lines,
        width: boxed.width + 2 * pad + 2,
    }
}

/// The NEXUS banner with its nested fraternal-color borders, ready to render
/// centered.
pub fn banner() -> Vec<Line<'static>> {
    let banner_colors = [
        theme::NAVY,
        theme::RED,
        theme::WHITE,
        theme::GOLD,
        theme::RED,
        theme::NAVY,
    ];

    let text_lines = NEXUS_BANNER
        .iter()
        .zip(banner_colors)
        .map(|(line, color)| {
            Line::from(Span::styled(
                (*line).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let mut boxed = Boxed {
        lines: text_lines,
        width: NEXUS_BANNER[0].chars().count(),
    };
    boxed = wrap(boxed, theme::WHITE, 1);
    boxed = wrap(boxed, theme::GOLD, 2);
    boxed = wrap(boxed, theme::RED, 2);
    boxed = wrap(boxed, theme::NAVY, 2);

    let mut lines = vec![
        Line::from(Span::styled(
            "✦   ✦   ✦",
            Style::default().fg(theme::GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(boxed.lines);
    lines
}

pub fn render_banner(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(banner()).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Standard screen layout: banner on top, panel in the middle, one-row help
/// bar at the bottom.
pub fn screen_chunks(frame: &Frame) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area())
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    let help = Paragraph::new(Line::from(text.to_string()))
        .alignment(Alignment::Center)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}

/// One row of a checkbox list.
pub struct SelectRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub selected: bool,
}

/// Render a titled checkbox list with a `›` cursor, matching the selection
/// screens' shared look.
pub fn render_checkbox_panel(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    subtitle: &str,
    rows: &[SelectRow<'_>],
    cursor: usize,
) {
    let mut lines = vec![
        Line::from(Span::styled(title.to_string(), theme.title)),
        Line::from(Span::styled(subtitle.to_string(), theme.subtitle)),
        Line::from(""),
    ];

    for (i, row) in rows.iter().enumerate() {
        let highlighted = i == cursor;
        let cursor_span = if highlighted {
            Span::styled("› ", theme.highlight)
        } else {
            Span::raw("  ")
        };
        let checkbox = if row.selected {
            Span::styled("◉ ", theme.highlight)
        } else {
            Span::styled("○ ", theme.muted)
        };
        let name = if highlighted {
            Span::styled(row.name.to_string(), theme.highlight)
        } else {
            Span::raw(row.name.to_string())
        };
        lines.push(Line::from(vec![cursor_span, checkbox, name]));
        lines.push(Line::from(Span::styled(
            format!("      {}", row.description),
            theme.muted,
        )));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(panel, centered_panel(area));
}

/// Fixed-width panel horizontally centered in the given area.
pub fn centered_panel(area: Rect) -> Rect {
    let width = 70.min(area.width);
    let padding = area.width.saturating_sub(width) / 2;
    Rect {
        x: area.x + padding,
        y: area.y,
        width,
        height: area.height,
    }
}
