use ratatui::style::{Color, Modifier, Style};

use crate::tui::state::StepStatus;

// Fraternal palette carried over from the banner art.
pub const RED: Color = Color::Rgb(196, 30, 58);
pub const NAVY: Color = Color::Rgb(30, 58, 138);
pub const GOLD: Color = Color::Rgb(232, 197, 71);
pub const WHITE: Color = Color::Rgb(255, 255, 255);

/// Consistent theme for the TUI.
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub muted: Style,
    pub highlight: Style,
    pub success: Style,
    pub warning: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
            subtitle: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),
            help_bar: Style::default().bg(Color::DarkGray),
        }
    }
}

impl Theme {
    pub fn status_icon(status: &StepStatus) -> &'static str {
        match status {
            StepStatus::Pending => "○",
            StepStatus::Active => "●",
            StepStatus::Done => "✓",
            StepStatus::Skipped(_) => "⚠",
        }
    }

    pub fn status_style(&self, status: &StepStatus) -> Style {
        match status {
            StepStatus::Pending => self.muted,
            StepStatus::Active => self.highlight,
            StepStatus::Done => self.success,
            StepStatus::Skipped(_) => self.warning,
        }
    }
}
