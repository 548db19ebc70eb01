use ratatui::crossterm::event::KeyEvent;

/// All possible events in the application.
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events - install run
    StepStarted(usize),
    StepCompleted(usize),
    StepSkipped { index: usize, warning: String },
    InstallFinished { aborted: bool },

    // UI events
    Tick,
}
