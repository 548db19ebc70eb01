//! Wizard controller: event loop, state transitions, install task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::time;
use tracing::warn;

use crate::catalog::{Feature, Session};
use crate::installer::{build_steps, InstallStep, Installer, StepOutcome};
use crate::io::paths::InstallPaths;
use crate::tui::events::AppEvent;
use crate::tui::state::{
    DoneState, InstallingState, SelectState, StateTransition, StepStatus, WelcomeState, WizardState,
};
use crate::tui::theme::Theme;
use crate::Result;

/// UI pacing between install steps; no correctness contract.
const STEP_DELAY: Duration = Duration::from_millis(300);

pub struct App {
    session: Session,
    state: WizardState,
    paths: InstallPaths,
    theme: Theme,
    should_quit: bool,
    event_tx: Option<tokio::sync::mpsc::UnboundedSender<AppEvent>>,
    /// Checked by the install task between steps; an abort never interrupts
    /// a step already underway.
    abort_flag: Arc<AtomicBool>,
}

impl App {
    pub fn new(paths: InstallPaths) -> Self {
        Self {
            session: Session::new(),
            state: WizardState::Welcome(WelcomeState),
            paths,
            theme: Theme::default(),
            should_quit: false,
            event_tx: None,
            abort_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Input reader
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => {
                    if let Some(transition) = self.handle_event(event) {
                        self.transition_state(transition);
                    }
                }
                Ok(None) => break, // Channel closed
                Err(_) => {
                    // Timeout, redraw
                    if let Some(transition) = self.handle_event(AppEvent::Tick) {
                        self.transition_state(transition);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.state {
            WizardState::Welcome(_) => {
                super::screens::welcome::render(frame, &self.theme);
            }
            WizardState::SelectTools(state) => {
                super::screens::tools::render(frame, state, &self.session, &self.theme);
            }
            WizardState::SelectFeatures(state) => {
                super::screens::features::render(frame, state, &self.session, &self.theme);
            }
            WizardState::Installing(state) => {
                super::screens::installing::render(frame, state, &self.theme);
            }
            WizardState::Done(state) => {
                super::screens::done::render(frame, state, &self.theme);
            }
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> Option<StateTransition> {
        if let AppEvent::Key(key) = &event {
            let is_quit_key = matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
            if is_quit_key {
                if self.state.can_quit() {
                    self.should_quit = true;
                } else {
                    self.request_abort();
                }
                return None;
            }
            if key.code == KeyCode::Esc {
                if self.state.can_go_back() {
                    return Some(StateTransition::Back);
                }
                if self.state.can_quit() {
                    self.should_quit = true;
                } else {
                    self.request_abort();
                }
                return None;
            }
        }

        match &mut self.state {
            WizardState::Welcome(_) => match event {
                AppEvent::Key(key) if key.code == KeyCode::Enter => {
                    Some(StateTransition::Continue)
                }
                _ => None,
            },
            WizardState::SelectTools(state) => {
                let len = self.session.tools.len();
                match Self::handle_select_event(state, len, event) {
                    SelectOutcome::Toggle(index) => {
                        self.session.toggle_tool(index);
                        None
                    }
                    SelectOutcome::Transition(t) => Some(t),
                    SelectOutcome::None => None,
                }
            }
            WizardState::SelectFeatures(state) => {
                let len = self.session.features.len();
                match Self::handle_select_event(state, len, event) {
                    SelectOutcome::Toggle(index) => {
                        self.session.toggle_feature(index);
                        None
                    }
                    SelectOutcome::Transition(t) => Some(t),
                    SelectOutcome::None => None,
                }
            }
            WizardState::Installing(state) => Self::handle_installing_event(state, event),
            WizardState::Done(_) => match event {
                AppEvent::Key(key) if key.code == KeyCode::Enter => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
        }
    }

    fn handle_select_event(state: &mut SelectState, len: usize, event: AppEvent) -> SelectOutcome {
        let AppEvent::Key(key) = event else {
            return SelectOutcome::None;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.cursor = state.cursor.saturating_sub(1);
                SelectOutcome::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if state.cursor + 1 < len {
                    state.cursor += 1;
                }
                SelectOutcome::None
            }
            KeyCode::Char(' ') => SelectOutcome::Toggle(state.cursor),
            KeyCode::Enter => SelectOutcome::Transition(StateTransition::Continue),
            _ => SelectOutcome::None,
        }
    }

    fn handle_installing_event(
        state: &mut InstallingState,
        event: AppEvent,
    ) -> Option<StateTransition> {
        match event {
            AppEvent::StepStarted(index) => {
                if let Some(step) = state.steps.get_mut(index) {
                    step.status = StepStatus::Active;
                }
                None
            }
            AppEvent::StepCompleted(index) => {
                if let Some(step) = state.steps.get_mut(index) {
                    step.status = StepStatus::Done;
                }
                None
            }
            AppEvent::StepSkipped { index, warning } => {
                if let Some(step) = state.steps.get_mut(index) {
                    step.status = StepStatus::Skipped(warning.clone());
                }
                state.warnings.push(warning);
                None
            }
            AppEvent::InstallFinished { aborted } => {
                state.finished = true;
                state.aborted = aborted;
                Some(StateTransition::Continue)
            }
            _ => None,
        }
    }

    fn transition_state(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::Continue => self.advance(),
            StateTransition::Back => {
                self.state = match &self.state {
                    WizardState::SelectTools(_) => WizardState::Welcome(WelcomeState),
                    WizardState::SelectFeatures(_) => {
                        WizardState::SelectTools(SelectState::default())
                    }
                    _ => return,
                };
            }
            StateTransition::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Forward transition. Two phases so the borrow of the old state ends
    /// before the install task is spawned.
    fn advance(&mut self) {
        let next = match &mut self.state {
            WizardState::Welcome(_) => Advance::Tools,
            WizardState::SelectTools(_) => Advance::Features,
            WizardState::SelectFeatures(_) => Advance::Install,
            WizardState::Installing(installing) => Advance::Done {
                warnings: std::mem::take(&mut installing.warnings),
                aborted: installing.aborted,
            },
            WizardState::Done(_) => Advance::Quit,
        };

        match next {
            Advance::Tools => {
                self.state = WizardState::SelectTools(SelectState::default());
            }
            Advance::Features => {
                self.state = WizardState::SelectFeatures(SelectState::default());
            }
            Advance::Install => {
                let steps = build_steps(&self.session.tools, &self.session.features);
                let state = InstallingState::from_steps(&steps);
                self.spawn_install(steps);
                self.state = WizardState::Installing(state);
            }
            Advance::Done { warnings, aborted } => {
                self.state = WizardState::Done(DoneState {
                    tools: self
                        .session
                        .selected_tools()
                        .map(|t| t.kind.display_name().to_string())
                        .collect(),
                    features: self
                        .session
                        .selected_features()
                        .map(|f| f.name.clone())
                        .collect(),
                    warnings,
                    aborted,
                });
            }
            Advance::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn request_abort(&mut self) {
        self.abort_flag.store(true, Ordering::SeqCst);
        if let WizardState::Installing(state) = &mut self.state {
            state.abort_requested = true;
        }
    }

    /// Run the install steps sequentially in a background task, reporting
    /// progress through the event channel.
    fn spawn_install(&mut self, steps: Vec<InstallStep>) {
        self.abort_flag.store(false, Ordering::SeqCst);
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let abort = self.abort_flag.clone();
        let features = self.session.features.clone();
        let installer = Installer::new(
            self.paths.home.clone(),
            self.paths.source_root.clone(),
        )
        .with_step_delay(STEP_DELAY);

        tokio::spawn(async move {
            run_steps(&installer, &steps, &features, &abort, &tx).await;
        });
    }
}

/// Drive a full install run, reporting per-step progress through `tx`.
///
/// A failed step is downgraded to a skip warning and the run continues with
/// the next step. The abort flag is only checked between steps, so an abort
/// never interrupts a step already underway; it only prevents steps that
/// have not started yet.
pub async fn run_steps(
    installer: &Installer,
    steps: &[InstallStep],
    features: &[Feature],
    abort: &AtomicBool,
    tx: &tokio::sync::mpsc::UnboundedSender<AppEvent>,
) {
    for (index, step) in steps.iter().enumerate() {
        if abort.load(Ordering::SeqCst) {
            let _ = tx.send(AppEvent::InstallFinished { aborted: true });
            return;
        }
        let _ = tx.send(AppEvent::StepStarted(index));
        match installer.run_step(step, features) {
            Ok(StepOutcome::Completed) => {
                let _ = tx.send(AppEvent::StepCompleted(index));
            }
            Ok(StepOutcome::Skipped(warning)) => {
                warn!(step = step.label(), warning = %warning, "install step skipped");
                let _ = tx.send(AppEvent::StepSkipped { index, warning });
            }
            Err(e) => {
                let warning = e.to_string();
                warn!(step = step.label(), error = %warning, "install step failed");
                let _ = tx.send(AppEvent::StepSkipped { index, warning });
            }
        }
        time::sleep(installer.step_delay()).await;
    }
    let _ = tx.send(AppEvent::InstallFinished { aborted: false });
}

enum SelectOutcome {
    Toggle(usize),
    Transition(StateTransition),
    None,
}

enum Advance {
    Tools,
    Features,
    Install,
    Done { warnings: Vec<String>, aborted: bool },
    Quit,
}
