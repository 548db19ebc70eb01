//! Wizard state machine.

use crate::installer::InstallStep;

/// Main state machine for the wizard. One variant per screen, each carrying
/// that screen's state.
#[derive(Debug)]
pub enum WizardState {
    Welcome(WelcomeState),
    SelectTools(SelectState),
    SelectFeatures(SelectState),
    Installing(InstallingState),
    Done(DoneState),
}

#[derive(Debug, Default)]
pub struct WelcomeState;

/// Cursor position for a checkbox list screen. The list contents themselves
/// live in the session, not here.
#[derive(Debug, Default)]
pub struct SelectState {
    pub cursor: usize,
}

/// State for the installation progress screen.
#[derive(Debug, Default)]
pub struct InstallingState {
    pub steps: Vec<StepItem>,
    pub warnings: Vec<String>,
    pub abort_requested: bool,
    pub finished: bool,
    pub aborted: bool,
}

impl InstallingState {
    pub fn from_steps(steps: &[InstallStep]) -> Self {
        Self {
            steps: steps
                .iter()
                .map(|s| StepItem {
                    label: s.label().to_string(),
                    status: StepStatus::Pending,
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn completed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Done | StepStatus::Skipped(_)))
            .count()
    }
}

#[derive(Debug)]
pub struct StepItem {
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
    Skipped(String),
}

/// Summary shown on the final screen.
#[derive(Debug)]
pub struct DoneState {
    pub tools: Vec<String>,
    pub features: Vec<String>,
    pub warnings: Vec<String>,
    pub aborted: bool,
}

/// State transitions for the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    Continue,
    Back,
    Quit,
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Welcome(_) => "Welcome",
            WizardState::SelectTools(_) => "SelectTools",
            WizardState::SelectFeatures(_) => "SelectFeatures",
            WizardState::Installing(_) => "Installing",
            WizardState::Done(_) => "Done",
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(
            self,
            WizardState::SelectTools(_) | WizardState::SelectFeatures(_)
        )
    }

    /// Installing only honors quit as an abort request between steps.
    pub fn can_quit(&self) -> bool {
        !matches!(self, WizardState::Installing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(WizardState::Welcome(WelcomeState).name(), "Welcome");
        assert_eq!(
            WizardState::SelectTools(SelectState::default()).name(),
            "SelectTools"
        );
        assert_eq!(
            WizardState::Installing(InstallingState::default()).name(),
            "Installing"
        );
    }

    #[test]
    fn test_back_allowed_only_on_selection_screens() {
        assert!(!WizardState::Welcome(WelcomeState).can_go_back());
        assert!(WizardState::SelectTools(SelectState::default()).can_go_back());
        assert!(WizardState::SelectFeatures(SelectState::default()).can_go_back());
        assert!(!WizardState::Installing(InstallingState::default()).can_go_back());
    }

    #[test]
    fn test_installing_defers_quit() {
        assert!(WizardState::Welcome(WelcomeState).can_quit());
        assert!(!WizardState::Installing(InstallingState::default()).can_quit());
    }

    #[test]
    fn test_completed_count_includes_skips() {
        let mut state = InstallingState::default();
        state.steps = vec![
            StepItem {
                label: "a".into(),
                status: StepStatus::Done,
            },
            StepItem {
                label: "b".into(),
                status: StepStatus::Skipped("warn".into()),
            },
            StepItem {
                label: "c".into(),
                status: StepStatus::Active,
            },
        ];
        assert_eq!(state.completed_count(), 2);
    }
}
