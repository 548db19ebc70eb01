use nexus_installer::catalog::Session;
use nexus_installer::installer::build_steps;
use nexus_installer::tui::state::{InstallingState, StepStatus, WelcomeState, WizardState};

#[test]
fn test_wizard_state_names() {
    assert_eq!(WizardState::Welcome(WelcomeState).name(), "Welcome");
    assert_eq!(
        WizardState::SelectTools(Default::default()).name(),
        "SelectTools"
    );
    assert_eq!(
        WizardState::SelectFeatures(Default::default()).name(),
        "SelectFeatures"
    );
    assert_eq!(
        WizardState::Installing(InstallingState::default()).name(),
        "Installing"
    );
}

#[test]
fn test_installing_state_mirrors_step_plan() {
    let session = Session::new();
    let steps = build_steps(&session.tools, &session.features);
    let state = InstallingState::from_steps(&steps);

    assert_eq!(state.steps.len(), steps.len());
    assert!(state
        .steps
        .iter()
        .all(|s| s.status == StepStatus::Pending));
    assert_eq!(state.steps[0].label, steps[0].label());
    assert_eq!(state.completed_count(), 0);
}
