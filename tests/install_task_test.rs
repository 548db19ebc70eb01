use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::sync::mpsc;

use nexus_installer::catalog::{Feature, Tool, ToolKind};
use nexus_installer::installer::{build_steps, Installer};
use nexus_installer::tui::app::run_steps;
use nexus_installer::tui::events::AppEvent;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn seed_catalog(root: &Path) {
    let feature = root.join("features/continuity");
    write_file(&feature.join("claude/CLAUDE.md"), "Track session state.\n");
    write_file(&feature.join("claude/commands/handoff.md"), "# handoff\n");
    write_file(&feature.join("gemini/GEMINI.md"), "Track session state.\n");
    write_file(
        &feature.join("gemini/extensions/continuity/gemini-extension.json"),
        r#"{"name": "continuity", "version": "1.0.0"}"#,
    );
    write_file(
        &feature.join("gemini/extensions/continuity/commands/handoff.toml"),
        "description = \"handoff\"\n",
    );
}

fn claude_and_gemini() -> Vec<Tool> {
    vec![
        Tool::new(ToolKind::Claude, "", true),
        Tool::new(ToolKind::Gemini, "", true),
    ]
}

fn continuity() -> Vec<Feature> {
    vec![Feature::new("continuity", "continuity", "", true)]
}

fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn failed_step_is_skipped_and_run_continues() {
    let home = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    seed_catalog(source.path());
    // A directory where the merged config file belongs makes the Claude
    // merge fail with an I/O error.
    fs::create_dir_all(home.path().join(".claude/CLAUDE.md")).unwrap();
    fs::create_dir_all(home.path().join(".gemini")).unwrap();

    let tools = claude_and_gemini();
    let features = continuity();
    let steps = build_steps(&tools, &features);
    assert_eq!(steps.len(), 4);

    let installer = Installer::new(home.path().to_path_buf(), source.path().to_path_buf());
    let abort = AtomicBool::new(false);
    let (tx, mut rx) = mpsc::unbounded_channel();

    run_steps(&installer, &steps, &features, &abort, &tx).await;
    drop(tx);

    let mut completed = Vec::new();
    let mut skipped = Vec::new();
    let mut finished_aborted = None;
    for event in drain(&mut rx) {
        match event {
            AppEvent::StepCompleted(index) => completed.push(index),
            AppEvent::StepSkipped { index, .. } => skipped.push(index),
            AppEvent::InstallFinished { aborted } => finished_aborted = Some(aborted),
            _ => {}
        }
    }

    assert_eq!(skipped, vec![0]);
    assert_eq!(completed, vec![1, 2, 3]);
    assert_eq!(finished_aborted, Some(false));

    // The steps after the failure really ran.
    let gemini_config = fs::read_to_string(home.path().join(".gemini/GEMINI.md")).unwrap();
    assert!(gemini_config.contains("Track session state."));
    assert!(home.path().join(".claude/commands/handoff.md").is_file());
}

#[tokio::test]
async fn abort_after_a_step_leaves_later_steps_untouched() {
    let home = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    seed_catalog(source.path());
    fs::create_dir_all(home.path().join(".claude")).unwrap();
    fs::create_dir_all(home.path().join(".gemini")).unwrap();

    let tools = claude_and_gemini();
    let features = continuity();
    let steps = build_steps(&tools, &features);

    // The pacing delay keeps the task parked between steps long enough for
    // the test to flip the abort flag after the first completion.
    let installer = Installer::new(home.path().to_path_buf(), source.path().to_path_buf())
        .with_step_delay(Duration::from_millis(200));
    let abort = Arc::new(AtomicBool::new(false));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let task = {
        let features = features.clone();
        let abort = abort.clone();
        tokio::spawn(async move {
            run_steps(&installer, &steps, &features, &abort, &tx).await;
        })
    };

    let mut finished_aborted = None;
    while let Some(event) = rx.recv().await {
        match event {
            AppEvent::StepStarted(index) => assert_eq!(index, 0),
            AppEvent::StepCompleted(0) => abort.store(true, Ordering::SeqCst),
            AppEvent::InstallFinished { aborted } => {
                finished_aborted = Some(aborted);
                break;
            }
            _ => {}
        }
    }
    task.await.unwrap();

    assert_eq!(finished_aborted, Some(true));
    assert!(home.path().join(".claude/CLAUDE.md").is_file());
    assert!(!home.path().join(".gemini/GEMINI.md").exists());
}

#[tokio::test]
async fn abort_before_the_first_step_runs_nothing() {
    let home = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    seed_catalog(source.path());
    fs::create_dir_all(home.path().join(".claude")).unwrap();

    let tools = vec![Tool::new(ToolKind::Claude, "", true)];
    let features = continuity();
    let steps = build_steps(&tools, &features);

    let installer = Installer::new(home.path().to_path_buf(), source.path().to_path_buf());
    let abort = AtomicBool::new(true);
    let (tx, mut rx) = mpsc::unbounded_channel();

    run_steps(&installer, &steps, &features, &abort, &tx).await;
    drop(tx);

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        AppEvent::InstallFinished { aborted: true }
    ));
    assert!(!home.path().join(".claude/CLAUDE.md").exists());
}
