//! Executes install steps against a home directory and a source catalog.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::catalog::{Feature, Tool, ToolKind};
use crate::installer::{enablement, managed, planner, planner::InstallAction};
use crate::Result;

/// Outcome of one install step. A skip carries the warning shown to the user;
/// it never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Skipped(String),
}

/// One unit of work in a run. Global-config merges come first, once per
/// selected tool, so the per-feature copies never race the merged file.
#[derive(Debug, Clone)]
pub enum InstallStep {
    MergeConfig { tool: ToolKind, label: String },
    CopyCommands(InstallAction),
}

impl InstallStep {
    pub fn label(&self) -> &str {
        match self {
            InstallStep::MergeConfig { label, .. } => label,
            InstallStep::CopyCommands(action) => &action.label,
        }
    }
}

/// Full step list for a run: one merge per selected tool, then the planner's
/// (feature, tool) actions in order.
pub fn build_steps(tools: &[Tool], features: &[Feature]) -> Vec<InstallStep> {
    let mut steps: Vec<InstallStep> = tools
        .iter()
        .filter(|t| t.selected)
        .map(|t| InstallStep::MergeConfig {
            tool: t.kind,
            label: format!("Updating {} global config", t.kind.display_name()),
        })
        .collect();
    steps.extend(
        planner::plan(tools, features)
            .into_iter()
            .map(InstallStep::CopyCommands),
    );
    steps
}

/// Runs install steps. `step_delay` is pure UI pacing between steps and has
/// no correctness contract; tests set it to zero.
#[derive(Debug, Clone)]
pub struct Installer {
    home: PathBuf,
    source_root: PathBuf,
    step_delay: Duration,
}

impl Installer {
    pub fn new(home: PathBuf, source_root: PathBuf) -> Self {
        Self {
            home,
            source_root,
            step_delay: Duration::ZERO,
        }
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Source directory for one feature's per-tool files, e.g.
    /// `<root>/features/continuity/claude`.
    fn feature_dir(&self, feature_id: &str, tool: ToolKind) -> PathBuf {
        self.source_root
            .join("features")
            .join(feature_id)
            .join(tool.id())
    }

    fn tool_base_dir(&self, tool: ToolKind) -> PathBuf {
        self.home.join(tool.base_dir_name())
    }

    /// Execute one step. I/O errors propagate to the caller, which downgrades
    /// them to a per-step warning; the rest of the run continues.
    pub fn run_step(&self, step: &InstallStep, features: &[Feature]) -> Result<StepOutcome> {
        match step {
            InstallStep::MergeConfig { tool, .. } => self.merge_global_config(*tool, features),
            InstallStep::CopyCommands(action) => self.copy_feature_files(action),
        }
    }

    /// Rebuild a tool's managed block from all selected features' fragments.
    /// A missing base directory means the user has never run the tool; the
    /// merge is skipped with a warning rather than creating the directory.
    pub fn merge_global_config(&self, tool: ToolKind, features: &[Feature]) -> Result<StepOutcome> {
        let base = self.tool_base_dir(tool);
        if !base.is_dir() {
            let warning = format!(
                "{} not found; run {} once before installing",
                base.display(),
                tool.display_name()
            );
            return Ok(StepOutcome::Skipped(warning));
        }

        let fragments: Vec<PathBuf> = features
            .iter()
            .filter(|f| f.selected)
            .map(|f| self.feature_dir(&f.id, tool).join(tool.config_file_name()))
            .collect();

        let dest = base.join(tool.config_file_name());
        managed::write_managed_block(&dest, &fragments)?;
        info!(tool = tool.id(), dest = %dest.display(), "merged global config");
        Ok(StepOutcome::Completed)
    }

    /// Copy one feature's command/prompt files into the tool's directory.
    pub fn copy_feature_files(&self, action: &InstallAction) -> Result<StepOutcome> {
        let base = self.tool_base_dir(action.tool);
        if !base.is_dir() {
            let warning = format!(
                "{} not found; skipping {}",
                base.display(),
                action.feature_id
            );
            return Ok(StepOutcome::Skipped(warning));
        }

        match action.tool {
            ToolKind::Claude => {
                let dst = base.join("commands");
                let src = self.feature_dir(&action.feature_id, action.tool).join("commands");
                copy_files_with_extension(&src, &dst, action.tool.command_extension())?;
            }
            ToolKind::Codex => {
                let dst = base.join("prompts");
                let src = self.feature_dir(&action.feature_id, action.tool).join("prompts");
                copy_files_with_extension(&src, &dst, action.tool.command_extension())?;
            }
            ToolKind::Gemini => {
                let ext_src = self
                    .feature_dir(&action.feature_id, action.tool)
                    .join("extensions")
                    .join(&action.feature_id);
                let ext_dst = base.join("extensions").join(&action.feature_id);

                copy_files_with_extension(
                    &ext_src.join("commands"),
                    &ext_dst.join("commands"),
                    action.tool.command_extension(),
                )?;

                let manifest = ext_src.join("gemini-extension.json");
                if manifest.is_file() {
                    fs::create_dir_all(&ext_dst)?;
                    fs::copy(&manifest, ext_dst.join("gemini-extension.json"))?;
                }

                enablement::enable_extension(
                    &base.join("extensions").join("extension-enablement.json"),
                    &action.feature_id,
                )?;
            }
        }

        info!(
            tool = action.tool.id(),
            feature = %action.feature_id,
            "installed command files"
        );
        Ok(StepOutcome::Completed)
    }
}

/// Copy every `*.<ext>` file from `src_dir` into `dst_dir`, overwriting
/// same-named files. The destination directory is created either way; a
/// missing source directory just means the feature ships nothing for this
/// tool.
fn copy_files_with_extension(src_dir: &Path, dst_dir: &Path, ext: &str) -> Result<usize> {
    fs::create_dir_all(dst_dir)?;
    if !src_dir.is_dir() {
        debug!(src = %src_dir.display(), "no source directory, nothing to copy");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            warn!(file = %path.display(), "ignoring file with unexpected extension");
            continue;
        }
        fs::copy(path, dst_dir.join(entry.file_name()))?;
        copied += 1;
    }
    Ok(copied)
}
