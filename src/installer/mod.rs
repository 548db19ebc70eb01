//! Install planning and execution.

pub mod enablement;
pub mod managed;
pub mod planner;
pub mod runner;

pub use planner::{plan, InstallAction};
pub use runner::{build_steps, InstallStep, Installer, StepOutcome};
