//! Full-screen wizard.

pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::io::paths::InstallPaths;
use crate::Result;

/// Entry point for the wizard.
pub async fn run(paths: InstallPaths) -> Result<()> {
    let app = app::App::new(paths);
    app.run().await
}
