pub mod catalog;
pub mod cli;
pub mod error;
pub mod installer;
pub mod io;
pub mod tui;

pub use error::{InstallerError, Result};
