use clap::Parser;

/// Nexus: interactive installer for AI assistant configuration
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(version)]
#[command(about = "Interactive installer for AI assistant configuration")]
#[command(
    long_about = "Nexus deploys shared instruction files and command prompts into the \
per-tool directories of Claude Code, Gemini CLI and Codex CLI. Run with no \
arguments to launch the full-screen wizard."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments_launches_wizard() {
        let cli = Cli::try_parse_from(["nexus"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["nexus", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["nexus", "--force"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
