//! Static tool and feature catalogs plus per-session selection state.

/// Known AI assistant integrations, each with its own directory layout
/// convention under the user's home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Claude,
    Gemini,
    Codex,
}

impl ToolKind {
    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::Claude => "claude",
            ToolKind::Gemini => "gemini",
            ToolKind::Codex => "codex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Claude => "Claude Code",
            ToolKind::Gemini => "Gemini CLI",
            ToolKind::Codex => "Codex CLI",
        }
    }

    /// Base directory name under the user's home, e.g. `.claude`.
    pub fn base_dir_name(&self) -> &'static str {
        match self {
            ToolKind::Claude => ".claude",
            ToolKind::Gemini => ".gemini",
            ToolKind::Codex => ".codex",
        }
    }

    /// File name of the tool's global instructions file, which holds the
    /// managed block.
    pub fn config_file_name(&self) -> &'static str {
        match self {
            ToolKind::Claude => "CLAUDE.md",
            ToolKind::Gemini => "GEMINI.md",
            ToolKind::Codex => "AGENTS.md",
        }
    }

    /// Extension of the command/prompt files this tool consumes.
    pub fn command_extension(&self) -> &'static str {
        match self {
            ToolKind::Claude => "md",
            ToolKind::Gemini => "toml",
            ToolKind::Codex => "md",
        }
    }
}

/// A configurable AI assistant. `selected` is toggled by the user during the
/// wizard session and is never persisted.
#[derive(Debug, Clone)]
pub struct Tool {
    pub kind: ToolKind,
    pub description: String,
    pub selected: bool,
}

impl Tool {
    pub fn new(kind: ToolKind, description: &str, selected: bool) -> Self {
        Self {
            kind,
            description: description.to_string(),
            selected,
        }
    }
}

/// An optional feature bundle supplying config fragments and command files.
#[derive(Debug, Clone)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub selected: bool,
}

impl Feature {
    pub fn new(id: &str, name: &str, description: &str, selected: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            selected,
        }
    }
}

/// Selection state for one wizard run. Owned by the wizard controller and
/// passed explicitly wherever the selection matters.
#[derive(Debug, Clone)]
pub struct Session {
    pub tools: Vec<Tool>,
    pub features: Vec<Feature>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            tools: vec![
                Tool::new(ToolKind::Claude, "Anthropic's AI coding assistant", true),
                Tool::new(ToolKind::Gemini, "Google's AI command-line interface", true),
                Tool::new(ToolKind::Codex, "OpenAI's coding assistant", false),
            ],
            features: vec![
                Feature::new(
                    "continuity",
                    "continuity",
                    "Session continuity tracking across projects",
                    true,
                ),
                Feature::new(
                    "maestro",
                    "maestro",
                    "Multi-agent orchestration with hub-spoke model",
                    false,
                ),
            ],
        }
    }

    pub fn toggle_tool(&mut self, index: usize) {
        if let Some(tool) = self.tools.get_mut(index) {
            tool.selected = !tool.selected;
        }
    }

    pub fn toggle_feature(&mut self, index: usize) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.selected = !feature.selected;
        }
    }

    pub fn selected_tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter().filter(|t| t.selected)
    }

    pub fn selected_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.selected)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
