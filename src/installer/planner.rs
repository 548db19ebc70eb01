//! Derives the ordered list of install actions from the session selection.

use crate::catalog::{Feature, Tool, ToolKind};

/// One per-tool, per-feature install action. Derived at confirm time, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallAction {
    pub tool: ToolKind,
    pub feature_id: String,
    pub label: String,
}

/// Produce one action per (feature, tool) pair where both are selected,
/// iterating features in catalog order with tools nested inside.
pub fn plan(tools: &[Tool], features: &[Feature]) -> Vec<InstallAction> {
    let mut actions = Vec::new();
    for feature in features.iter().filter(|f| f.selected) {
        for tool in tools.iter().filter(|t| t.selected) {
            actions.push(InstallAction {
                tool: tool.kind,
                feature_id: feature.id.clone(),
                label: format!("Installing {} for {}", feature.name, tool.kind.display_name()),
            });
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(kind: ToolKind, selected: bool) -> Tool {
        Tool::new(kind, "", selected)
    }

    fn feature(id: &str, selected: bool) -> Feature {
        Feature::new(id, id, "", selected)
    }

    #[test]
    fn test_plan_is_feature_major_tool_minor() {
        let tools = vec![
            tool(ToolKind::Claude, true),
            tool(ToolKind::Gemini, false),
            tool(ToolKind::Codex, true),
        ];
        let features = vec![feature("f1", true), feature("f2", true)];

        let actions = plan(&tools, &features);
        let pairs: Vec<_> = actions
            .iter()
            .map(|a| (a.feature_id.as_str(), a.tool))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("f1", ToolKind::Claude),
                ("f1", ToolKind::Codex),
                ("f2", ToolKind::Claude),
                ("f2", ToolKind::Codex),
            ]
        );
    }

    #[test]
    fn test_plan_empty_when_nothing_selected() {
        let tools = vec![tool(ToolKind::Claude, false)];
        let features = vec![feature("f1", true)];
        assert!(plan(&tools, &features).is_empty());

        let tools = vec![tool(ToolKind::Claude, true)];
        let features = vec![feature("f1", false)];
        assert!(plan(&tools, &features).is_empty());
    }

    #[test]
    fn test_action_labels() {
        let tools = vec![tool(ToolKind::Gemini, true)];
        let features = vec![feature("continuity", true)];
        let actions = plan(&tools, &features);
        assert_eq!(actions[0].label, "Installing continuity for Gemini CLI");
    }
}
