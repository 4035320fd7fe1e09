use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a module within the automation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Starts the scenario. Always at index 0.
    Trigger,
    /// Calls an external service.
    Action,
    /// An AI agent step (analysis, summary, reply drafting, ...).
    Ai,
    /// Reserved for conditional routing; never produced by the linear policy.
    Router,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Trigger => "trigger",
            ModuleKind::Action => "action",
            ModuleKind::Ai => "ai",
            ModuleKind::Router => "router",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the generated automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    pub label: String,
    pub purpose: String,
    pub app: String,
}

/// A directed edge between two modules. `condition == None` means the edge
/// always fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// The closed set of formats an artifact can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Make-style blueprint, pretty-printed JSON.
    Json,
    /// The same blueprint as YAML.
    Yaml,
    /// Mermaid flowchart of the pipeline.
    Mermaid,
    /// Plain-text summary for humans.
    Text,
}

impl ArtifactFormat {
    /// Every supported format, in rendering order.
    pub const ALL: [ArtifactFormat; 4] = [
        ArtifactFormat::Json,
        ArtifactFormat::Yaml,
        ArtifactFormat::Mermaid,
        ArtifactFormat::Text,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::Mermaid => "mmd",
            ArtifactFormat::Text => "txt",
        }
    }

    /// Whether artifacts in this format can be parsed back into the module graph.
    pub fn is_structural(&self) -> bool {
        matches!(self, ArtifactFormat::Json | ArtifactFormat::Yaml)
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::Mermaid => "mermaid",
            ArtifactFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// A complete file representation of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub filename: String,
    pub format: ArtifactFormat,
    pub contents: String,
}

/// The generated automation: metadata, the module pipeline, its connections
/// and the rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub summary: String,
    pub objective: String,
    pub prompt_breakdown: Vec<String>,
    pub estimated_run_time: String,
    pub modules: Vec<Module>,
    pub connections: Vec<Connection>,
    pub artifacts: Vec<Artifact>,
}

impl Scenario {
    /// Looks up a module by its id.
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Looks up an artifact by format.
    pub fn artifact(&self, format: ArtifactFormat) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.format == format)
    }

    /// The connection leading into the given module, if any.
    pub fn incoming(&self, module_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.to == module_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_kind_serializes_as_type_tag() {
        let module = Module {
            id: "0".to_string(),
            kind: ModuleKind::Ai,
            label: "Résumer avec l'IA".to_string(),
            purpose: "Un agent IA produit une synthèse concise.".to_string(),
            app: "OpenAI".to_string(),
        };
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["type"], "ai");
        assert_eq!(json["app"], "OpenAI");
    }

    #[test]
    fn scenario_uses_camel_case_on_the_wire() {
        let scenario = Scenario {
            name: "n".to_string(),
            summary: "s".to_string(),
            objective: "o".to_string(),
            prompt_breakdown: vec![],
            estimated_run_time: "~1 min".to_string(),
            modules: vec![],
            connections: vec![],
            artifacts: vec![],
        };
        let json = serde_json::to_value(&scenario).unwrap();
        assert!(json.get("promptBreakdown").is_some());
        assert_eq!(json["estimatedRunTime"], "~1 min");
    }

    #[test]
    fn unconditional_connection_omits_condition() {
        let connection = Connection {
            from: "0".to_string(),
            to: "1".to_string(),
            condition: None,
        };
        let json = serde_json::to_value(&connection).unwrap();
        assert!(json.get("condition").is_none());

        let parsed: Connection = serde_json::from_str(r#"{"from":"0","to":"1"}"#).unwrap();
        assert_eq!(parsed, connection);
    }

    #[test]
    fn mermaid_uses_short_extension() {
        assert_eq!(ArtifactFormat::Mermaid.extension(), "mmd");
        assert_eq!(ArtifactFormat::Mermaid.to_string(), "mermaid");
        assert!(!ArtifactFormat::Text.is_structural());
    }
}
