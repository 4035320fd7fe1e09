use super::{DESIGNER_SPACING, slug};
use crate::error::ArtifactError;
use crate::scenario::{Artifact, ArtifactFormat, Connection, Module, Scenario};
use serde::{Deserialize, Serialize};

pub const BLUEPRINT_VERSION: u32 = 1;

/// Importable description of a scenario, shared by the JSON and YAML
/// artifacts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub name: String,
    pub flow: Vec<BlueprintModule>,
    pub connections: Vec<Connection>,
    pub metadata: BlueprintMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintModule {
    #[serde(flatten)]
    pub module: Module,
    /// Connector reference, `{app slug}:{module type}`.
    pub module_ref: String,
    pub designer: Designer,
}

/// Canvas position of a module.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Designer {
    pub x: i64,
    pub y: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintMetadata {
    pub version: u32,
    pub summary: String,
    pub objective: String,
    pub estimated_run_time: String,
}

impl Blueprint {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let flow = scenario
            .modules
            .iter()
            .enumerate()
            .map(|(index, module)| BlueprintModule {
                module: module.clone(),
                module_ref: format!("{}:{}", slug(&module.app), module.kind),
                designer: Designer {
                    x: index as i64 * DESIGNER_SPACING,
                    y: 0,
                },
            })
            .collect();

        Self {
            name: scenario.name.clone(),
            flow,
            connections: scenario.connections.clone(),
            metadata: BlueprintMetadata {
                version: BLUEPRINT_VERSION,
                summary: scenario.summary.clone(),
                objective: scenario.objective.clone(),
                estimated_run_time: scenario.estimated_run_time.clone(),
            },
        }
    }

    /// The module graph carried by the blueprint, in blueprint order.
    pub fn into_graph(self) -> (Vec<Module>, Vec<Connection>) {
        let modules = self.flow.into_iter().map(|m| m.module).collect();
        (modules, self.connections)
    }
}

impl Artifact {
    /// Parses a JSON or YAML artifact back into its blueprint.
    pub fn parse_blueprint(&self) -> Result<Blueprint, ArtifactError> {
        match self.format {
            ArtifactFormat::Json => Ok(serde_json::from_str(&self.contents)?),
            ArtifactFormat::Yaml => Ok(serde_yaml::from_str(&self.contents)?),
            ArtifactFormat::Mermaid | ArtifactFormat::Text => Err(ArtifactError::NotStructural {
                filename: self.filename.clone(),
                format: self.format,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn flow_carries_module_refs_and_positions() {
        let scenario = generate("Analyse des tickets Zendesk et réponse via Slack");
        let blueprint = Blueprint::from_scenario(&scenario);
        let refs: Vec<_> = blueprint.flow.iter().map(|m| m.module_ref.as_str()).collect();
        assert_eq!(refs, vec!["zendesk:trigger", "openai:ai", "slack:action"]);
        assert_eq!(blueprint.flow[2].designer, Designer { x: 600, y: 0 });
    }

    #[test]
    fn json_blueprint_flattens_module_fields() {
        let scenario = generate("Publie dans Notion");
        let artifact = scenario.artifact(ArtifactFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&artifact.contents).unwrap();
        assert_eq!(value["flow"][1]["type"], "action");
        assert_eq!(value["flow"][1]["app"], "Notion");
        assert_eq!(value["flow"][1]["moduleRef"], "notion:action");
        assert_eq!(value["metadata"]["version"], BLUEPRINT_VERSION);
    }

    #[test]
    fn both_structural_formats_round_trip() {
        let scenario = generate("Si le ticket est urgent, notifie Slack");
        for format in [ArtifactFormat::Json, ArtifactFormat::Yaml] {
            let (modules, connections) = scenario
                .artifact(format)
                .unwrap()
                .parse_blueprint()
                .unwrap()
                .into_graph();
            assert_eq!(modules, scenario.modules);
            assert_eq!(connections, scenario.connections);
        }
    }

    #[test]
    fn text_artifacts_are_not_structural() {
        let scenario = generate("Publie dans Notion");
        let artifact = scenario.artifact(ArtifactFormat::Text).unwrap();
        assert!(matches!(
            artifact.parse_blueprint(),
            Err(ArtifactError::NotStructural { format: ArtifactFormat::Text, .. })
        ));
    }
}
