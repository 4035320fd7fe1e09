use crate::error::BundleError;
use crate::scenario::Scenario;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// A generated scenario stored together with the prompt that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScenarioBundle {
    pub prompt: String,
    pub scenario: Scenario,
}

/// Bincode layout of a bundle. The scenario is stored in its JSON wire form
/// since bincode cannot decode fields that are omitted when absent.
#[derive(Serialize, Deserialize)]
struct StoredBundle {
    prompt: String,
    scenario: String,
}

impl ScenarioBundle {
    pub fn new(prompt: impl Into<String>, scenario: Scenario) -> Self {
        Self {
            prompt: prompt.into(),
            scenario,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BundleError> {
        let stored = StoredBundle {
            prompt: self.prompt.clone(),
            scenario: serde_json::to_string(&self.scenario)
                .map_err(|e| BundleError::Generic(format!("Serialization failed: {}", e)))?,
        };
        encode_to_vec(&stored, standard())
            .map_err(|e| BundleError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the bundle to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BundleError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            BundleError::Generic(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            BundleError::Generic(format!("Could not write to file '{}': {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Loads a bundle from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            BundleError::Generic(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            BundleError::Generic(format!("Could not read from file '{}': {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a bundle from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BundleError> {
        let (stored, _): (StoredBundle, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| BundleError::Generic(format!("Deserialization failed: {}", e)))?;
        let scenario = serde_json::from_str(&stored.scenario)
            .map_err(|e| BundleError::Generic(format!("Deserialization failed: {}", e)))?;
        Ok(Self {
            prompt: stored.prompt,
            scenario,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn bundle_survives_bytes() {
        let prompt = "Si le ticket est urgent, notifie Slack";
        let bundle = ScenarioBundle::new(prompt, generate(prompt));
        let bytes = bundle.to_bytes().unwrap();
        assert_eq!(ScenarioBundle::from_bytes(&bytes).unwrap(), bundle);
    }

    #[test]
    fn unconditional_edges_survive_bytes() {
        let prompt = "Analyse des tickets Zendesk et réponse via Slack";
        let bundle = ScenarioBundle::new(prompt, generate(prompt));
        assert!(bundle.scenario.connections.iter().all(|c| c.condition.is_none()));
        let bytes = bundle.to_bytes().unwrap();
        assert_eq!(ScenarioBundle::from_bytes(&bytes).unwrap(), bundle);
    }

    #[test]
    fn garbage_is_rejected() {
        let result = ScenarioBundle::from_bytes(&[0xff, 0x00, 0x13]);
        assert!(matches!(result, Err(BundleError::Generic(msg)) if msg.starts_with("Deserialization failed")));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = ScenarioBundle::from_file("/nonexistent/scenario.bin");
        assert!(matches!(result, Err(BundleError::Generic(msg)) if msg.contains("Could not open file")));
    }
}
