use super::model::Scenario;
use crate::error::IntegrityError;
use ahash::AHashSet;
use tracing::trace;

impl Scenario {
    /// Checks the structural invariants of a scenario.
    ///
    /// Every connection must reference existing modules, module ids and
    /// artifact filenames must be unique, and every structural artifact must
    /// parse back into exactly the scenario's modules and connections.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        if self.modules.is_empty() {
            return Err(IntegrityError::NoModules);
        }

        let mut ids = AHashSet::with_capacity(self.modules.len());
        for module in &self.modules {
            if !ids.insert(module.id.as_str()) {
                return Err(IntegrityError::DuplicateModuleId(module.id.clone()));
            }
        }

        for connection in &self.connections {
            for endpoint in [&connection.from, &connection.to] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(IntegrityError::DanglingConnection {
                        from: connection.from.clone(),
                        to: connection.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        let mut filenames = AHashSet::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            if !filenames.insert(artifact.filename.as_str()) {
                return Err(IntegrityError::DuplicateFilename(artifact.filename.clone()));
            }
            if !artifact.format.is_structural() {
                continue;
            }

            let (modules, connections) = artifact
                .parse_blueprint()
                .map_err(|source| IntegrityError::UnreadableArtifact {
                    filename: artifact.filename.clone(),
                    source,
                })?
                .into_graph();
            if modules != self.modules || connections != self.connections {
                return Err(IntegrityError::GraphMismatch(artifact.filename.clone()));
            }
            trace!(filename = %artifact.filename, "artifact round-trip verified");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::IntegrityError;
    use crate::generate;

    #[test]
    fn generated_scenario_passes_verification() {
        let scenario = generate("Si le ticket est urgent, notifie Slack");
        scenario.verify().unwrap();
    }

    #[test]
    fn dangling_connection_is_reported() {
        let mut scenario = generate("Analyse des tickets Zendesk et réponse via Slack");
        scenario.connections[0].to = "42".to_string();
        match scenario.verify() {
            Err(IntegrityError::DanglingConnection { missing, .. }) => assert_eq!(missing, "42"),
            other => panic!("Expected DanglingConnection, got {:?}", other),
        }
    }

    #[test]
    fn tampered_artifact_is_reported() {
        let mut scenario = generate("Analyse des tickets Zendesk et réponse via Slack");
        scenario.modules[0].label = "Autre libellé".to_string();
        assert!(matches!(
            scenario.verify(),
            Err(IntegrityError::GraphMismatch(_))
        ));
    }

    #[test]
    fn duplicate_filenames_are_reported() {
        let mut scenario = generate("Publie dans Notion");
        let copy = scenario.artifacts[0].clone();
        scenario.artifacts.push(copy);
        assert!(matches!(
            scenario.verify(),
            Err(IntegrityError::DuplicateFilename(_))
        ));
    }
}
