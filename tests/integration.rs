//! Integration tests for Scenario Forge
//!
//! End-to-end tests that run whole prompts through the default generator.
//!
mod common;
use common::*;
use scenario_forge::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_zendesk_prompt_builds_a_linear_pipeline() {
        let scenario = generate(ZENDESK_PROMPT);

        assert_eq!(apps(&scenario), vec!["Zendesk", "OpenAI", "Slack"]);
        assert_eq!(
            kinds(&scenario),
            vec![ModuleKind::Trigger, ModuleKind::Ai, ModuleKind::Action]
        );
        assert_eq!(scenario.connections.len(), 2);
        assert!(scenario.connections.iter().all(|c| c.condition.is_none()));

        let ids: Vec<_> = scenario.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_conditional_prompt_guards_the_slack_edge() {
        let scenario = generate(CONDITIONAL_PROMPT);

        let slack = scenario
            .modules
            .iter()
            .find(|m| m.app == "Slack")
            .expect("Slack module missing");
        assert_eq!(slack.kind, ModuleKind::Action);

        let incoming = scenario.incoming(&slack.id).expect("No edge into Slack");
        let condition = incoming.condition.as_deref().unwrap_or_default();
        assert!(condition.contains("urgent"), "condition was {:?}", condition);
    }

    #[test]
    fn test_example_prompts() {
        let feedback = generate(EXAMPLE_PROMPTS[0]);
        assert_eq!(apps(&feedback), vec!["Google Sheets", "OpenAI", "Slack"]);
        assert_eq!(feedback.name, "Retours clients : Google Sheets → OpenAI → Slack");
        assert_eq!(feedback.modules[1].label, "Agent IA : analyser, répondre");

        let watch = generate(EXAMPLE_PROMPTS[1]);
        assert_eq!(apps(&watch), vec!["Twitter", "OpenAI", "Email"]);
        assert_eq!(watch.modules[0].label, "Surveiller Twitter");
        assert_eq!(watch.modules[2].label, "Envoyer via Email");

        let support = generate(EXAMPLE_PROMPTS[2]);
        assert_eq!(apps(&support), vec!["Webhooks", "OpenAI", "HubSpot"]);
        assert_eq!(support.modules[2].label, "Mettre à jour HubSpot");
    }

    #[test]
    fn test_placeholder_prompts() {
        let prospects = generate(PLACEHOLDER_PROMPTS[0]);
        assert_eq!(prospects.modules.last().unwrap().app, "Slack");
        assert_eq!(prospects.modules.last().unwrap().label, "Publier dans Slack");

        let tickets = generate(PLACEHOLDER_PROMPTS[1]);
        assert_eq!(apps(&tickets), vec!["Zendesk", "OpenAI", "Notion"]);

        let reporting = generate(PLACEHOLDER_PROMPTS[2]);
        assert_eq!(reporting.modules[0].app, "Planificateur");
        assert_eq!(reporting.modules[0].label, "Planifier l'exécution");
        assert!(reporting.modules[0].purpose.contains("hebdomadaire"));
        assert!(reporting.name.starts_with("Rapports : "));
    }

    #[test]
    fn test_every_sample_prompt_verifies() {
        for prompt in all_prompts() {
            let scenario = generate(prompt);
            scenario
                .verify()
                .unwrap_or_else(|e| panic!("'{}' failed verification: {}", prompt, e));
            assert_eq!(scenario.artifacts.len(), ArtifactFormat::ALL.len());
            println!("{} -> {}", prompt, scenario.name);
        }
    }

    #[test]
    fn test_empty_prompt_matches_default_prompt() {
        assert_eq!(generate(""), generate(DEFAULT_PROMPT));
        assert_eq!(generate("  \t"), generate(DEFAULT_PROMPT));
    }

    #[test]
    fn test_unrecognized_prompt_degrades_to_generic_scenario() {
        let scenario = generate("Bonjour, comment allez-vous ?");
        assert_eq!(apps(&scenario), vec!["Webhooks", "OpenAI", "Email"]);
        assert_eq!(
            scenario.prompt_breakdown[0],
            "Aucun élément reconnu : application du scénario générique."
        );
    }

    #[test]
    fn test_artifact_filenames_follow_the_name() {
        let scenario = generate(ZENDESK_PROMPT);
        let filenames: Vec<_> = scenario.artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(
            filenames,
            vec![
                "tickets-zendesk-openai-slack.json",
                "tickets-zendesk-openai-slack.yaml",
                "tickets-zendesk-openai-slack.mmd",
                "tickets-zendesk-openai-slack.txt",
            ]
        );
    }

    #[test]
    fn test_custom_formats_and_condition_limit() {
        let generator = Generator::builder()
            .with_formats([ArtifactFormat::Yaml, ArtifactFormat::Mermaid])
            .with_condition_limit(12)
            .build()
            .expect("Failed to build generator");

        let scenario = generator.generate(
            "Si le montant de la commande dépasse le seuil convenu, notifie Slack",
        );
        let formats: Vec<_> = scenario.artifacts.iter().map(|a| a.format).collect();
        assert_eq!(formats, vec![ArtifactFormat::Yaml, ArtifactFormat::Mermaid]);

        let condition = scenario.connections[0].condition.as_deref().unwrap();
        assert!(condition.chars().count() <= 12);
        assert!(condition.ends_with('…'));
        scenario.verify().expect("Scenario failed verification");
    }

    #[test]
    fn test_bundle_save_and_load() {
        let path = scratch_path("bundle.bin");
        let bundle = ScenarioBundle::new(CONDITIONAL_PROMPT, generate(CONDITIONAL_PROMPT));

        bundle.save(&path).expect("Failed to save bundle");
        let loaded = ScenarioBundle::from_file(&path).expect("Failed to load bundle");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, bundle);
        assert_eq!(loaded.scenario, generate(&loaded.prompt));
    }

    #[test]
    fn test_scenario_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(generate(ZENDESK_PROMPT)).unwrap();
        assert!(value.get("promptBreakdown").is_some());
        assert_eq!(value["estimatedRunTime"], "~2 min");
        assert_eq!(value["modules"][0]["type"], "trigger");
        assert_eq!(value["connections"][0]["from"], "0");
    }
}
