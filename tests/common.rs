//! Common test utilities: sample prompts and scenario accessors.
use scenario_forge::prelude::*;

/// Prompts offered as placeholders by the web form.
#[allow(dead_code)]
pub const PLACEHOLDER_PROMPTS: [&str; 3] = [
    "Crée un scénario Make qui qualifie les prospects LinkedIn, génère un résumé personnalisé et le publie dans Slack.",
    "Construis un scénario pour analyser les tickets Zendesk, synthétiser la réponse idéale et mettre à jour Notion.",
    "Imagine un scénario qui produit un reporting marketing hebdomadaire dans Google Slides avec un résumé IA.",
];

/// Prompts offered as one-click examples by the web form.
#[allow(dead_code)]
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "Analyse des retours clients dans un Google Sheet et rédaction automatique de réponses personnalisées via Slack.",
    "Veille médias sociaux : surveiller Twitter, résumer les tendances et envoyer un rapport quotidien par email.",
    "Support client : trier les tickets, proposer une réponse IA et mettre à jour HubSpot.",
];

#[allow(dead_code)]
pub const ZENDESK_PROMPT: &str = "Analyse des tickets Zendesk et réponse via Slack";

#[allow(dead_code)]
pub const CONDITIONAL_PROMPT: &str = "Si le ticket est urgent, notifie Slack";

/// Every sample prompt above.
#[allow(dead_code)]
pub fn all_prompts() -> Vec<&'static str> {
    PLACEHOLDER_PROMPTS
        .iter()
        .chain(EXAMPLE_PROMPTS.iter())
        .chain([ZENDESK_PROMPT, CONDITIONAL_PROMPT].iter())
        .copied()
        .collect()
}

/// Apps of the scenario's modules, in pipeline order.
#[allow(dead_code)]
pub fn apps(scenario: &Scenario) -> Vec<&str> {
    scenario.modules.iter().map(|m| m.app.as_str()).collect()
}

/// Module types of the scenario, in pipeline order.
#[allow(dead_code)]
pub fn kinds(scenario: &Scenario) -> Vec<ModuleKind> {
    scenario.modules.iter().map(|m| m.kind).collect()
}

/// A unique scratch path under the system temp directory.
#[allow(dead_code)]
pub fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("scenario-forge-{}-{}", std::process::id(), name))
}
