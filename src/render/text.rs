use crate::scenario::Scenario;
use std::fmt::Write;

pub(super) fn render(scenario: &Scenario) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", scenario.name);
    let _ = writeln!(out, "{}", "=".repeat(scenario.name.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Résumé : {}", scenario.summary);
    let _ = writeln!(out, "Objectif : {}", scenario.objective);
    let _ = writeln!(out, "Durée estimée : {}", scenario.estimated_run_time);

    let _ = writeln!(out, "\nModules :");
    for module in &scenario.modules {
        let _ = writeln!(
            out,
            "  {}. [{}] {} ({})",
            module.id, module.kind, module.label, module.app
        );
        let _ = writeln!(out, "     {}", module.purpose);
    }

    let _ = writeln!(out, "\nConnexions :");
    for connection in &scenario.connections {
        match &connection.condition {
            Some(condition) => {
                let _ = writeln!(
                    out,
                    "  {} → {} (si {})",
                    connection.from, connection.to, condition
                );
            }
            None => {
                let _ = writeln!(out, "  {} → {}", connection.from, connection.to);
            }
        }
    }

    let _ = writeln!(out, "\nInterprétation du prompt :");
    for bullet in &scenario.prompt_breakdown {
        let _ = writeln!(out, "  - {bullet}");
    }
    out
}
