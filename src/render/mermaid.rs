use crate::scenario::{ModuleKind, Scenario};
use std::fmt::Write;

/// Mermaid flowchart: one node per module, shaped by module type, and one
/// edge per connection labelled with its condition.
pub(super) fn render(scenario: &Scenario) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "%% {}", escape(&scenario.name));
    out.push_str("flowchart LR\n");

    for module in &scenario.modules {
        let text = format!("{}<br/><i>{}</i>", escape(&module.label), escape(&module.app));
        let (open, close) = match module.kind {
            ModuleKind::Trigger => ("([\"", "\"])"),
            ModuleKind::Action => ("[\"", "\"]"),
            ModuleKind::Ai => ("{{\"", "\"}}"),
            ModuleKind::Router => ("{\"", "\"}"),
        };
        let _ = writeln!(out, "    m{}{open}{text}{close}", module.id);
    }

    for connection in &scenario.connections {
        match &connection.condition {
            Some(condition) => {
                let _ = writeln!(
                    out,
                    "    m{} -->|\"{}\"| m{}",
                    connection.from,
                    escape(condition),
                    connection.to
                );
            }
            None => {
                let _ = writeln!(out, "    m{} --> m{}", connection.from, connection.to);
            }
        }
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('"', "#quot;").replace('\n', " ")
}
