//! Artifact rendering: one file per configured format.
//!
//! Renderers are pure serializers over a finished [`Scenario`]. They never
//! reorder modules or connections.

use crate::error::ArtifactError;
use crate::scenario::{Artifact, ArtifactFormat, Scenario};
use tracing::{error, trace};

pub mod blueprint;
mod mermaid;
mod text;

pub use blueprint::{Blueprint, BlueprintMetadata, BlueprintModule, Designer};

/// Spacing between modules on the designer canvas.
pub const DESIGNER_SPACING: i64 = 300;

/// Renders one artifact per format, in the order given. A format whose
/// serializer fails is logged and skipped.
pub fn render_artifacts(scenario: &Scenario, formats: &[ArtifactFormat]) -> Vec<Artifact> {
    formats
        .iter()
        .filter_map(|format| match render(scenario, *format) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                error!(format = %format, error = %e, "failed to render artifact");
                None
            }
        })
        .collect()
}

/// Renders the scenario in a single format.
pub fn render(scenario: &Scenario, format: ArtifactFormat) -> Result<Artifact, ArtifactError> {
    let contents = match format {
        ArtifactFormat::Json => serde_json::to_string_pretty(&Blueprint::from_scenario(scenario))?,
        ArtifactFormat::Yaml => serde_yaml::to_string(&Blueprint::from_scenario(scenario))?,
        ArtifactFormat::Mermaid => mermaid::render(scenario),
        ArtifactFormat::Text => text::render(scenario),
    };
    let filename = filename(&scenario.name, format);
    trace!(%filename, bytes = contents.len(), "artifact rendered");
    Ok(Artifact {
        filename,
        format,
        contents,
    })
}

/// `{slug}.{extension}` for a scenario name.
pub fn filename(name: &str, format: ArtifactFormat) -> String {
    format!("{}.{}", slug(name), format.extension())
}

/// Lowercase ASCII identifier: French accents are folded, every other run of
/// non-alphanumeric characters becomes a single `-`.
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match fold_accent(c) {
            Some(folded) => slug.push_str(folded),
            None if c.is_ascii_alphanumeric() => slug.push(c),
            None => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "scenario".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'â' | 'ä' | 'á' | 'ã' => "a",
        'ç' => "c",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'î' | 'ï' | 'í' => "i",
        'ô' | 'ö' | 'ó' | 'õ' => "o",
        'ù' | 'û' | 'ü' | 'ú' => "u",
        'ÿ' => "y",
        'ñ' => "n",
        'œ' => "oe",
        'æ' => "ae",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_folds_accents_and_separators() {
        assert_eq!(
            slug("Retours clients : Typeform → Résumé"),
            "retours-clients-typeform-resume"
        );
        assert_eq!(slug("Œuvre à l'étude"), "oeuvre-a-l-etude");
        assert_eq!(slug("→ …"), "scenario");
    }

    #[test]
    fn filename_uses_format_extension() {
        assert_eq!(
            filename("Tickets : Zendesk → Slack", ArtifactFormat::Mermaid),
            "tickets-zendesk-slack.mmd"
        );
    }
}
