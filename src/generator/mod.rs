//! Prompt-to-scenario generation.
//!
//! A [`Generator`] runs four stages in strict sequence: signal extraction,
//! module synthesis, connection inference and artifact rendering. Every stage
//! is a pure function of its input, so identical prompts always produce
//! identical scenarios.

use crate::error::ConfigError;
use crate::render;
use crate::scenario::{ArtifactFormat, Scenario};
use crate::vocabulary::{Vocabulary, VocabularyEntry, table};
use itertools::Itertools;
use std::sync::LazyLock;
use tracing::debug;

mod connections;
mod metadata;
mod signals;
mod synthesis;

pub use signals::{Clause, Signal};

/// Prompt used when the caller supplies nothing usable.
pub const DEFAULT_PROMPT: &str = "scénario automatique";

/// Default maximum length of a condition clause, in characters.
pub const DEFAULT_CONDITION_LIMIT: usize = 80;

/// Smallest accepted condition limit.
pub const MIN_CONDITION_LIMIT: usize = 8;

static DEFAULT_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::new);

/// Generates a scenario with the built-in vocabulary and every artifact format.
pub fn generate(prompt: &str) -> Scenario {
    DEFAULT_GENERATOR.generate(prompt)
}

/// The prompt actually interpreted: blank input falls back to [`DEFAULT_PROMPT`].
pub fn effective_prompt(prompt: &str) -> &str {
    if prompt.trim().is_empty() {
        DEFAULT_PROMPT
    } else {
        prompt
    }
}

pub struct Generator {
    vocabulary: Vocabulary,
    formats: Vec<ArtifactFormat>,
    condition_limit: usize,
}

impl Generator {
    /// A generator with the built-in vocabulary and every artifact format.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::builtin(),
            formats: ArtifactFormat::ALL.to_vec(),
            condition_limit: DEFAULT_CONDITION_LIMIT,
        }
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn formats(&self) -> &[ArtifactFormat] {
        &self.formats
    }

    /// Recognized signals of a prompt, in order of appearance. Returns an
    /// empty list when nothing is recognized; [`Generator::generate`] then
    /// substitutes the fallback signal set.
    pub fn extract_signals(&self, prompt: &str) -> Vec<Signal> {
        signals::extract(
            &self.vocabulary,
            effective_prompt(prompt),
            self.condition_limit,
        )
    }

    /// Builds the scenario described by `prompt`. Never fails: unrecognized
    /// text degrades to a generic scenario.
    pub fn generate(&self, prompt: &str) -> Scenario {
        let prompt = effective_prompt(prompt);
        debug!(len = prompt.len(), "generating scenario");

        let mut signals = signals::extract(&self.vocabulary, prompt, self.condition_limit);
        let fallback = signals.is_empty();
        if fallback {
            debug!("no signal recognized, using the fallback signal set");
            signals = signals::fallback_signals();
        }

        let conditions = connections::resolve_conditions(&signals);
        let steps = synthesis::synthesize(&signals, &conditions);
        let connections = connections::infer(&steps);
        let metadata = metadata::describe(&signals, fallback, &steps, &connections);

        let mut scenario = Scenario {
            name: metadata.name,
            summary: metadata.summary,
            objective: metadata.objective,
            prompt_breakdown: metadata.prompt_breakdown,
            estimated_run_time: metadata.estimated_run_time,
            modules: steps
                .iter()
                .enumerate()
                .map(|(index, step)| step.to_module(index))
                .collect(),
            connections,
            artifacts: Vec::new(),
        };
        scenario.artifacts = render::render_artifacts(&scenario, &self.formats);

        debug!(
            name = %scenario.name,
            modules = scenario.modules.len(),
            artifacts = scenario.artifacts.len(),
            "scenario generated"
        );
        scenario
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures a [`Generator`].
///
/// ```rust
/// use scenario_forge::generator::Generator;
/// use scenario_forge::scenario::ArtifactFormat;
///
/// let generator = Generator::builder()
///     .with_formats([ArtifactFormat::Json, ArtifactFormat::Text])
///     .with_condition_limit(40)
///     .build()
///     .unwrap();
/// let scenario = generator.generate("Publie dans Slack");
/// assert_eq!(scenario.artifacts.len(), 2);
/// ```
pub struct GeneratorBuilder {
    builtin: bool,
    extra_entries: Vec<VocabularyEntry>,
    formats: Vec<ArtifactFormat>,
    condition_limit: usize,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            builtin: true,
            extra_entries: Vec::new(),
            formats: ArtifactFormat::ALL.to_vec(),
            condition_limit: DEFAULT_CONDITION_LIMIT,
        }
    }

    /// Adds a vocabulary entry. Its surface form must not collide with
    /// another entry, built-in ones included.
    pub fn with_entry(mut self, entry: VocabularyEntry) -> Self {
        self.extra_entries.push(entry);
        self
    }

    /// Starts from an empty vocabulary instead of the built-in table.
    pub fn without_builtin_vocabulary(mut self) -> Self {
        self.builtin = false;
        self
    }

    /// Artifact formats to render, in order. Repeated formats are ignored.
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ArtifactFormat>) -> Self {
        self.formats = formats.into_iter().unique().collect();
        self
    }

    /// Maximum length of a condition clause, in characters.
    pub fn with_condition_limit(mut self, limit: usize) -> Self {
        self.condition_limit = limit;
        self
    }

    pub fn build(self) -> Result<Generator, ConfigError> {
        if self.formats.is_empty() {
            return Err(ConfigError::NoArtifactFormats);
        }
        if self.condition_limit < MIN_CONDITION_LIMIT {
            return Err(ConfigError::ConditionLimitTooSmall {
                requested: self.condition_limit,
                minimum: MIN_CONDITION_LIMIT,
            });
        }

        let mut entries = if self.builtin {
            table::builtin_entries()
        } else {
            Vec::new()
        };
        entries.extend(self.extra_entries);
        let vocabulary = Vocabulary::new(entries)?;
        debug!(entries = vocabulary.len(), "generator configured");

        Ok(Generator {
            vocabulary,
            formats: self.formats,
            condition_limit: self.condition_limit,
        })
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabularyError;
    use crate::vocabulary::Verb;

    #[test]
    fn blank_prompt_uses_default() {
        assert_eq!(effective_prompt("   \n"), DEFAULT_PROMPT);
        assert_eq!(effective_prompt("Publie"), "Publie");
    }

    #[test]
    fn builder_rejects_empty_format_set() {
        let result = Generator::builder()
            .with_formats(Vec::<ArtifactFormat>::new())
            .build();
        assert!(matches!(result, Err(ConfigError::NoArtifactFormats)));
    }

    #[test]
    fn builder_rejects_tiny_condition_limit() {
        let result = Generator::builder().with_condition_limit(3).build();
        assert!(matches!(
            result,
            Err(ConfigError::ConditionLimitTooSmall {
                requested: 3,
                minimum: MIN_CONDITION_LIMIT
            })
        ));
    }

    #[test]
    fn builder_rejects_colliding_entry() {
        let result = Generator::builder()
            .with_entry(VocabularyEntry::app("slack", "Slack", Verb::Notify))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::Vocabulary(VocabularyError::DuplicateSurface { .. }))
        ));
    }

    #[test]
    fn custom_vocabulary_is_used() {
        let generator = Generator::builder()
            .without_builtin_vocabulary()
            .with_entry(VocabularyEntry::app("mattermost", "Mattermost", Verb::Publish))
            .build()
            .unwrap();
        let scenario = generator.generate("Relaye vers Mattermost");
        assert_eq!(scenario.modules.last().unwrap().app, "Mattermost");
        // "Slack" is unknown without the built-in table.
        assert!(generator.extract_signals("Slack").is_empty());
    }

    #[test]
    fn repeated_formats_render_once() {
        let generator = Generator::builder()
            .with_formats([ArtifactFormat::Yaml, ArtifactFormat::Yaml])
            .build()
            .unwrap();
        assert_eq!(generator.formats(), &[ArtifactFormat::Yaml]);
    }
}
