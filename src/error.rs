use crate::scenario::ArtifactFormat;
use thiserror::Error;

/// Errors that can occur while building a keyword vocabulary.
#[derive(Error, Debug, Clone)]
pub enum VocabularyError {
    #[error("Vocabulary entry #{index} has an empty surface form")]
    EmptySurface { index: usize },

    #[error("Surface form '{surface}' is declared more than once")]
    DuplicateSurface { surface: String },

    #[error("Failed to build the keyword automaton: {0}")]
    Automaton(String),
}

/// Errors raised by `GeneratorBuilder::build` for an invalid configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("At least one artifact format must be configured")]
    NoArtifactFormats,

    #[error("Condition limit must be at least {minimum} characters, got {requested}")]
    ConditionLimitTooSmall { requested: usize, minimum: usize },
}

/// Errors that can occur when reading an artifact back into a scenario graph.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact '{filename}' uses the {format} format, which does not carry the module graph")]
    NotStructural {
        filename: String,
        format: ArtifactFormat,
    },

    #[error("Failed to (de)serialize JSON blueprint: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to (de)serialize YAML blueprint: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A broken structural invariant detected by `Scenario::verify`.
#[derive(Error, Debug)]
pub enum IntegrityError {
    #[error("Scenario has no modules")]
    NoModules,

    #[error("Module id '{0}' is used more than once")]
    DuplicateModuleId(String),

    #[error("Connection {from} -> {to} references missing module '{missing}'")]
    DanglingConnection {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Artifact filename '{0}' is used more than once")]
    DuplicateFilename(String),

    #[error("Artifact '{filename}' could not be parsed: {source}")]
    UnreadableArtifact {
        filename: String,
        #[source]
        source: ArtifactError,
    },

    #[error("Artifact '{0}' does not reproduce the scenario graph")]
    GraphMismatch(String),
}

/// Errors that can occur when persisting or loading a scenario bundle.
#[derive(Error, Debug, Clone)]
pub enum BundleError {
    #[error("{0}")]
    Generic(String),
}
