//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types of the scenario_forge
//! crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use scenario_forge::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let generator = Generator::builder()
//!     .with_formats([ArtifactFormat::Json, ArtifactFormat::Mermaid])
//!     .build()?;
//! let scenario = generator.generate("Chaque lundi, résume les ventes Shopify dans Slack");
//!
//! for artifact in &scenario.artifacts {
//!     std::fs::write(&artifact.filename, &artifact.contents)?;
//! }
//! ScenarioBundle::new("Chaque lundi…", scenario).save("scenario.bin")?;
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::generator::{DEFAULT_PROMPT, Generator, GeneratorBuilder, Signal, generate};

// Scenario model
pub use crate::scenario::{Artifact, ArtifactFormat, Connection, Module, ModuleKind, Scenario};

// Vocabulary
pub use crate::vocabulary::{Vocabulary, VocabularyEntry};

// Rendering and persistence
pub use crate::bundle::ScenarioBundle;
pub use crate::render::Blueprint;

// Error types
pub use crate::error::{ArtifactError, BundleError, ConfigError, IntegrityError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
