//! # Scenario Forge - Prompt-to-Scenario Generation Engine
//!
//! **Scenario Forge** turns a free-form description of a business automation
//! ("analyse les tickets Zendesk et publie la réponse dans Slack") into a
//! structured scenario: a named pipeline of typed modules, the connections
//! between them, human-readable metadata, and ready-to-download artifacts.
//!
//! Generation is deterministic and never fails. The engine calls no language
//! model and keeps no state between calls: the same prompt always yields the
//! same scenario, and text it cannot interpret degrades to a generic pipeline.
//!
//! ## Core Workflow
//!
//! 1.  **Signal Extraction**: a keyword vocabulary (apps, action verbs, AI tasks, schedules, conditions, subjects) is matched against the prompt.
//! 2.  **Module Synthesis**: signals become an ordered module list, with a trigger at index 0.
//! 3.  **Connection Inference**: adjacent modules are chained; conditional clauses ("si le ticket est urgent") guard single edges.
//! 4.  **Artifact Rendering**: the scenario is rendered as a JSON/YAML blueprint, a Mermaid flowchart and a text summary.
//!
//! ## Quick Start
//!
//! ```rust
//! use scenario_forge::prelude::*;
//!
//! let scenario = generate("Si le ticket est urgent, notifie Slack");
//!
//! assert_eq!(scenario.modules.len(), 2);
//! assert_eq!(scenario.modules[1].app, "Slack");
//! let condition = scenario.connections[0].condition.as_deref().unwrap();
//! assert!(condition.contains("urgent"));
//!
//! // Structural artifacts parse back into the same graph.
//! scenario.verify().unwrap();
//! ```
//!
//! Use [`Generator::builder`](generator::Generator::builder) to extend the
//! vocabulary, restrict the artifact formats or change the condition length.

pub mod boundary;
pub mod bundle;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod render;
pub mod scenario;
pub mod vocabulary;

#[cfg(feature = "python-bindings")]
mod python;

pub use generator::{DEFAULT_PROMPT, generate};
