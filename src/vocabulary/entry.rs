use serde::{Deserialize, Serialize};

/// A canonical action performed on an external app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    Watch,
    Publish,
    Send,
    Notify,
    Update,
    Create,
    Add,
    Search,
}

impl Verb {
    /// French infinitive used in prompt breakdowns.
    pub fn infinitive(&self) -> &'static str {
        match self {
            Verb::Watch => "surveiller",
            Verb::Publish => "publier",
            Verb::Send => "envoyer",
            Verb::Notify => "notifier",
            Verb::Update => "mettre à jour",
            Verb::Create => "créer",
            Verb::Add => "ajouter",
            Verb::Search => "rechercher",
        }
    }
}

/// A task delegated to an AI agent module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiTask {
    Analyze,
    Summarize,
    Respond,
    Classify,
    Qualify,
    Translate,
    Generate,
    Extract,
}

impl AiTask {
    pub fn infinitive(&self) -> &'static str {
        match self {
            AiTask::Analyze => "analyser",
            AiTask::Summarize => "résumer",
            AiTask::Respond => "répondre",
            AiTask::Classify => "classer",
            AiTask::Qualify => "qualifier",
            AiTask::Translate => "traduire",
            AiTask::Generate => "générer",
            AiTask::Extract => "extraire",
        }
    }
}

/// An explicit way of starting a scenario that is not tied to an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Schedule,
    Webhook,
}

/// What a recognized surface form means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// An external service, with the verb applied when the prompt names none.
    App { name: String, default_verb: Verb },
    Action(Verb),
    Ai(AiTask),
    Trigger(TriggerKind),
    /// Conditional language ("si", "quand", ...).
    Condition,
    /// The business object the scenario is about ("tickets", "prospects", ...).
    Subject(String),
}

impl SignalCategory {
    /// Whether a signal of this category becomes a module.
    pub fn produces_module(&self) -> bool {
        matches!(
            self,
            SignalCategory::App { .. } | SignalCategory::Ai(_) | SignalCategory::Trigger(_)
        )
    }
}

/// How a surface form must line up with word boundaries in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// The match must start a word; it may end inside one (word stems).
    Prefix,
    /// The match must start and end on word boundaries.
    Word,
}

/// One row of the keyword vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub surface: String,
    pub category: SignalCategory,
    pub boundary: Boundary,
}

impl VocabularyEntry {
    pub fn new(surface: impl Into<String>, category: SignalCategory) -> Self {
        Self {
            surface: surface.into(),
            category,
            boundary: Boundary::Prefix,
        }
    }

    pub fn app(surface: &str, name: &str, default_verb: Verb) -> Self {
        Self::new(
            surface,
            SignalCategory::App {
                name: name.to_string(),
                default_verb,
            },
        )
    }

    pub fn action(surface: &str, verb: Verb) -> Self {
        Self::new(surface, SignalCategory::Action(verb))
    }

    pub fn ai(surface: &str, task: AiTask) -> Self {
        Self::new(surface, SignalCategory::Ai(task))
    }

    pub fn trigger(surface: &str, kind: TriggerKind) -> Self {
        Self::new(surface, SignalCategory::Trigger(kind))
    }

    pub fn condition(surface: &str) -> Self {
        Self::new(surface, SignalCategory::Condition)
    }

    pub fn subject(surface: &str, noun: &str) -> Self {
        Self::new(surface, SignalCategory::Subject(noun.to_string()))
    }

    /// Requires the surface form to match a whole word.
    pub fn whole_word(mut self) -> Self {
        self.boundary = Boundary::Word;
        self
    }
}
