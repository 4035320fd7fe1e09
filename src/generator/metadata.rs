use super::signals::Signal;
use super::synthesis::{Role, Step};
use crate::scenario::{Connection, ModuleKind};
use crate::vocabulary::{SignalCategory, TriggerKind};
use itertools::Itertools;

const TRIGGER_SECONDS: u32 = 10;
const ACTION_SECONDS: u32 = 20;
const AI_TASK_SECONDS: u32 = 40;
const CONDITION_SECONDS: u32 = 5;

/// Apps shown in a scenario name before the chain is elided.
const MAX_NAMED_APPS: usize = 4;

pub(crate) const FALLBACK_NOTICE: &str =
    "Aucun élément reconnu : application du scénario générique.";
const GENERIC_TRIGGER_NOTICE: &str =
    "Aucun déclencheur explicite : un déclencheur générique démarre le scénario.";

/// Descriptive fields of a scenario, derived from its signals and pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub name: String,
    pub summary: String,
    pub objective: String,
    pub prompt_breakdown: Vec<String>,
    pub estimated_run_time: String,
}

pub(crate) fn describe(
    signals: &[Signal],
    fallback: bool,
    steps: &[Step],
    connections: &[Connection],
) -> Metadata {
    let subject = signals.iter().find_map(|s| match &s.category {
        SignalCategory::Subject(noun) => Some(noun.as_str()),
        _ => None,
    });
    let apps: Vec<&str> = steps.iter().map(|s| s.app.as_str()).dedup().collect();

    Metadata {
        name: name(subject, &apps),
        summary: summary(steps, connections),
        objective: objective(subject, &apps),
        prompt_breakdown: breakdown(signals, fallback, steps),
        estimated_run_time: estimate_run_time(steps, connections),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn name(subject: Option<&str>, apps: &[&str]) -> String {
    let title = subject.map_or_else(|| "Automatisation".to_string(), capitalize);
    let chain = if apps.len() > MAX_NAMED_APPS {
        apps[..MAX_NAMED_APPS - 1]
            .iter()
            .chain(["…"].iter())
            .chain(apps.last())
            .join(" → ")
    } else {
        apps.iter().join(" → ")
    };
    format!("{title} : {chain}")
}

fn summary(steps: &[Step], connections: &[Connection]) -> String {
    let (trigger, rest) = match steps.split_first() {
        Some(split) => split,
        None => return "Scénario vide.".to_string(),
    };
    let labels = rest.iter().map(Step::label).join(", puis ");
    let mut summary = format!(
        "Déclenché par « {} » ({}), ce scénario enchaîne {} étape{} : {}.",
        trigger.label(),
        trigger.app,
        rest.len(),
        if rest.len() > 1 { "s" } else { "" },
        labels
    );
    let conditional = connections.iter().filter(|c| c.condition.is_some()).count();
    if conditional > 0 {
        summary.push_str(&format!(
            " {conditional} condition{} filtre{} l'exécution.",
            if conditional > 1 { "s" } else { "" },
            if conditional > 1 { "nt" } else { "" },
        ));
    }
    summary
}

fn objective(subject: Option<&str>, apps: &[&str]) -> String {
    let (Some(source), Some(destination)) = (apps.first(), apps.last()) else {
        return "Automatiser une tâche répétitive.".to_string();
    };
    match subject {
        Some(noun) => format!(
            "Automatiser le traitement des {noun} depuis {source} jusqu'à {destination}, sans intervention manuelle."
        ),
        None => format!(
            "Automatiser le flux de données depuis {source} jusqu'à {destination}, sans intervention manuelle."
        ),
    }
}

fn explain(signal: &Signal) -> String {
    match &signal.category {
        SignalCategory::App { name, .. } => format!("Application détectée : {name}"),
        SignalCategory::Action(verb) => format!("Action demandée : {}", verb.infinitive()),
        SignalCategory::Ai(task) => format!("Tâche confiée à l'IA : {}", task.infinitive()),
        SignalCategory::Trigger(TriggerKind::Schedule) => format!(
            "Déclenchement planifié : « {} »",
            signal.matched.to_lowercase()
        ),
        SignalCategory::Trigger(TriggerKind::Webhook) => {
            "Déclenchement par webhook entrant".to_string()
        }
        SignalCategory::Condition => match &signal.clause {
            Some(clause) => format!("Condition : {}", clause.text),
            None => format!("Condition sans clause exploitable : « {} »", signal.matched),
        },
        SignalCategory::Subject(noun) => format!("Sujet : {noun}"),
    }
}

fn breakdown(signals: &[Signal], fallback: bool, steps: &[Step]) -> Vec<String> {
    let mut bullets = Vec::with_capacity(signals.len() + 2);
    if fallback {
        bullets.push(FALLBACK_NOTICE.to_string());
    }
    if steps.first().is_some_and(|s| s.role == Role::WatchAnything) {
        bullets.push(GENERIC_TRIGGER_NOTICE.to_string());
    }
    bullets.extend(signals.iter().map(explain));
    bullets.into_iter().unique().collect()
}

/// Heuristic cost of one run: a fixed cost per module kind, per AI task and
/// per guarded edge, rounded up to whole minutes.
pub(crate) fn estimate_run_time(steps: &[Step], connections: &[Connection]) -> String {
    let modules: u32 = steps
        .iter()
        .map(|step| match step.kind {
            ModuleKind::Trigger => TRIGGER_SECONDS,
            ModuleKind::Action | ModuleKind::Router => ACTION_SECONDS,
            ModuleKind::Ai => AI_TASK_SECONDS * step.ai_tasks().len().max(1) as u32,
        })
        .sum();
    let conditions = connections.iter().filter(|c| c.condition.is_some()).count() as u32;
    let seconds = modules + conditions * CONDITION_SECONDS;
    format!("~{} min", seconds.div_ceil(60).max(1))
}
