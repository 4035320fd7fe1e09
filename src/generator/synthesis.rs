use super::signals::Signal;
use crate::scenario::{Module, ModuleKind};
use crate::vocabulary::{AiTask, SignalCategory, TriggerKind, Verb};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

pub(crate) const GENERIC_TRIGGER_APP: &str = "Webhooks";
pub(crate) const SCHEDULER_APP: &str = "Planificateur";
pub(crate) const AI_APP: &str = "OpenAI";
pub(crate) const DEFAULT_DESTINATION_APP: &str = "Email";

/// What a synthesized step does, before it is rendered into a `Module`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Role {
    /// Generic "Watch" trigger used when the prompt names no source.
    WatchAnything,
    WatchApp,
    Schedule { cadence: String },
    Webhook,
    Act(Verb),
    Think(Vec<AiTask>),
}

/// One module of the pipeline under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    pub kind: ModuleKind,
    pub app: String,
    pub role: Role,
    pub condition: Option<String>,
}

impl Step {
    fn new(kind: ModuleKind, app: impl Into<String>, role: Role) -> Self {
        Self {
            kind,
            app: app.into(),
            role,
            condition: None,
        }
    }

    pub fn ai_tasks(&self) -> &[AiTask] {
        match &self.role {
            Role::Think(tasks) => tasks,
            _ => &[],
        }
    }

    /// Renders the step as a module with the given pipeline position.
    pub fn to_module(&self, index: usize) -> Module {
        let (label, purpose) = self.describe();
        Module {
            id: index.to_string(),
            kind: self.kind,
            label,
            purpose,
            app: self.app.clone(),
        }
    }

    pub fn label(&self) -> String {
        self.describe().0
    }

    fn describe(&self) -> (String, String) {
        let app = &self.app;
        match &self.role {
            Role::WatchAnything => (
                "Surveiller les nouveaux événements".to_string(),
                "Déclencheur générique : démarre le scénario à chaque nouvel événement reçu."
                    .to_string(),
            ),
            Role::WatchApp => (
                format!("Surveiller {app}"),
                format!("Déclenche le scénario à chaque nouvel élément dans {app}."),
            ),
            Role::Schedule { cadence } => (
                "Planifier l'exécution".to_string(),
                format!("Lance le scénario selon la fréquence demandée ({cadence})."),
            ),
            Role::Webhook => (
                "Recevoir un webhook".to_string(),
                "Démarre le scénario à la réception d'un appel HTTP entrant.".to_string(),
            ),
            Role::Act(verb) => describe_action(*verb, app),
            Role::Think(tasks) => describe_ai(tasks),
        }
    }
}

fn describe_action(verb: Verb, app: &str) -> (String, String) {
    match verb {
        Verb::Publish => (
            format!("Publier dans {app}"),
            format!("Diffuse le résultat vers {app}."),
        ),
        Verb::Send => (
            format!("Envoyer via {app}"),
            format!("Transmet le contenu préparé aux destinataires via {app}."),
        ),
        Verb::Notify => (
            format!("Notifier sur {app}"),
            format!("Prévient l'équipe concernée dans {app}."),
        ),
        Verb::Update => (
            format!("Mettre à jour {app}"),
            format!("Synchronise les enregistrements existants dans {app}."),
        ),
        Verb::Create => (
            format!("Créer dans {app}"),
            format!("Crée un nouvel élément dans {app} à partir des données traitées."),
        ),
        Verb::Add => (
            format!("Ajouter à {app}"),
            format!("Archive les données traitées dans {app}."),
        ),
        Verb::Search | Verb::Watch => (
            format!("Rechercher dans {app}"),
            format!("Récupère les informations complémentaires depuis {app}."),
        ),
    }
}

fn describe_ai(tasks: &[AiTask]) -> (String, String) {
    match tasks {
        [task] => {
            let (label, purpose) = match task {
                AiTask::Analyze => ("Analyser avec l'IA", "Un agent IA analyse les données reçues."),
                AiTask::Summarize => ("Résumer avec l'IA", "Un agent IA produit une synthèse concise."),
                AiTask::Respond => (
                    "Rédiger une réponse IA",
                    "Un agent IA rédige une réponse personnalisée.",
                ),
                AiTask::Classify => (
                    "Classer avec l'IA",
                    "Un agent IA trie et catégorise chaque élément.",
                ),
                AiTask::Qualify => (
                    "Qualifier avec l'IA",
                    "Un agent IA évalue et priorise chaque élément.",
                ),
                AiTask::Translate => ("Traduire avec l'IA", "Un agent IA traduit le contenu."),
                AiTask::Generate => (
                    "Générer du contenu IA",
                    "Un agent IA génère le contenu à partir des données reçues.",
                ),
                AiTask::Extract => (
                    "Extraire les informations clés",
                    "Un agent IA extrait les champs utiles du contenu reçu.",
                ),
            };
            (label.to_string(), purpose.to_string())
        }
        _ => {
            let chain = tasks.iter().map(AiTask::infinitive).join(", ");
            (
                format!("Agent IA : {chain}"),
                format!("Un agent IA enchaîne les tâches suivantes : {chain}."),
            )
        }
    }
}

/// A module-producing signal with its verb resolved.
#[derive(Debug)]
struct Candidate {
    signal: usize,
    category: CandidateKind,
}

#[derive(Debug)]
enum CandidateKind {
    App { name: String, verb: Verb, explicit: bool },
    Ai(AiTask),
    Trigger(TriggerKind),
}

impl Candidate {
    fn is_trigger_like(&self) -> bool {
        matches!(
            self.category,
            CandidateKind::Trigger(_)
                | CandidateKind::App {
                    verb: Verb::Watch,
                    explicit: true,
                    ..
                }
        )
    }
}

/// Binds action verbs to the apps they apply to. A verb binds to the next app
/// in the prompt; a verb left over at the end binds to the last app without
/// an explicit verb.
fn collect_candidates(signals: &[Signal]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut pending: Option<Verb> = None;

    for (index, signal) in signals.iter().enumerate() {
        let category = match &signal.category {
            SignalCategory::Action(verb) => {
                pending = Some(*verb);
                continue;
            }
            SignalCategory::App { name, default_verb } => CandidateKind::App {
                name: name.clone(),
                verb: pending.unwrap_or(*default_verb),
                explicit: pending.take().is_some(),
            },
            SignalCategory::Ai(task) => CandidateKind::Ai(*task),
            SignalCategory::Trigger(kind) => CandidateKind::Trigger(*kind),
            SignalCategory::Condition | SignalCategory::Subject(_) => continue,
        };
        candidates.push(Candidate {
            signal: index,
            category,
        });
    }

    if let Some(verb) = pending {
        let last_implicit = candidates.iter_mut().rev().find_map(|c| match &mut c.category {
            CandidateKind::App {
                verb: bound,
                explicit,
                ..
            } if !*explicit => Some((bound, explicit)),
            _ => None,
        });
        if let Some((bound, explicit)) = last_implicit {
            trace!(verb = ?verb, "trailing verb bound to preceding app");
            *bound = verb;
            *explicit = true;
        }
    }

    candidates
}

impl Candidate {
    /// The trigger step this candidate would become, if it can start a scenario.
    fn as_trigger(&self, signals: &[Signal]) -> Option<Step> {
        match &self.category {
            CandidateKind::Trigger(TriggerKind::Schedule) => Some(Step::new(
                ModuleKind::Trigger,
                SCHEDULER_APP,
                Role::Schedule {
                    cadence: signals[self.signal].matched.to_lowercase(),
                },
            )),
            CandidateKind::Trigger(TriggerKind::Webhook) => Some(Step::new(
                ModuleKind::Trigger,
                GENERIC_TRIGGER_APP,
                Role::Webhook,
            )),
            CandidateKind::App { name, .. } => {
                Some(Step::new(ModuleKind::Trigger, name.clone(), Role::WatchApp))
            }
            CandidateKind::Ai(_) => None,
        }
    }
}

/// Picks the trigger among the candidates and removes it from the list.
fn take_trigger(candidates: &mut Vec<Candidate>, signals: &[Signal]) -> (Step, Option<usize>) {
    let explicit = candidates.iter().position(Candidate::is_trigger_like);
    // An app with no verb only reads as the source when another app follows
    // to receive the result.
    let implicit = || {
        let apps = candidates
            .iter()
            .filter(|c| matches!(c.category, CandidateKind::App { .. }))
            .count();
        if apps < 2 {
            return None;
        }
        candidates.iter().position(|c| {
            matches!(
                c.category,
                CandidateKind::App {
                    explicit: false,
                    ..
                }
            )
        })
    };

    let chosen = explicit
        .or_else(implicit)
        .and_then(|position| Some((position, candidates[position].as_trigger(signals)?)));
    match chosen {
        Some((position, step)) => {
            let candidate = candidates.remove(position);
            (step, Some(candidate.signal))
        }
        None => (
            Step::new(ModuleKind::Trigger, GENERIC_TRIGGER_APP, Role::WatchAnything),
            None,
        ),
    }
}

/// Maps the ordered signal set to the ordered step list. The first step is
/// always the trigger, and at least one step follows it.
pub(crate) fn synthesize(signals: &[Signal], conditions: &AHashMap<usize, String>) -> Vec<Step> {
    let mut candidates = collect_candidates(signals);
    let (mut trigger, trigger_signal) = take_trigger(&mut candidates, signals);
    trigger.condition = trigger_signal.and_then(|s| conditions.get(&s).cloned());

    let mut steps = vec![trigger];
    // Condition of an ignored trigger signal, waiting for the next kept step.
    let mut carried: Option<String> = None;
    for candidate in candidates {
        let mut step = match candidate.category {
            CandidateKind::App { name, verb, .. } => {
                // A second watch on an app reads as a lookup.
                let verb = if verb == Verb::Watch { Verb::Search } else { verb };
                Step::new(ModuleKind::Action, name, Role::Act(verb))
            }
            CandidateKind::Ai(task) => Step::new(ModuleKind::Ai, AI_APP, Role::Think(vec![task])),
            CandidateKind::Trigger(kind) => {
                debug!(kind = ?kind, "ignoring additional trigger signal");
                carried = join_conditions(carried, conditions.get(&candidate.signal).cloned());
                continue;
            }
        };
        step.condition =
            join_conditions(carried.take(), conditions.get(&candidate.signal).cloned());

        // The trigger is never merged; only repeats among the following steps are.
        let repeats_previous = steps.len() > 1 && steps.last().is_some_and(|p| p.app == step.app);
        match steps.last_mut() {
            Some(previous) if repeats_previous => merge(previous, step),
            _ => steps.push(step),
        }
    }

    if steps.len() == 1 {
        debug!("no action recognized, appending default destination");
        steps.push(Step::new(
            ModuleKind::Action,
            DEFAULT_DESTINATION_APP,
            Role::Act(Verb::Send),
        ));
    }
    if carried.is_some() {
        if let Some(last) = steps.last_mut() {
            last.condition = join_conditions(last.condition.take(), carried);
        }
    }

    debug!(modules = steps.len(), "modules synthesized");
    steps
}

fn merge(previous: &mut Step, repeat: Step) {
    trace!(app = %repeat.app, "merging consecutive module for the same app");
    if let (Role::Think(tasks), Role::Think(more)) = (&mut previous.role, repeat.role) {
        for task in more {
            if !tasks.contains(&task) {
                tasks.push(task);
            }
        }
    }
    previous.condition = join_conditions(previous.condition.take(), repeat.condition);
}

/// Combines two guards on the same edge; both must hold.
pub(crate) fn join_conditions(first: Option<String>, second: Option<String>) -> Option<String> {
    match (first, second) {
        (Some(first), Some(second)) => Some(format!("{first} et {second}")),
        (first, second) => first.or(second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::signals::{extract, fallback_signals};
    use crate::vocabulary::Vocabulary;

    fn steps_for(prompt: &str) -> Vec<Step> {
        let signals = extract(&Vocabulary::builtin(), prompt, 80);
        synthesize(&signals, &AHashMap::new())
    }

    fn apps(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(|s| s.app.as_str()).collect()
    }

    #[test]
    fn first_implicit_app_becomes_trigger() {
        let steps = steps_for("Analyse des tickets Zendesk et réponse via Slack");
        assert_eq!(apps(&steps), vec!["Zendesk", "OpenAI", "Slack"]);
        assert_eq!(steps[0].role, Role::WatchApp);
        assert_eq!(steps[1].ai_tasks(), &[AiTask::Analyze, AiTask::Respond]);
        assert_eq!(steps[2].role, Role::Act(Verb::Publish));
    }

    #[test]
    fn single_app_gets_a_synthetic_trigger() {
        let steps = steps_for("notifie Slack");
        assert_eq!(apps(&steps), vec![GENERIC_TRIGGER_APP, "Slack"]);
        assert_eq!(steps[0].role, Role::WatchAnything);
        assert_eq!(steps[1].role, Role::Act(Verb::Notify));
    }

    #[test]
    fn lone_implicit_app_stays_a_destination() {
        let steps = steps_for("Analyse Slack");
        assert_eq!(apps(&steps), vec![GENERIC_TRIGGER_APP, AI_APP, "Slack"]);
        assert_eq!(steps[0].role, Role::WatchAnything);
        assert_eq!(steps[2].kind, ModuleKind::Action);
    }

    #[test]
    fn ignored_trigger_hands_its_condition_to_the_next_step() {
        let signals = extract(
            &Vocabulary::builtin(),
            "Chaque lundi si urgent, webhook puis Slack",
            80,
        );
        let conditions = crate::generator::connections::resolve_conditions(&signals);
        let steps = synthesize(&signals, &conditions);
        assert_eq!(apps(&steps), vec![SCHEDULER_APP, "Slack"]);
        assert_eq!(steps[1].condition.as_deref(), Some("urgent"));
    }

    #[test]
    fn joined_conditions_keep_both_guards() {
        assert_eq!(
            join_conditions(Some("a".to_string()), Some("b".to_string())).as_deref(),
            Some("a et b")
        );
        assert_eq!(join_conditions(None, Some("b".to_string())).as_deref(), Some("b"));
        assert_eq!(join_conditions(None, None), None);
    }

    #[test]
    fn watch_verb_selects_the_trigger() {
        let steps = steps_for("Publie dans Notion ce qui arrive quand on surveille Typeform");
        assert_eq!(apps(&steps), vec!["Typeform", "Notion"]);
        assert_eq!(steps[1].role, Role::Act(Verb::Publish));
    }

    #[test]
    fn schedule_takes_precedence_and_keeps_its_cadence() {
        let steps = steps_for("Chaque lundi, résume les ventes Shopify dans Slack");
        assert_eq!(steps[0].app, SCHEDULER_APP);
        assert_eq!(
            steps[0].role,
            Role::Schedule {
                cadence: "chaque lundi".to_string()
            }
        );
        assert_eq!(apps(&steps)[1..], ["OpenAI", "Shopify", "Slack"]);
    }

    #[test]
    fn trailing_verb_binds_to_previous_app() {
        let steps = steps_for("Les leads HubSpot doivent être résumés dans Notion puis archivés");
        assert_eq!(steps.last().unwrap().role, Role::Act(Verb::Add));
    }

    #[test]
    fn consecutive_same_app_modules_are_merged() {
        let steps = steps_for("Ajoute dans Airtable, puis mets à jour Airtable");
        assert_eq!(apps(&steps), vec![GENERIC_TRIGGER_APP, "Airtable"]);
        assert_eq!(steps[1].role, Role::Act(Verb::Add));
    }

    #[test]
    fn trigger_only_prompt_gets_a_default_destination() {
        let steps = steps_for("tous les jours");
        assert_eq!(apps(&steps), vec![SCHEDULER_APP, DEFAULT_DESTINATION_APP]);
    }

    #[test]
    fn fallback_signals_give_a_generic_pipeline() {
        let steps = synthesize(&fallback_signals(), &AHashMap::new());
        assert_eq!(apps(&steps), vec![GENERIC_TRIGGER_APP, AI_APP, "Email"]);
        assert_eq!(steps[0].role, Role::Webhook);
    }

    #[test]
    fn multi_task_ai_module_lists_every_task() {
        let module = Step::new(
            ModuleKind::Ai,
            AI_APP,
            Role::Think(vec![AiTask::Classify, AiTask::Respond]),
        )
        .to_module(1);
        assert_eq!(module.id, "1");
        assert_eq!(module.label, "Agent IA : classer, répondre");
    }
}
