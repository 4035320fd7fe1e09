use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use scenario_forge::vocabulary::{SignalCategory, Vocabulary};
use serde::Serialize;
use std::fs;

/// A CLI tool to generate a corpus of random prompts for the scenario generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_prompts.json")]
    output: String,

    /// Number of prompts to generate
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// The minimum number of clauses per prompt
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of clauses per prompt
    #[arg(long, default_value_t = 4)]
    max: usize,

    /// Generate each prompt's scenario and store a summary next to it
    #[arg(long)]
    with_scenarios: bool,
}

#[derive(Serialize)]
struct CorpusEntry {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    modules: Option<Vec<String>>,
}

/// Surface forms of the built-in vocabulary, grouped by role.
struct Pools {
    apps: Vec<String>,
    verbs: Vec<String>,
    ai: Vec<String>,
    triggers: Vec<String>,
    subjects: Vec<String>,
}

const CONNECTIVES: [&str; 5] = [", puis ", " et ", ". ", ", ensuite ", " avant de "];
const CONDITIONS: [&str; 4] = [
    "si le ticket est urgent",
    "quand un nouveau lead arrive",
    "si le montant dépasse 500 €",
    "lorsqu'un client répond",
];
const NOISE: [&str; 4] = ["les", "dans", "via", "automatiquement"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 || cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) must be at least 1 and not greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} prompts ({} to {} clauses each)...",
        cli.count, cli.min, cli.max
    );

    let pools = collect_pools(&Vocabulary::builtin());
    let corpus: Vec<CorpusEntry> = (0..cli.count)
        .map(|_| {
            let prompt = random_prompt(&mut rng, &pools, cli.min, cli.max);
            let modules = cli.with_scenarios.then(|| {
                scenario_forge::generate(&prompt)
                    .modules
                    .into_iter()
                    .map(|m| format!("{}:{}", m.kind, m.app))
                    .collect()
            });
            CorpusEntry { prompt, modules }
        })
        .collect();

    let json_output = serde_json::to_string_pretty(&corpus)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} prompts to '{}'",
        corpus.len(),
        cli.output
    );

    Ok(())
}

fn collect_pools(vocabulary: &Vocabulary) -> Pools {
    let mut pools = Pools {
        apps: Vec::new(),
        verbs: Vec::new(),
        ai: Vec::new(),
        triggers: Vec::new(),
        subjects: Vec::new(),
    };
    for entry in vocabulary.entries() {
        let surface = entry.surface.clone();
        match &entry.category {
            SignalCategory::App { name, .. } => pools.apps.push(name.clone()),
            SignalCategory::Action(_) => pools.verbs.push(surface),
            SignalCategory::Ai(_) => pools.ai.push(surface),
            SignalCategory::Trigger(_) => pools.triggers.push(surface),
            SignalCategory::Subject(noun) => pools.subjects.push(noun.clone()),
            SignalCategory::Condition => {}
        }
    }
    pools.apps.dedup();
    pools.subjects.dedup();
    pools
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [String]) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

/// Builds one prompt out of random clauses. Stems are completed with a
/// plausible suffix so the text stays readable.
fn random_prompt<R: Rng + ?Sized>(rng: &mut R, pools: &Pools, min: usize, max: usize) -> String {
    let clauses = rng.random_range(min..=max);
    let mut prompt = String::new();

    if rng.random_bool(0.3) {
        prompt.push_str(pick(rng, &pools.triggers));
        prompt.push_str(", ");
    }

    for index in 0..clauses {
        if index > 0 {
            prompt.push_str(CONNECTIVES.choose(rng).copied().unwrap_or(" et "));
        }
        if rng.random_bool(0.2) {
            prompt.push_str(CONDITIONS.choose(rng).copied().unwrap_or("si besoin"));
            prompt.push_str(", ");
        }
        let verb = if rng.random_bool(0.4) {
            pick(rng, &pools.ai)
        } else {
            pick(rng, &pools.verbs)
        };
        prompt.push_str(verb);
        prompt.push_str("e ");
        prompt.push_str(NOISE.choose(rng).copied().unwrap_or("les"));
        prompt.push(' ');
        prompt.push_str(pick(rng, &pools.subjects));
        prompt.push(' ');
        prompt.push_str(pick(rng, &pools.apps));
    }

    prompt
}
