use clap::{Parser, ValueEnum};
use scenario_forge::boundary::handle_request;
use scenario_forge::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatCli {
    Json,
    Yaml,
    Mermaid,
    Text,
}

impl From<FormatCli> for ArtifactFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Json => ArtifactFormat::Json,
            FormatCli::Yaml => ArtifactFormat::Yaml,
            FormatCli::Mermaid => ArtifactFormat::Mermaid,
            FormatCli::Text => ArtifactFormat::Text,
        }
    }
}

/// Turns a natural-language automation request into a structured scenario
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The automation to describe, e.g. "Si le ticket est urgent, notifie Slack"
    prompt: Option<String>,

    /// Artifact formats to render (repeatable). Defaults to every format
    #[arg(short, long, value_enum)]
    format: Vec<FormatCli>,

    /// Directory to write the rendered artifacts to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Save the generated scenario and its prompt as a binary bundle
    #[arg(long)]
    bundle: Option<PathBuf>,

    /// Display a previously saved bundle instead of generating
    #[arg(long, conflicts_with_all = ["prompt", "request"])]
    load_bundle: Option<PathBuf>,

    /// Handle a raw JSON request body (e.g. {"prompt": "..."}) read from a file
    #[arg(long, conflicts_with = "prompt")]
    request: Option<PathBuf>,

    /// Raise the log level to debug
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    if let Some(path) = &cli.load_bundle {
        run_load_bundle(path, cli.out_dir.as_deref());
    } else if let Some(path) = &cli.request {
        run_request(path, &cli);
    } else if cli.human {
        run_interactive(&cli);
    } else {
        let prompt = cli.prompt.clone().unwrap_or_else(|| {
            exit_with_error("A prompt is required in non-interactive mode.");
        });
        run_generation(&prompt, &cli, cli.out_dir.as_deref());
    }
}

/// Initialize the tracing subscriber with the given default log level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn build_generator(cli: &Cli) -> Generator {
    let mut builder = Generator::builder();
    if !cli.format.is_empty() {
        builder = builder.with_formats(cli.format.iter().copied().map(ArtifactFormat::from));
    }
    builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid generator configuration: {}", e)))
}

fn run_generation(prompt: &str, cli: &Cli, out_dir: Option<&Path>) {
    let generator = build_generator(cli);

    let start = Instant::now();
    let scenario = generator.generate(prompt);
    let duration = start.elapsed();

    print_scenario(&scenario);
    println!("\nGenerated in {:?}", duration);

    if let Err(e) = scenario.verify() {
        eprintln!("Warning: generated scenario failed verification: {}", e);
    }

    if let Some(dir) = out_dir {
        write_artifacts(&scenario, dir);
    }
    if let Some(path) = &cli.bundle {
        ScenarioBundle::new(prompt, scenario)
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save bundle: {}", e)));
        println!("Bundle saved to '{}'", path.display());
    }
}

fn run_load_bundle(path: &Path, out_dir: Option<&Path>) {
    let bundle = ScenarioBundle::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load bundle: {}", e)));
    println!("Prompt: {}\n", bundle.prompt);
    print_scenario(&bundle.scenario);
    if let Some(dir) = out_dir {
        write_artifacts(&bundle.scenario, dir);
    }
}

fn run_request(path: &Path, cli: &Cli) {
    let body = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read request body '{}': {}",
            path.display(),
            e
        ))
    });
    let reply = handle_request(&build_generator(cli), &body);
    let payload = serde_json::to_string_pretty(&reply.to_json())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize reply: {}", e)));
    println!("HTTP {}", reply.status());
    println!("{}", payload);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: &Cli) {
    println!("--- Scenario Forge Interactive Mode ---");
    println!("Describe the automation you want (empty line for the default scenario).");

    let prompt = prompt_for_input("Enter prompt", Some(DEFAULT_PROMPT));
    let out_dir = prompt_for_input("Enter output directory (optional)", None);

    let out_dir = if out_dir.is_empty() {
        cli.out_dir.clone()
    } else {
        Some(PathBuf::from(out_dir))
    };
    run_generation(&prompt, cli, out_dir.as_deref());
}

fn print_scenario(scenario: &Scenario) {
    println!("{}", scenario.name);
    println!("  {}", scenario.summary);
    println!("  Objectif : {}", scenario.objective);
    println!("  Durée estimée : {}", scenario.estimated_run_time);

    println!("\nModules:");
    for module in &scenario.modules {
        println!(
            "  {:>2} [{:<7}] {:<12} {}",
            module.id,
            module.kind.as_str(),
            module.app,
            module.label
        );
    }

    println!("\nConnections:");
    for connection in &scenario.connections {
        match &connection.condition {
            Some(condition) => println!(
                "  {} -> {}  if {}",
                connection.from, connection.to, condition
            ),
            None => println!("  {} -> {}", connection.from, connection.to),
        }
    }

    println!("\nPrompt breakdown:");
    for bullet in &scenario.prompt_breakdown {
        println!("  - {}", bullet);
    }

    println!("\nArtifacts:");
    for artifact in &scenario.artifacts {
        println!(
            "  {} ({}, {} bytes)",
            artifact.filename,
            artifact.format,
            artifact.contents.len()
        );
    }
}

fn write_artifacts(scenario: &Scenario, dir: &Path) {
    fs::create_dir_all(dir).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Could not create directory '{}': {}",
            dir.display(),
            e
        ))
    });
    for artifact in &scenario.artifacts {
        let path = dir.join(&artifact.filename);
        fs::write(&path, &artifact.contents).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not write '{}': {}", path.display(), e))
        });
        println!("Wrote {}", path.display());
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
