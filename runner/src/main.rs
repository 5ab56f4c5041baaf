// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing and simulating runs
// ═══════════════════════════════════════════════════════════════════════

mod render;

use clap::{Parser, Subcommand};
use scoundrel_agents::AgentKind;
use scoundrel_engine::random::SeededRandom;
use scoundrel_engine::store::{GameStore, StoreAction};
use scoundrel_sim::{run_batch, run_game};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scoundrel", about = "Scoundrel: a solo dungeon crawl with a 52-card deck")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Seed for the deal; random when omitted
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Let an agent play a single run
    Auto {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Agent type: "random" or "heuristic"
        #[arg(short, long, default_value = "heuristic")]
        agent: AgentKind,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run many seeded games in parallel and summarize them
    Batch {
        #[arg(short, long, default_value_t = 1000)]
        games: u32,
        /// First seed; game i uses seed + i
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value = "heuristic")]
        agent: AgentKind,
        #[arg(long)]
        json: bool,
    },
}

const MAX_DECISIONS: usize = 10_000;

/// Used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Play { seed } => cmd_play(seed),
        Commands::Auto { seed, agent, json } => cmd_auto(seed, agent, json),
        Commands::Batch { games, seed, agent, json } => cmd_batch(games, seed, agent, json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cmd_play(seed: Option<u64>) -> Result<(), String> {
    let random = match seed {
        Some(s) => SeededRandom::new(s),
        None => SeededRandom::from_entropy(),
    };
    let mut store = GameStore::new(random);
    store.subscribe(|state, message| {
        println!();
        print!("{}", render::render_state(state, message));
    });

    println!("=== Scoundrel ===");
    println!("Descend the dungeon. Survive four cards at a time.");
    println!("Commands: 1-4 pick a card, f flee (lose 1), r new run, q quit\n");
    print!("{}", render::render_state(store.state(), store.message()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let Some(line) = lines.next() else { break };
        let line = line.map_err(|e| e.to_string())?;

        match parse_command(line.trim()) {
            Some(PlayCommand::Dispatch(action)) => store.dispatch(action),
            Some(PlayCommand::Quit) => break,
            None => println!("Unknown command. Use 1-4, f, r or q."),
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum PlayCommand {
    Dispatch(StoreAction),
    Quit,
}

/// Room slots are 1-based on screen.
fn parse_command(input: &str) -> Option<PlayCommand> {
    match input.to_ascii_lowercase().as_str() {
        "f" | "flee" => Some(PlayCommand::Dispatch(StoreAction::Flee)),
        "r" | "reset" => Some(PlayCommand::Dispatch(StoreAction::Reset)),
        "q" | "quit" | "exit" => Some(PlayCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(slot) if slot >= 1 => Some(PlayCommand::Dispatch(StoreAction::SelectCard(slot - 1))),
            _ => None,
        },
    }
}

fn cmd_auto(seed: u64, kind: AgentKind, json: bool) -> Result<(), String> {
    let mut agent = kind.build(seed);
    let result = run_game(agent.as_mut(), seed, MAX_DECISIONS).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== Scoundrel: seed={}, agent={} ===\n", seed, result.agent_name);
    println!("  Outcome:      {}", result.outcome);
    println!("  Final health: {}", result.final_health);
    println!("  Decisions:    {}", result.decisions);
    println!("  Flees:        {}", result.flees);
    println!("  Resolved:     {}", result.resolved);
    Ok(())
}

fn cmd_batch(games: u32, seed: u64, kind: AgentKind, json: bool) -> Result<(), String> {
    let seeds: Vec<u64> = (0..games as u64).map(|i| seed.wrapping_add(i)).collect();
    let summary = run_batch(kind, &seeds, MAX_DECISIONS);

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== Batch: {} games, agent={} ===\n", games, kind);
    println!("  Cleared:  {:>6} ({:.1}%)", summary.cleared, summary.clear_rate() * 100.0);
    println!("  Slain:    {:>6}", summary.slain);
    println!("  Errors:   {:>6}", summary.errors);
    println!("  Mean final health: {:.2}", summary.mean_final_health);
    println!("  Mean decisions:    {:.1}", summary.mean_decisions);
    if let Some(best) = summary.best_health {
        println!("  Best cleared health: {}", best);
    }
    Ok(())
}
