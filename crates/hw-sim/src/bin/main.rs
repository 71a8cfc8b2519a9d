//! Hold & Win batch simulator CLI
//!
//! Usage:
//!   hw-sim run [--spins N] [--seed S] [--json]   - batch RTP simulation
//!   hw-sim scenario <id> [--json]                - replay a named scenario
//!   hw-sim list                                  - list scenario presets

use anyhow::Result;
use clap::{Parser, Subcommand};

use hw_sim::scenario;
use hw_sim::simulator::{DEFAULT_SPIN_BUDGET, Simulator};

#[derive(Parser)]
#[command(name = "hw-sim", about = "Hold & Win RTP batch simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch simulation
    Run {
        /// Spin budget
        #[arg(long, default_value_t = DEFAULT_SPIN_BUDGET)]
        spins: u64,
        /// RNG seed (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a named scenario with a draw-by-draw log
    Scenario {
        /// Scenario id (see `list`)
        id: String,
        /// Emit the captured run as JSON
        #[arg(long)]
        json: bool,
    },
    /// List scenario presets
    List,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { spins, seed, json } => run_batch(spins, seed, json),
        Commands::Scenario { id, json } => replay_scenario(&id, json),
        Commands::List => {
            list_presets();
            Ok(())
        }
    }
}

fn run_batch(spins: u64, seed: Option<u64>, json: bool) -> Result<()> {
    let mut sim = match seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::new(),
    };

    println!(
        "Game initialized with starting balance: {}",
        sim.engine().account().balance
    );
    let report = sim.run(spins);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{report}");
    }
    Ok(())
}

fn replay_scenario(id: &str, json: bool) -> Result<()> {
    let preset = scenario::find(id)?;
    let run = scenario::run_scenario(&preset);

    if json {
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    println!("=== {} ===", preset.name);
    println!("{}", preset.description);
    for (i, outcome) in run.outcomes.iter().enumerate() {
        match &outcome.bonus {
            Some(bonus) => println!(
                "Spin {}: bonus triggered, symbols {:?}, bonus win {}",
                i + 1,
                bonus.symbols,
                bonus.total_win
            ),
            None => println!("Spin {}: win {}", i + 1, outcome.win_amount),
        }
    }

    println!("\n=== RANDOM VALUE USAGE ===");
    for (i, call) in run.draw_log.iter().enumerate() {
        println!(
            "Call {}: phase '{}', index {}, value {}",
            i + 1,
            call.phase,
            call.index,
            call.value
        );
    }

    println!("\nFinal balance: {}", run.final_balance);
    println!("Total win: {}", run.total_win);
    Ok(())
}

fn list_presets() {
    println!("Available scenarios:");
    for preset in scenario::presets() {
        println!("  {:<18} - {}", preset.id, preset.description);
    }
}
