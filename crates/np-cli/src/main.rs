//! CLI front-end for Nachtprobe, a tabletop resolution aid.

mod session;

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use np_dice::{DicePoolConfig, RollOutcome, roll_pool};

use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "np",
    about = "Nachtprobe — reveal-board and exploding-dice resolution aid",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the three-round reveal-board minigame interactively
    Play {
        /// RNG seed for reproducible boards and rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Roll an exploding d10 pool once and print the result
    Roll {
        /// Stats rating (0-5)
        #[arg(long, default_value = "0")]
        stats: u32,

        /// Skills rating (0-5)
        #[arg(long, default_value = "0")]
        skills: u32,

        /// Bonus dice (0-5)
        #[arg(long, default_value = "0")]
        bonuses: u32,

        /// RNG seed for a reproducible roll (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => play(seed),
        Commands::Roll {
            stats,
            skills,
            bonuses,
            seed,
        } => roll_once(stats, skills, bonuses, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn play(seed: u64) -> Result<(), String> {
    let mut session = Session::new(seed);

    println!("  {} Nachtprobe session | Seed: {seed}", "Starting".bold());
    println!("  Three rounds; two good rounds win the night.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}

fn roll_once(stats: u32, skills: u32, bonuses: u32, seed: Option<u64>) -> Result<(), String> {
    let config = DicePoolConfig::new(stats, skills, bonuses).map_err(|e| e.to_string())?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = roll_pool(&config, &mut rng).map_err(|e| e.to_string())?;

    let values: Vec<String> = result.rolls.iter().map(u32::to_string).collect();
    println!("Pool:  {config}");
    println!("Rolls: {}", values.join(", "));
    if result.explosions() > 0 {
        println!("Explosions: {}", result.explosions());
    }

    let outcome = match result.outcome() {
        RollOutcome::Failure => result.outcome().to_string().red(),
        RollOutcome::Success => result.outcome().to_string().green(),
        RollOutcome::ExceptionalSuccess => result.outcome().to_string().green().bold(),
    };
    println!(
        "{} successes — {outcome}",
        result.total_successes.to_string().bold()
    );

    Ok(())
}
