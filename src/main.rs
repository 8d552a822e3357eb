//! CLI entry point for hotkey-dispatch
//!
//! Provides commands for inspecting binding forms, checking keymaps for
//! conflicts, and replaying key presses through a listener.

use clap::{Parser, Subcommand};
use colored::*;
use hotkey_dispatch::config::{expand_path, load_keymap};
use hotkey_dispatch::core::{KeyChord, KeySequence};
use hotkey_dispatch::dispatch::{sync_handler, ExecutionGuard, HotkeyListener};
use hotkey_dispatch::logging::init_logging;
use std::path::{Path, PathBuf};

const DEFAULT_KEYMAP: &str = "~/.config/hotkey-dispatch/keymap.json";

#[derive(Parser)]
#[command(name = "hotkey-dispatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the binding forms registered for each sequence
    Forms {
        #[arg(required = true)]
        sequences: Vec<String>,
    },

    /// Print the capital-normalized form of each chord
    Normalize {
        #[arg(required = true)]
        chords: Vec<String>,
    },

    /// Validate a keymap and check it for conflicts
    Check {
        /// Path to keymap file
        #[arg(short, long, default_value = DEFAULT_KEYMAP)]
        config: PathBuf,
    },

    /// Feed chords through a listener built from a keymap
    Replay {
        /// Path to keymap file
        #[arg(short, long, default_value = DEFAULT_KEYMAP)]
        config: PathBuf,

        #[arg(required = true)]
        chords: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Forms { sequences } => print_forms(&sequences)?,
        Commands::Normalize { chords } => print_normalized(&chords)?,
        Commands::Check { config } => check_keymap(&config)?,
        Commands::Replay { config, chords } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(replay(&config, &chords))?;
        }
    }

    Ok(())
}

fn print_forms(sequences: &[String]) -> anyhow::Result<()> {
    for raw in sequences {
        let sequence: KeySequence = raw.parse()?;
        let forms = sequence.to_binding_forms().join(", ");
        println!("{} → {}", raw.cyan().bold(), forms);
    }
    Ok(())
}

fn print_normalized(chords: &[String]) -> anyhow::Result<()> {
    for raw in chords {
        let chord: KeyChord = raw.parse()?;
        println!("{} → {}", raw.cyan().bold(), chord.normalize_capital());
    }
    Ok(())
}

/// Validate a keymap and report conflicting forms
fn check_keymap(config_path: &Path) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;
    println!("{} Loading keymap: {}", "→".cyan(), path.display());

    let keymap = load_keymap(&path)?;
    let bindings = keymap.parse_bindings()?;

    println!("{} Found {} bindings\n", "✓".green(), bindings.len());

    for binding in &bindings {
        println!(
            "  {} → {} {}",
            binding.sequence.to_string().cyan(),
            binding.action.green(),
            binding.sequence.to_binding_forms().join(", ").dimmed()
        );
    }

    let simulated: Vec<&str> = keymap.simulated_key_set().iter().collect();
    println!("\n{} Simulated keys: {}", "→".cyan(), simulated.join(", "));

    let conflicts = keymap.conflicts()?;

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in conflicts.iter().enumerate() {
            println!(
                "{} {}",
                format!("Conflict {}", i + 1).yellow().bold(),
                conflict.form.cyan()
            );

            for (idx, sequence) in conflict.sequences.iter().enumerate() {
                println!("  {} {}", format!("{}.", idx + 1).dimmed(), sequence);
            }
            println!();
        }

        println!("{}", "⚠ Only one of these bindings can be registered!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// Register every binding with a printing handler and replay `chords`
async fn replay(config_path: &Path, chords: &[String]) -> anyhow::Result<()> {
    let keymap = load_keymap(config_path)?;
    let guard = ExecutionGuard::new(keymap.simulated_key_set().clone());
    let mut listener = HotkeyListener::new(guard);

    for binding in keymap.parse_bindings()? {
        let action = binding.action.clone();
        listener.register_sequence(
            binding.sequence,
            sync_handler(move |event| {
                let matched = event.binding.unwrap_or_default();
                println!("  {} {}", matched.cyan(), action.green().bold());
                Ok(())
            }),
        )?;
    }

    for raw in chords {
        let chord: KeyChord = raw.parse()?;
        println!("{} {}", "→".cyan(), chord);

        match listener.press(chord)? {
            Some(done) => done.await?,
            None => println!("  {}", "no match".dimmed()),
        }
    }

    listener.guard().wait_idle().await;
    Ok(())
}
