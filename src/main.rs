//! Wordle Evaluator - CLI
//!
//! Plays or replays a Wordle-style game against a secret given on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_evaluator::{
    commands::{PlayConfig, ScoreConfig, run_play, score_guesses},
    core::Evaluator,
    output::print_score_report,
};

#[derive(Parser)]
#[command(
    name = "wordle_evaluator",
    about = "Score Wordle guesses against a secret word and track letter knowledge",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading one guess per line from stdin
    Play {
        /// The secret word (5 letters A-Z, any case)
        secret: String,

        /// Show an emoji row after each result
        #[arg(short, long)]
        emoji: bool,

        /// Don't print the letter knowledge table after each guess
        #[arg(long)]
        hide_letters: bool,
    },

    /// Score a list of guesses against a secret
    Score {
        /// The secret word (5 letters A-Z, any case)
        secret: String,

        /// Guesses to score, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Show the letter knowledge table after each guess
        #[arg(short, long)]
        verbose: bool,

        /// Keep scoring after the puzzle is solved
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Play {
            secret,
            emoji,
            hide_letters,
        } => {
            let config = PlayConfig {
                show_knowledge: !hide_letters,
                emoji,
            };
            run_play_command(&secret, &config)
        }
        Commands::Score {
            secret,
            guesses,
            verbose,
            all,
        } => {
            let mut config = ScoreConfig::new(secret, guesses);
            config.stop_when_solved = !all;
            run_score_command(config, verbose)
        }
    }
}

fn run_play_command(secret: &str, config: &PlayConfig) -> Result<()> {
    let mut evaluator = Evaluator::new(secret).context("cannot start game")?;
    log::info!("starting interactive game");

    let summary = run_play(&mut evaluator, io::stdin().lock(), io::stdout().lock(), config)?;
    log::info!(
        "game over after {} guesses (solved: {})",
        summary.guesses.len(),
        summary.solved
    );
    Ok(())
}

fn run_score_command(config: ScoreConfig, verbose: bool) -> Result<()> {
    let report = score_guesses(config).context("cannot score guesses")?;
    print_score_report(&report, verbose);
    Ok(())
}
