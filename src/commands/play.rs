//! Interactive play mode
//!
//! Line-based game loop: reads guesses from any reader, writes feedback to any writer.

use crate::core::{Evaluator, EvaluatorError, GuessResult, WORD_LENGTH, WinCondition};
use crate::output::formatters::{colorize_result, guesses_label, result_to_emoji};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Options for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Print the 26-letter knowledge table after every guess
    pub show_knowledge: bool,
    /// Append an emoji row to every result
    pub emoji: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_knowledge: true,
            emoji: false,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an interactive session
#[derive(Debug)]
pub struct PlaySummary {
    pub guesses: Vec<GuessResult>,
    pub solved: bool,
}

enum Input {
    Quit,
    Letters,
    Skip,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Input::Quit,
        "letters" | "l" => Input::Letters,
        "" => Input::Skip,
        _ => Input::Guess(trimmed.to_string()),
    }
}

/// Run an interactive game until it is solved, the player quits, or input ends
///
/// # Errors
///
/// Returns an error if reading from `reader` or writing to `writer` fails.
/// Invalid guesses are reported to the player and do not end the session.
pub fn run_play<C, R, W>(
    evaluator: &mut Evaluator<C>,
    mut reader: R,
    mut writer: W,
    config: &PlayConfig,
) -> Result<PlaySummary>
where
    C: WinCondition,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Guess the 5-letter word.")?;
    writeln!(
        writer,
        "Commands: 'letters' to show letter knowledge, 'quit' to give up\n"
    )?;

    let mut guesses = Vec::new();

    loop {
        write!(writer, "Guess {}: ", guesses.len() + 1)?;
        writer.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .context("failed to read guess")?;
        if read == 0 {
            writeln!(writer)?;
            break;
        }

        let guess = match parse_input(&line) {
            Input::Quit => {
                writeln!(writer, "The word was {}.", evaluator.secret())?;
                break;
            }
            Input::Letters => {
                writeln!(writer, "  Letters: {}", evaluator.encode_knowledge())?;
                continue;
            }
            Input::Skip => continue,
            Input::Guess(guess) => guess,
        };

        let result = match evaluator.score(&guess) {
            Ok(result) => result,
            Err(e) => {
                let (EvaluatorError::InvalidGuess(reason) | EvaluatorError::InvalidSecret(reason)) =
                    &e;
                writeln!(writer, "❌ {e}: {reason}")?;
                continue;
            }
        };

        write!(writer, "  {}  {}", colorize_result(&result), result)?;
        if config.emoji {
            write!(writer, "  {}", result_to_emoji(&result))?;
        }
        writeln!(writer)?;
        if config.show_knowledge {
            writeln!(writer, "  Letters: {}", evaluator.encode_knowledge())?;
        }

        let exact = result.is_exact_match();
        guesses.push(result);

        if evaluator.is_solved() {
            writeln!(
                writer,
                "\n{}",
                format!("🎉 Solved in {}!", guesses_label(guesses.len()))
                    .bright_green()
                    .bold()
            )?;
            return Ok(PlaySummary {
                guesses,
                solved: true,
            });
        }

        if exact && evaluator.secret().distinct_letters() < WORD_LENGTH {
            writeln!(
                writer,
                "  Every position matches, but repeated letters keep the puzzle open."
            )?;
        }
    }

    Ok(PlaySummary {
        guesses,
        solved: false,
    })
}
