//! Batch scoring command
//!
//! Scores a fixed list of guesses against a secret and records every step.

use crate::core::{Evaluator, EvaluatorError, GuessResult};
use thiserror::Error;

/// Configuration for scoring a list of guesses
pub struct ScoreConfig {
    pub secret: String,
    pub guesses: Vec<String>,
    /// Stop after the first guess that solves the puzzle
    pub stop_when_solved: bool,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(secret: String, guesses: Vec<String>) -> Self {
        Self {
            secret,
            guesses,
            stop_when_solved: true,
        }
    }
}

/// Result of scoring a list of guesses
pub struct ScoreReport {
    pub secret: String,
    pub steps: Vec<ScoreStep>,
    pub solved: bool,
}

/// A single scored guess
pub struct ScoreStep {
    pub result: GuessResult,
    /// Knowledge table after this guess
    pub knowledge: String,
    pub solved: bool,
}

/// Errors from batch scoring
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Secret(EvaluatorError),
    #[error("guess #{index} {guess:?} rejected")]
    Guess {
        index: usize,
        guess: String,
        #[source]
        source: EvaluatorError,
    },
}

/// Score every configured guess in order
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not 5 letters A-Z
/// - Any guess is not 5 letters (`index` is 1-based)
pub fn score_guesses(config: ScoreConfig) -> Result<ScoreReport, ScoreError> {
    let mut evaluator = Evaluator::new(&config.secret).map_err(ScoreError::Secret)?;
    let mut steps = Vec::with_capacity(config.guesses.len());

    for (i, guess) in config.guesses.into_iter().enumerate() {
        let result = evaluator.score(&guess).map_err(|source| ScoreError::Guess {
            index: i + 1,
            guess,
            source,
        })?;

        let solved = evaluator.is_solved();
        steps.push(ScoreStep {
            result,
            knowledge: evaluator.encode_knowledge(),
            solved,
        });

        if solved && config.stop_when_solved {
            break;
        }
    }

    Ok(ScoreReport {
        secret: evaluator.secret().text().to_string(),
        steps,
        solved: evaluator.is_solved(),
    })
}
