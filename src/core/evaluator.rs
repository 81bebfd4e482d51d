//! Guess evaluation against a fixed secret
//!
//! An `Evaluator` is one puzzle instance: an immutable secret plus the knowledge
//! table built up by every guess scored so far.

use super::feedback::{Feedback, GuessResult};
use super::knowledge::{Knowledge, LetterState};
use super::win::{FiveCorrectLetters, WinCondition};
use super::word::{WORD_LENGTH, Word, WordError};
use thiserror::Error;

/// Errors raised by the evaluator
///
/// Both are precondition failures: the caller must supply corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error("invalid secret")]
    InvalidSecret(#[source] WordError),
    #[error("invalid guess")]
    InvalidGuess(#[source] WordError),
}

/// Scores guesses against a secret and tracks per-letter knowledge
///
/// # Examples
/// ```
/// use wordle_evaluator::core::Evaluator;
///
/// let mut evaluator = Evaluator::new("corde").unwrap();
/// assert_eq!(evaluator.score("coder").unwrap().encode(), "COder");
/// assert!(!evaluator.is_solved());
///
/// assert_eq!(evaluator.score("CORDE").unwrap().encode(), "CORDE");
/// assert!(evaluator.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<W = FiveCorrectLetters> {
    secret: Word,
    knowledge: Knowledge,
    win_condition: W,
    guess_count: usize,
}

impl Evaluator {
    /// Create an evaluator using the default win condition
    ///
    /// # Errors
    /// Returns `EvaluatorError::InvalidSecret` unless the uppercased secret is
    /// exactly 5 letters in A-Z.
    pub fn new(secret: impl AsRef<str>) -> Result<Self, EvaluatorError> {
        Self::with_win_condition(secret, FiveCorrectLetters)
    }
}

impl<W: WinCondition> Evaluator<W> {
    /// Create an evaluator with a custom win condition
    ///
    /// # Errors
    /// Returns `EvaluatorError::InvalidSecret` unless the uppercased secret is
    /// exactly 5 letters in A-Z.
    pub fn with_win_condition(
        secret: impl AsRef<str>,
        win_condition: W,
    ) -> Result<Self, EvaluatorError> {
        let secret = Word::new(secret).map_err(EvaluatorError::InvalidSecret)?;

        Ok(Self {
            secret,
            knowledge: Knowledge::new(),
            win_condition,
            guess_count: 0,
        })
    }

    /// Score a guess and fold what it reveals into the knowledge table
    ///
    /// Positions are evaluated left to right, and each position reads the table
    /// as updated by the positions before it. A letter already known `Correct`
    /// is shown uppercase even where it doesn't match.
    ///
    /// # Errors
    /// Returns `EvaluatorError::InvalidGuess` unless the guess is exactly 5
    /// ASCII letters. The table is left untouched on error.
    pub fn score(&mut self, guess: impl AsRef<str>) -> Result<GuessResult, EvaluatorError> {
        let guess = Word::parse_guess(guess).map_err(EvaluatorError::InvalidGuess)?;

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (i, slot) in feedback.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            let known_correct = self.knowledge.state(letter) == LetterState::Correct;

            *slot = if letter == self.secret.char_at(i) {
                self.knowledge.set(letter, LetterState::Correct);
                Feedback::Exact
            } else if known_correct {
                Feedback::Resolved
            } else if self.secret.has_letter(letter) {
                self.knowledge.set(letter, LetterState::Present);
                Feedback::Misplaced
            } else {
                self.knowledge.set(letter, LetterState::Absent);
                Feedback::Absent
            };
        }

        self.guess_count += 1;
        let result = GuessResult::new(guess, feedback);
        log::debug!(
            "guess #{} {} -> {} (letters {})",
            self.guess_count,
            result.guess(),
            result,
            self.knowledge
        );

        Ok(result)
    }

    /// Whether the win condition holds for the current knowledge
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.win_condition.is_satisfied(&self.knowledge)
    }

    /// The 26-character knowledge string, A to Z
    #[must_use]
    pub fn encode_knowledge(&self) -> String {
        self.knowledge.encode()
    }

    /// Read-only view of the knowledge table
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// The normalized secret
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of guesses scored successfully
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }
}
