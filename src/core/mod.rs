//! Core domain types for Wordle evaluation
//!
//! This module holds the evaluator and the pure types it is built from. Nothing
//! here performs I/O.

mod evaluator;
mod feedback;
mod knowledge;
mod win;
mod word;

pub use evaluator::{Evaluator, EvaluatorError};
pub use feedback::{Feedback, GuessResult};
pub use knowledge::{ALPHABET_SIZE, Knowledge, LetterState, is_alphabet_letter, letter_index};
pub use win::{FiveCorrectLetters, WinCondition};
pub use word::{WORD_LENGTH, Word, WordError};
