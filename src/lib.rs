//! Wordle Evaluator
//!
//! Scores guesses against a fixed secret word and tracks what each guess reveals
//! about the 26 letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_evaluator::core::Evaluator;
//!
//! let mut evaluator = Evaluator::new("corde").unwrap();
//!
//! let result = evaluator.score("abcfg").unwrap();
//! assert_eq!(result.encode(), "__c__");
//! assert_eq!(evaluator.encode_knowledge(), "__c**__*******************");
//! assert!(!evaluator.is_solved());
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
