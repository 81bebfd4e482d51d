//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayConfig, PlaySummary, run_play};
pub use score::{ScoreConfig, ScoreError, ScoreReport, ScoreStep, score_guesses};
