//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessResult};
use colored::Colorize;

/// "1 guess", "3 guesses"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        format!("{count} guess")
    } else {
        format!("{count} guesses")
    }
}

/// Emoji tile for a single outcome
#[must_use]
pub const fn feedback_to_emoji(feedback: Feedback) -> char {
    match feedback {
        Feedback::Exact => '🟩',
        Feedback::Misplaced => '🟨',
        Feedback::Absent => '⬜',
        Feedback::Resolved => '🟦',
    }
}

/// Format a guess result as an emoji string
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .feedback()
        .iter()
        .map(|&f| feedback_to_emoji(f))
        .collect()
}

/// Format a guess result as colored letter tiles
#[must_use]
pub fn colorize_result(result: &GuessResult) -> String {
    result
        .iter()
        .map(|(letter, feedback)| {
            let tile = format!(" {} ", letter as char);
            match feedback {
                Feedback::Exact => tile.black().on_green().bold().to_string(),
                Feedback::Misplaced => tile.black().on_yellow().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
                Feedback::Resolved => tile.black().on_cyan().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluator;

    #[test]
    fn guesses_label_pluralizes() {
        assert_eq!(guesses_label(1), "1 guess");
        assert_eq!(guesses_label(0), "0 guesses");
        assert_eq!(guesses_label(4), "4 guesses");
    }

    #[test]
    fn emoji_all_exact() {
        let mut evaluator = Evaluator::new("CORDE").unwrap();
        let result = evaluator.score("CORDE").unwrap();
        assert_eq!(result_to_emoji(&result), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let mut evaluator = Evaluator::new("CORDE").unwrap();
        let result = evaluator.score("ABCFG").unwrap();
        assert_eq!(result_to_emoji(&result), "⬜⬜🟨⬜⬜");
    }

    #[test]
    fn emoji_resolved_letter() {
        let mut evaluator = Evaluator::new("CORDE").unwrap();
        let result = evaluator.score("OOOOO").unwrap();
        assert_eq!(result_to_emoji(&result), "🟨🟩🟦🟦🟦");
    }

    #[test]
    fn colorized_tiles_contain_letters() {
        colored::control::set_override(false);
        let mut evaluator = Evaluator::new("CORDE").unwrap();
        let result = evaluator.score("CODER").unwrap();
        assert_eq!(colorize_result(&result), " C  O  D  E  R ");
    }
}
