use sims::core::validation::is_valid_score;
use thiserror::Error;

/// Word that ends a score-entry sequence.
pub const END_OF_SCORES: &str = "end";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a number. Enter a score between 0 and 100, or 'end' to finish.")]
    NotANumber(String),

    #[error("{0} is outside 0-100. Enter a score between 0 and 100, or 'end' to finish.")]
    ScoreOutOfRange(String),

    #[error("'{input}' is not a valid choice. Enter a number from 1 to {max}.")]
    InvalidPosition { input: String, max: usize },

    #[error("Please enter a choice.")]
    EmptyChoice,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreEntry {
    Value(f64),
    End,
}

/// Reads a single menu key, case-insensitively. Only the first character counts.
pub fn parse_menu_key(input: &str) -> Result<char, ParseError> {
    input
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .ok_or(ParseError::EmptyChoice)
}

pub fn parse_score_entry(input: &str) -> Result<ScoreEntry, ParseError> {
    let trimmed = input.trim();
    if trimmed == END_OF_SCORES {
        return Ok(ScoreEntry::End);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    if !is_valid_score(value) {
        return Err(ParseError::ScoreOutOfRange(trimmed.to_string()));
    }
    Ok(ScoreEntry::Value(value))
}

/// Parses a 1-based list position in `1..=max`.
pub fn parse_position(input: &str, max: usize) -> Result<usize, ParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidPosition {
            input: trimmed.to_string(),
            max,
        }),
    }
}

/// `y`/`Y` confirms; anything else declines.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(parse_menu_key(input), Ok('y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_menu_key_lowercases_first_character() {
        assert_eq!(parse_menu_key("A"), Ok('a'));
        assert_eq!(parse_menu_key("  2\n"), Ok('2'));
        assert_eq!(parse_menu_key("12"), Ok('1'));
        assert_eq!(parse_menu_key("   "), Err(ParseError::EmptyChoice));
    }

    #[test]
    fn parse_score_entry_accepts_numbers_and_end() {
        assert_eq!(parse_score_entry("90"), Ok(ScoreEntry::Value(90.0)));
        assert_eq!(parse_score_entry(" 59.5 "), Ok(ScoreEntry::Value(59.5)));
        assert_eq!(parse_score_entry("end"), Ok(ScoreEntry::End));
    }

    #[test]
    fn parse_score_entry_rejects_garbage_and_out_of_range() {
        assert_eq!(
            parse_score_entry("90abc"),
            Err(ParseError::NotANumber("90abc".to_string()))
        );
        assert_eq!(
            parse_score_entry("END"),
            Err(ParseError::NotANumber("END".to_string()))
        );
        assert_eq!(
            parse_score_entry("101"),
            Err(ParseError::ScoreOutOfRange("101".to_string()))
        );
        assert!(parse_score_entry("NaN").is_err());
    }

    #[test]
    fn parse_position_is_one_based_and_bounded() {
        assert_eq!(parse_position("1", 3), Ok(1));
        assert_eq!(parse_position(" 3 ", 3), Ok(3));
        assert!(parse_position("0", 3).is_err());
        assert!(parse_position("4", 3).is_err());
        assert!(parse_position("x", 3).is_err());
    }

    #[test]
    fn parse_confirmation_accepts_only_yes() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("Yes"));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation(""));
    }
}
