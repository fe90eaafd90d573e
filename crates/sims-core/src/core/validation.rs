use super::models::student::Gender;
use phf::{Map, phf_map};

pub const NAME_MAX_LEN: usize = 20;
pub const IDENTIFIER_MIN_LEN: usize = 4;
pub const IDENTIFIER_MAX_LEN: usize = 20;
pub const CLASS_LABEL_MAX_LEN: usize = 20;
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

// "1"/"0" are kept as aliases for terminals that cannot enter the native tokens.
static GENDER_TOKENS: Map<&'static str, Gender> = phf_map! {
    "男" => Gender::Male,
    "女" => Gender::Female,
    "male" => Gender::Male,
    "female" => Gender::Female,
    "M" => Gender::Male,
    "F" => Gender::Female,
    "1" => Gender::Male,
    "0" => Gender::Female,
};

/// Returns `true` if the string is empty or made only of spaces and tabs.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c == ' ' || c == '\t')
}

pub fn is_valid_name(s: &str) -> bool {
    !is_blank(s) && (1..=NAME_MAX_LEN).contains(&s.chars().count())
}

pub fn is_valid_identifier(s: &str) -> bool {
    !is_blank(s)
        && (IDENTIFIER_MIN_LEN..=IDENTIFIER_MAX_LEN).contains(&s.chars().count())
        && s.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_valid_class_label(s: &str) -> bool {
    !is_blank(s) && s.chars().count() <= CLASS_LABEL_MAX_LEN
}

pub fn is_valid_gender(s: &str) -> bool {
    parse_gender(s).is_some()
}

/// Normalizes an accepted gender token to its canonical [`Gender`].
///
/// Surrounding whitespace is ignored; matching is otherwise exact and case-sensitive.
pub fn parse_gender(s: &str) -> Option<Gender> {
    GENDER_TOKENS.get(s.trim()).copied()
}

/// Inclusive on both ends. `NaN` never passes.
pub fn is_valid_score(x: f64) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&x)
}
