use crossterm::style::{Color, Stylize, style};
use sims::core::presets::PresetKind;
use sims::workflows::manager::StudentSnapshot;
use std::fmt::Write as _;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

pub const SOFTWARE_NAME: &str = "Students' Information Management System";
pub const SOFTWARE_AUTHOR: &str = "MccoyFreyr";

/// Colour palette for terminal output. A disabled theme emits plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            style(text).with(Color::Cyan).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Magenta)
    }
}

pub fn banner(theme: &Theme, title: &str) -> String {
    format!("\n{RULE}\n{}\n{RULE}", theme.heading(&format!("{title:^60}")))
}

pub fn main_menu(theme: &Theme) -> String {
    let entries = [
        ("1", "Instructions"),
        ("2", "Add student"),
        ("3", "List students"),
        ("4", "Search students"),
        ("5", "Modify student"),
        ("6", "Delete student"),
        ("7", "Department presets"),
        ("8", "Major presets"),
        ("9", "Score-name presets"),
        ("a", "About"),
        ("0", "Quit"),
    ];

    let mut out = banner(theme, SOFTWARE_NAME);
    for pair in entries.chunks(2) {
        out.push('\n');
        for (key, label) in pair {
            let _ = write!(out, "  {}. {label:<24}", theme.accent(key));
        }
    }
    let _ = write!(out, "\n{THIN_RULE}");
    out
}

/// Formats one record as a labelled block. Scores without a matching score-name
/// preset are shown as `Score N`.
pub fn render_student(theme: &Theme, snapshot: &StudentSnapshot<'_>) -> String {
    let scores = if snapshot.scores.is_empty() {
        "-".to_string()
    } else {
        snapshot
            .scores
            .iter()
            .enumerate()
            .map(|(i, score)| match score.label {
                Some(label) => format!("{label}: {:.2}", score.value),
                None => format!("Score {}: {:.2}", i + 1, score.value),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "  Name:       {}", theme.heading(snapshot.name));
    let _ = writeln!(out, "  Identifier: {}", snapshot.identifier);
    let _ = writeln!(out, "  Gender:     {}", snapshot.gender);
    let _ = writeln!(out, "  Class:      {}", snapshot.class_label);
    let _ = writeln!(out, "  Department: {}", snapshot.department);
    let _ = writeln!(out, "  Major:      {}", snapshot.major);
    let _ = writeln!(out, "  Scores:     {scores}");
    let _ = writeln!(out, "  Total:      {:.2}", snapshot.total);
    let _ = write!(out, "{THIN_RULE}");
    out
}

pub fn render_presets<S: AsRef<str>>(theme: &Theme, kind: PresetKind, names: &[S]) -> String {
    if names.is_empty() {
        return theme.warning(&format!("No {kind} presets are configured."));
    }
    let mut out = format!("Configured {kind} presets:");
    for (i, name) in names.iter().enumerate() {
        let _ = write!(out, "\n  {:>2}. {}", i + 1, name.as_ref());
    }
    out
}

pub fn instructions(theme: &Theme) -> String {
    let mut out = banner(theme, "Instructions");
    out.push_str(
        "
  Before adding students, configure at least one department (menu 7)
  and one major (menu 8). Score names (menu 9) are optional labels for
  the scores of each record, matched by position.

  Departments and majors are chosen by number when a record is entered.
  Scores range from 0 to 100; type 'end' to finish entering them. A record
  entered without scores receives a single score of 0.

",
    );
    out.push_str(&theme.warning(
        "  Records are kept in memory only and are lost when the session ends.",
    ));
    out
}

pub fn about(theme: &Theme) -> String {
    let mut out = banner(theme, "About");
    let _ = write!(
        out,
        "
  Name:     {SOFTWARE_NAME}
  Version:  {}
  Author:   {SOFTWARE_AUTHOR}
  License:  {}
  Features: add, search, modify, delete and list student records;
            department, major and score-name presets; score totals.",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sims::core::models::scores::LabelledScore;
    use sims::core::models::student::Gender;

    fn snapshot<'a>(scores: Vec<LabelledScore<'a>>, total: f64) -> StudentSnapshot<'a> {
        StudentSnapshot {
            name: "Tom",
            gender: Gender::Male,
            identifier: "A001",
            class_label: "C1",
            department: "CS",
            major: "SE",
            scores,
            total,
        }
    }

    #[test]
    fn plain_theme_emits_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.error("oops"), "oops");
        assert!(!main_menu(&theme).contains('\u{1b}'));
    }

    #[test]
    fn enabled_theme_wraps_text_in_escape_codes() {
        let painted = Theme::new(true).success("done");
        assert!(painted.contains("done"));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.contains('\u{1b}'));
        }
    }

    #[test]
    fn render_student_labels_scores_and_falls_back_to_position() {
        let snap = snapshot(
            vec![
                LabelledScore {
                    label: Some("Math"),
                    value: 90.0,
                },
                LabelledScore {
                    label: None,
                    value: 80.5,
                },
            ],
            170.5,
        );
        let text = render_student(&Theme::plain(), &snap);
        assert!(text.contains("Math: 90.00, Score 2: 80.50"));
        assert!(text.contains("Total:      170.50"));
        assert!(text.contains("Gender:     male"));
    }

    #[test]
    fn render_presets_numbers_from_one() {
        let text = render_presets(&Theme::plain(), PresetKind::Major, &["SE", "AI"]);
        assert!(text.contains(" 1. SE"));
        assert!(text.contains(" 2. AI"));

        let empty: [&str; 0] = [];
        let text = render_presets(&Theme::plain(), PresetKind::Department, &empty);
        assert_eq!(text, "No department presets are configured.");
    }

    #[test]
    fn main_menu_lists_every_key() {
        let menu = main_menu(&Theme::plain());
        for key in ["1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "a.", "0."] {
            assert!(menu.contains(key), "menu is missing {key}");
        }
    }
}
