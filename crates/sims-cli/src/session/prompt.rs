use crate::error::{CliError, Result};
use crate::ui::Theme;
use crate::utils::parser::{self, END_OF_SCORES, ScoreEntry};
use sims::core::presets::set::UniqueNameSet;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Reads one line without its terminator. End of input is [`CliError::InputClosed`].
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.success(text);
        self.say(painted)
    }

    pub fn warn(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.warning(text);
        self.say(painted)
    }

    pub fn error(&mut self, text: impl Display) -> Result<()> {
        let painted = self.theme.error(&text.to_string());
        self.say(painted)
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} (y/n): "))?;
        Ok(parser::parse_confirmation(&answer))
    }

    /// Lists `set` and asks for a 1-based position until a valid one is given.
    ///
    /// The set must not be empty.
    pub fn choose(&mut self, set: &UniqueNameSet) -> Result<String> {
        let kind = set.kind();
        for (i, name) in set.list().iter().enumerate() {
            self.say(format_args!("  {}. {name}", i + 1))?;
        }
        loop {
            let answer = self.prompt(&format!("Select a {kind} (1-{}): ", set.len()))?;
            match parser::parse_position(&answer, set.len()) {
                Ok(position) => {
                    if let Some(name) = set.select(position) {
                        return Ok(name.to_string());
                    }
                }
                Err(e) => self.error(e)?,
            }
        }
    }

    /// Reads scores one per line until `end`. Each prompt is labelled with the
    /// score-name preset at that position, or `Score N` beyond the presets.
    pub fn read_scores(&mut self, score_names: &[String]) -> Result<Vec<f64>> {
        self.say(format_args!(
            "Enter scores (0-100), one per line. Type '{END_OF_SCORES}' to finish."
        ))?;
        if !score_names.is_empty() {
            self.say(format_args!("Score names: {}", score_names.join(", ")))?;
        }

        let mut scores = Vec::new();
        loop {
            let label = match score_names.get(scores.len()) {
                Some(name) => name.clone(),
                None => format!("Score {}", scores.len() + 1),
            };
            let answer = self.prompt(&format!("{label}: "))?;
            match parser::parse_score_entry(&answer) {
                Ok(ScoreEntry::Value(value)) => scores.push(value),
                Ok(ScoreEntry::End) => return Ok(scores),
                Err(e) => self.error(e)?,
            }
        }
    }
}
