mod prompt;

use crate::error::{CliError, Result};
use crate::ui::{self, Theme};
use crate::utils::parser::parse_menu_key;
use prompt::Console;
use sims::core::models::student::{FieldUpdate, StudentCandidate};
use sims::core::presets::PresetKind;
use sims::core::validation::{
    self, CLASS_LABEL_MAX_LEN, IDENTIFIER_MAX_LEN, IDENTIFIER_MIN_LEN, NAME_MAX_LEN,
};
use sims::engine::error::RegistryError;
use sims::workflows::manager::StudentManager;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// The interactive menu loop driving a [`StudentManager`].
///
/// Failures reported by the manager are shown to the user and the loop carries on.
/// Only I/O errors end the session with an error; end of input ends it normally.
pub struct Session<'m, R, W> {
    manager: &'m mut StudentManager,
    console: Console<R, W>,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    pub fn new(manager: &'m mut StudentManager, input: R, output: W, theme: Theme) -> Self {
        Self {
            manager,
            console: Console::new(input, output, theme),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!(
            capacity = self.manager.registry().capacity(),
            "Session started."
        );
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(CliError::InputClosed) => {
                    info!("Input closed; ending session.");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        let theme = self.console.theme();
        self.console.say(theme.heading(&format!(
            "\nThank you for using the {}!",
            ui::SOFTWARE_NAME
        )))?;
        info!(records = self.manager.registry().len(), "Session ended.");
        Ok(())
    }

    /// Runs one main-menu interaction. Returns `false` once the user quits.
    fn step(&mut self) -> Result<bool> {
        let theme = self.console.theme();
        self.console.say(ui::main_menu(&theme))?;
        let answer = self.console.prompt("Enter your choice (0-9, a): ")?;
        let key = match parse_menu_key(&answer) {
            Ok(key) => key,
            Err(e) => {
                self.console.error(e)?;
                return Ok(true);
            }
        };
        debug!("Main menu selection: {:?}", key);

        match key {
            '1' => self.console.say(ui::instructions(&theme))?,
            '2' => self.add_student()?,
            '3' => self.list_students()?,
            '4' => self.search_students()?,
            '5' => self.modify_student()?,
            '6' => self.delete_student()?,
            '7' => self.manage_presets(PresetKind::Department)?,
            '8' => self.manage_presets(PresetKind::Major)?,
            '9' => self.manage_presets(PresetKind::ScoreName)?,
            'a' => self.console.say(ui::about(&theme))?,
            '0' => return Ok(false),
            other => self
                .console
                .error(format_args!("'{other}' is not a menu option. Please try again."))?,
        }
        Ok(true)
    }

    fn show_record(&mut self, index: usize) -> Result<()> {
        let theme = self.console.theme();
        if let Some(record) = self.manager.registry().get(index) {
            let text = ui::render_student(&theme, &self.manager.snapshot(record));
            self.console.say(text)?;
        }
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let theme = self.console.theme();
        self.console.say(ui::banner(&theme, "Add Student"))?;

        if let Some(kind) = self.manager.presets().missing_record_preset() {
            report(&mut self.console, &RegistryError::PresetsMissing { kind })?;
            return self
                .console
                .warn("Configure department (7) and major (8) presets first.");
        }
        if self.manager.registry().is_full() {
            let capacity = self.manager.registry().capacity();
            return report(&mut self.console, &RegistryError::CapacityExceeded { capacity });
        }

        let name = loop {
            let name = self.console.prompt("Name: ")?;
            if validation::is_valid_name(&name) {
                break name;
            }
            self.console
                .error(format_args!("Name must be 1-{NAME_MAX_LEN} characters."))?;
        };

        let gender = loop {
            let gender = self.console.prompt("Gender (M/F): ")?;
            if validation::is_valid_gender(&gender) {
                break gender;
            }
            self.console.error("Gender must be M or F.")?;
        };

        let identifier = loop {
            let identifier = self.console.prompt(&format!(
                "Identifier ({IDENTIFIER_MIN_LEN}-{IDENTIFIER_MAX_LEN} letters and digits): "
            ))?;
            if !validation::is_valid_identifier(&identifier) {
                self.console.error(format_args!(
                    "Identifier must be {IDENTIFIER_MIN_LEN}-{IDENTIFIER_MAX_LEN} ASCII letters and digits."
                ))?;
            } else if self.manager.find_by_id(&identifier).is_ok() {
                self.console
                    .error(format_args!("Identifier '{identifier}' already exists."))?;
            } else {
                break identifier;
            }
        };

        let class_label = loop {
            let label = self.console.prompt("Class: ")?;
            if validation::is_valid_class_label(&label) {
                break label;
            }
            self.console.error(format_args!(
                "Class must be 1-{CLASS_LABEL_MAX_LEN} characters."
            ))?;
        };

        let department = self
            .console
            .choose(self.manager.preset_list(PresetKind::Department))?;
        let major = self
            .console
            .choose(self.manager.preset_list(PresetKind::Major))?;
        let scores = self
            .console
            .read_scores(self.manager.presets().score_names().list())?;

        let candidate = StudentCandidate {
            name,
            gender,
            identifier,
            class_label,
            department,
            major,
            scores,
        };
        match self.manager.add_student(&candidate) {
            Ok(commit) => {
                info!(
                    identifier = %candidate.identifier,
                    index = commit.index,
                    "Student added."
                );
                if commit.default_score_applied {
                    self.console
                        .warn("No scores entered; a default score of 0 was recorded.")?;
                }
                self.console.success("✓ Student added.")
            }
            Err(e) => report(&mut self.console, &e),
        }
    }

    fn list_students(&mut self) -> Result<()> {
        let theme = self.console.theme();
        self.console.say(ui::banner(&theme, "List Students"))?;
        if self.manager.registry().is_empty() {
            return self.console.warn("No student records.");
        }

        self.console.say("  1. All students\n  2. Filter by major")?;
        let answer = self.console.prompt("Select an option (1-2): ")?;
        match parse_menu_key(&answer) {
            Ok('1') => {
                let records = self.manager.list_all();
                self.console
                    .say(format_args!("{} student(s):", records.len()))?;
                for (i, record) in records.iter().enumerate() {
                    let text = ui::render_student(&theme, &self.manager.snapshot(record));
                    self.console.say(format_args!("Student {}:\n{text}", i + 1))?;
                }
                Ok(())
            }
            Ok('2') => {
                if self.manager.presets().majors().is_empty() {
                    return report(&mut self.console, &RegistryError::PresetsMissing {
                        kind: PresetKind::Major,
                    });
                }
                let major = self
                    .console
                    .choose(self.manager.preset_list(PresetKind::Major))?;
                let records = match self.manager.list_by_major(&major) {
                    Ok(records) => records,
                    Err(e) => return report(&mut self.console, &e),
                };
                if records.is_empty() {
                    return self
                        .console
                        .warn(&format!("No students in major '{major}'."));
                }
                self.console.say(format_args!(
                    "{} student(s) in major '{major}':",
                    records.len()
                ))?;
                for (i, record) in records.iter().enumerate() {
                    let text = ui::render_student(&theme, &self.manager.snapshot(record));
                    self.console.say(format_args!("Student {}:\n{text}", i + 1))?;
                }
                Ok(())
            }
            _ => self.console.error("Invalid option."),
        }
    }

    fn search_students(&mut self) -> Result<()> {
        let theme = self.console.theme();
        self.console.say(ui::banner(&theme, "Search Students"))?;
        self.console
            .say("  1. By name\n  2. By identifier\n  0. Back")?;
        let answer = self.console.prompt("Select an option: ")?;
        let found = match parse_menu_key(&answer) {
            Ok('1') => {
                let name = self.console.prompt("Name: ")?;
                self.manager.find_by_name(&name).map(|(index, _)| index)
            }
            Ok('2') => {
                let id = self.console.prompt("Identifier: ")?;
                self.manager.find_by_id(&id).map(|(index, _)| index)
            }
            Ok('0') => return Ok(()),
            _ => return self.console.error("Invalid option."),
        };
        match found {
            Ok(index) => {
                self.console.success("✓ Student found.")?;
                self.show_record(index)
            }
            Err(e) => report(&mut self.console, &e),
        }
    }

    /// Finds a record by identifier, offering a name search when that fails.
    fn locate_student(&mut self) -> Result<Option<usize>> {
        let id = self.console.prompt("Identifier: ")?;
        if let Ok((index, _)) = self.manager.find_by_id(&id) {
            return Ok(Some(index));
        }
        if !self.console.confirm(&format!(
            "No student with identifier '{id}'. Search by name instead?"
        ))? {
            return Ok(None);
        }
        let name = self.console.prompt("Name: ")?;
        match self.manager.locate(&id, Some(&name)) {
            Ok((index, _)) => Ok(Some(index)),
            Err(e) => {
                report(&mut self.console, &e)?;
                Ok(None)
            }
        }
    }

    fn modify_student(&mut self) -> Result<()> {
        let theme = self.console.theme();
        self.console.say(ui::banner(&theme, "Modify Student"))?;
        if self.manager.registry().is_empty() {
            return self.console.warn("No student records.");
        }
        let Some(index) = self.locate_student()? else {
            return Ok(());
        };

        loop {
            self.show_record(index)?;
            self.console.say(
                "  1. Name\n  2. Gender\n  3. Class\n  4. Department\n  5. Major\n  6. Scores\n  0. Done",
            )?;
            let answer = self.console.prompt("Select a field: ")?;
            let update = match parse_menu_key(&answer) {
                Ok('1') => FieldUpdate::Name(self.console.prompt("New name: ")?),
                Ok('2') => FieldUpdate::Gender(self.console.prompt("New gender (M/F): ")?),
                Ok('3') => FieldUpdate::ClassLabel(self.console.prompt("New class: ")?),
                Ok('4') => match self.pick_preset(PresetKind::Department)? {
                    Some(name) => FieldUpdate::Department(name),
                    None => continue,
                },
                Ok('5') => match self.pick_preset(PresetKind::Major)? {
                    Some(name) => FieldUpdate::Major(name),
                    None => continue,
                },
                Ok('6') => FieldUpdate::Scores(
                    self.console
                        .read_scores(self.manager.presets().score_names().list())?,
                ),
                Ok('0') => break,
                _ => {
                    self.console.error("Invalid option.")?;
                    continue;
                }
            };

            let field = update.field();
            match self.manager.modify(index, update) {
                Ok(commit) => {
                    info!(index, %field, "Student modified.");
                    if commit.default_score_applied {
                        self.console
                            .warn("No scores entered; a default score of 0 was recorded.")?;
                    }
                    self.console.success(&format!("✓ Updated {field}."))?;
                }
                Err(e) => report(&mut self.console, &e)?,
            }
        }
        self.console.success("Modification finished.")
    }

    fn pick_preset(&mut self, kind: PresetKind) -> Result<Option<String>> {
        if self.manager.preset_list(kind).is_empty() {
            report(&mut self.console, &RegistryError::PresetsMissing { kind })?;
            return Ok(None);
        }
        self.console
            .choose(self.manager.preset_list(kind))
            .map(Some)
    }

    fn delete_student(&mut self) -> Result<()> {
        let theme = self.console.theme();
        self.console.say(ui::banner(&theme, "Delete Student"))?;
        if self.manager.registry().is_empty() {
            return self.console.warn("No student records.");
        }
        let Some(index) = self.locate_student()? else {
            return Ok(());
        };

        self.show_record(index)?;
        self.console
            .warn("⚠ This permanently removes the student record.")?;
        if !self.console.confirm("Delete this student?")? {
            return self.console.say("Deletion cancelled.");
        }
        match self.manager.delete(index) {
            Ok(removed) => {
                info!(identifier = %removed.identifier(), "Student deleted.");
                self.console.success("✓ Student deleted.")
            }
            Err(e) => report(&mut self.console, &e),
        }
    }

    fn manage_presets(&mut self, kind: PresetKind) -> Result<()> {
        let theme = self.console.theme();
        loop {
            self.console
                .say(ui::banner(&theme, &format!("Manage {kind} presets")))?;
            let listing = ui::render_presets(&theme, kind, self.manager.preset_list(kind).list());
            self.console.say(listing)?;
            self.console
                .say(format_args!("  1. Add a {kind}\n  2. Clear all\n  0. Back"))?;

            let answer = self.console.prompt("Select an option: ")?;
            match parse_menu_key(&answer) {
                Ok('1') => {
                    let name = self.console.prompt(&format!("New {kind}: "))?;
                    match self.manager.add_preset(kind, &name) {
                        Ok(()) => {
                            info!(%kind, name = %name, "Preset added.");
                            self.console.success(&format!("✓ Added {kind} '{name}'."))?;
                        }
                        Err(e) => report(&mut self.console, &e)?,
                    }
                }
                Ok('2') => {
                    if self
                        .console
                        .confirm(&format!("Clear all {kind} presets?"))?
                    {
                        let removed = self.manager.clear_presets(kind);
                        info!(%kind, removed, "Presets cleared.");
                        self.console
                            .success(&format!("✓ Cleared {removed} {kind} preset(s)."))?;
                    } else {
                        self.console.say("Cancelled.")?;
                    }
                }
                Ok('0') => return Ok(()),
                _ => self.console.error("Invalid option.")?,
            }
        }
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: &RegistryError,
) -> Result<()> {
    warn!("Operation rejected: {}", error);
    console.error(format_args!("✗ {error}"))
}
