//! Interactive menu loop.
//!
//! The shell owns its [`AnimalStore`] and is generic over input and output, so
//! a session can be driven from a byte buffer in tests. Store errors are turned
//! into printed messages at each action; only a failure of the shell's own
//! reader or writer leaves [`Shell::run`] with an error.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use menagerie_core::{AnimalStore, Classification, RegistrationCounter, StoreError};
use menagerie_dump::DEFAULT_DUMP_FILE;

use crate::menu::MenuChoice;

/// Runtime settings for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// File rewritten after every successful registration.
    pub dump_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dump_path: PathBuf::from(DEFAULT_DUMP_FILE),
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    store: AnimalStore,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            store: AnimalStore::new(),
            config,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                return self.farewell();
            };
            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => Flow::Quit,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    tracing::debug!(input = %line, "rejected menu input");
                    writeln!(self.output, "Invalid choice. Please choose again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return self.farewell();
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::ListCommands => self.list_commands(),
            MenuChoice::Train => self.train(),
            MenuChoice::ListAll => self.list_all(),
            MenuChoice::CountPets => self.count(Classification::Pet),
            MenuChoice::CountPackAnimals => self.count(Classification::PackAnimal),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    fn register(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter the animal's name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(birth_date) = self.prompt("Enter the birth date (yyyy-mm-dd): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) =
            self.prompt("Enter the animal type (Dog, Cat, Hamster, Horse, Camel, Donkey): ")?
        else {
            return Ok(Flow::Quit);
        };

        let store = &mut self.store;
        let (outcome, registered) = RegistrationCounter::scoped(|counter| {
            let total = store.register(&name, &birth_date, &category)?;
            counter.add()?;
            Ok::<_, StoreError>(total)
        });
        tracing::debug!(registered, "registration attempt finished");

        match outcome {
            Ok(total) => {
                writeln!(
                    self.output,
                    "{} Animal registered. Current number of animals: {}",
                    "✓".green(),
                    total
                )?;
                self.dump_snapshot();
            }
            Err(StoreError::Validation { field }) => {
                tracing::debug!(field, "registration rejected");
                writeln!(self.output, "Error: all fields must be filled in.")?;
            }
            Err(StoreError::UnknownCategory(raw)) => {
                tracing::debug!(category = %raw, "registration rejected");
                writeln!(self.output, "Unknown animal type.")?;
            }
            Err(other) => writeln!(self.output, "Error: {other}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_commands(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter the animal's name: ")? else {
            return Ok(Flow::Quit);
        };
        match self.store.find_by_name(&name) {
            Some(record) => writeln!(
                self.output,
                "Commands of {}: {}",
                name,
                record.commands_list()
            )?,
            None => self.not_found(&name)?,
        }
        Ok(Flow::Continue)
    }

    fn train(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter the animal's name: ")? else {
            return Ok(Flow::Quit);
        };
        if self.store.find_by_name(&name).is_none() {
            self.not_found(&name)?;
            return Ok(Flow::Continue);
        }
        let Some(command) = self.prompt(&format!("Enter a new command for {name}: "))? else {
            return Ok(Flow::Quit);
        };
        match self.store.add_command(&name, &command) {
            Ok(()) => writeln!(
                self.output,
                "{} {} has learned the command: {}",
                "✓".green(),
                name,
                command
            )?,
            Err(StoreError::NotFound(_)) => self.not_found(&name)?,
            Err(other) => writeln!(self.output, "Error: {other}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nAll animals:")?;
        for record in self.store.list_all() {
            writeln!(self.output, "{record}")?;
        }
        Ok(Flow::Continue)
    }

    fn count(&mut self, classification: Classification) -> Result<Flow> {
        let n = self.store.count_by_classification(classification);
        let label = match classification {
            Classification::Pet => "Number of pets",
            Classification::PackAnimal => "Number of pack animals",
        };
        writeln!(self.output, "{label}: {n}")?;
        Ok(Flow::Continue)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Rewrite the dump file. Failures are logged and swallowed; the store
    /// stays authoritative.
    fn dump_snapshot(&self) {
        let path = &self.config.dump_path;
        if let Err(err) = menagerie_dump::dump(self.store.list_all(), path) {
            tracing::error!(path = %path.display(), error = %err, "failed to write animal dump");
        }
    }

    fn not_found(&mut self, name: &str) -> Result<()> {
        writeln!(self.output, "No animal named {name} was found.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "--- Menu ---".bold())?;
        for choice in MenuChoice::all() {
            writeln!(self.output, "{choice}")?;
        }
        self.prompt_text("Choose an option: ")
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting.")?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.prompt_text(text)?;
        self.read_line()
    }

    fn prompt_text(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")?;
        Ok(())
    }

    /// Next input line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
