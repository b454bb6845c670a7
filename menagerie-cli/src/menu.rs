//! Menu entries and choice parsing.

use std::fmt;

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ListCommands,
    Train,
    ListAll,
    CountPets,
    CountPackAnimals,
    Exit,
}

impl MenuChoice {
    /// Menu order; position + 1 is the number the user types.
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Register,
            MenuChoice::ListCommands,
            MenuChoice::Train,
            MenuChoice::ListAll,
            MenuChoice::CountPets,
            MenuChoice::CountPackAnimals,
            MenuChoice::Exit,
        ]
    }

    /// Parse a raw input line. Surrounding whitespace is ignored; anything that
    /// is not an integer in `1..=7` is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let n: usize = line.trim().parse().ok()?;
        n.checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    pub fn number(self) -> usize {
        Self::all()
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Register => "Register a new animal",
            MenuChoice::ListCommands => "Show an animal's commands",
            MenuChoice::Train => "Teach an animal a new command",
            MenuChoice::ListAll => "Show all animals",
            MenuChoice::CountPets => "Show the number of pets",
            MenuChoice::CountPackAnimals => "Show the number of pack animals",
            MenuChoice::Exit => "Exit",
        };
        write!(f, "{}. {}", self.number(), label)
    }
}
