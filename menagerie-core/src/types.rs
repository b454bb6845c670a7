//! Domain types for the animal registry.
//!
//! Categories are a flat tagged enum; the Pet / PackAnimal split is derived
//! from the variant, never stored.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for an animal; the store's unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimalName(pub String);

impl fmt::Display for AnimalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AnimalName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AnimalName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Coarse grouping of animal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Pet,
    PackAnimal,
}

/// The kind of animal a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dog,
    Cat,
    Hamster,
    Horse,
    Camel,
    Donkey,
}

impl Category {
    pub fn classification(self) -> Classification {
        match self {
            Category::Dog | Category::Cat | Category::Hamster => Classification::Pet,
            Category::Horse | Category::Camel | Category::Donkey => Classification::PackAnimal,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Dog => write!(f, "Dog"),
            Category::Cat => write!(f, "Cat"),
            Category::Hamster => write!(f, "Hamster"),
            Category::Horse => write!(f, "Horse"),
            Category::Camel => write!(f, "Camel"),
            Category::Donkey => write!(f, "Donkey"),
        }
    }
}

/// Case-insensitive parse of the English category name.
impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Category::Dog),
            "cat" => Ok(Category::Cat),
            "hamster" => Ok(Category::Hamster),
            "horse" => Ok(Category::Horse),
            "camel" => Ok(Category::Camel),
            "donkey" => Ok(Category::Donkey),
            _ => Err(StoreError::UnknownCategory(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One registered animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub name: AnimalName,
    /// Free-form; never parsed or validated.
    pub birth_date: String,
    pub category: Category,
    /// Trained commands in the order they were taught. Duplicates allowed.
    pub commands: Vec<String>,
}

impl AnimalRecord {
    pub fn new(name: AnimalName, birth_date: impl Into<String>, category: Category) -> Self {
        Self {
            name,
            birth_date: birth_date.into(),
            category,
            commands: Vec::new(),
        }
    }

    pub fn classification(&self) -> Classification {
        self.category.classification()
    }

    /// Commands rendered as `[a, b, c]`; `[]` when untrained.
    pub fn commands_list(&self) -> String {
        format!("[{}]", self.commands.join(", "))
    }
}

/// `Name: <name>, BirthDate: <date>, Commands: [<cmd>, ...]`, the listing
/// and dump line format.
impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, BirthDate: {}, Commands: {}",
            self.name,
            self.birth_date,
            self.commands_list()
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
