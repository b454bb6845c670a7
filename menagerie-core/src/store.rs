//! In-memory animal registry.
//!
//! The store is the single source of truth for a session. Records are keyed
//! by exact name; a second registration under the same name replaces the
//! first record wholesale, command history included. Nothing is ever removed.
//!
//! Iteration order of [`AnimalStore::list_all`] is unspecified.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::types::{AnimalName, AnimalRecord, Category, Classification};

/// Owns every registered [`AnimalRecord`].
#[derive(Debug, Default)]
pub struct AnimalStore {
    animals: HashMap<AnimalName, AnimalRecord>,
}

impl AnimalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an animal.
    ///
    /// Empty fields are rejected with `StoreError::Validation` before the
    /// category is parsed; an unrecognised category yields
    /// `StoreError::UnknownCategory`. On success returns the total record count.
    pub fn register(
        &mut self,
        name: &str,
        birth_date: &str,
        category: &str,
    ) -> Result<usize, StoreError> {
        for (field, value) in [("name", name), ("birth date", birth_date), ("type", category)] {
            if value.is_empty() {
                return Err(StoreError::Validation { field });
            }
        }
        let category: Category = category.parse()?;

        let key = AnimalName::from(name);
        let record = AnimalRecord::new(key.clone(), birth_date, category);
        if self.animals.insert(key, record).is_some() {
            tracing::debug!(name, "replaced existing record");
        }
        Ok(self.animals.len())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&AnimalRecord> {
        self.animals.get(&AnimalName::from(name))
    }

    /// Append `command` to the named animal's command list.
    pub fn add_command(&mut self, name: &str, command: &str) -> Result<(), StoreError> {
        let key = AnimalName::from(name);
        let Some(record) = self.animals.get_mut(&key) else {
            return Err(StoreError::NotFound(key));
        };
        record.commands.push(command.to_owned());
        tracing::debug!(name, command, total = record.commands.len(), "command trained");
        Ok(())
    }

    pub fn count_by_classification(&self, classification: Classification) -> usize {
        self.animals
            .values()
            .filter(|r| r.classification() == classification)
            .count()
    }

    pub fn list_all(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.animals.values()
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_rex() -> AnimalStore {
        let mut store = AnimalStore::new();
        store.register("Rex", "2020-01-01", "Dog").expect("register");
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = AnimalStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list_all().count(), 0);
    }

    #[test]
    fn register_returns_running_total() {
        let mut store = AnimalStore::new();
        assert_eq!(store.register("Rex", "2020-01-01", "dog").unwrap(), 1);
        assert_eq!(store.register("Tom", "2019-05-05", "cat").unwrap(), 2);
        // Overwrite does not grow the store.
        assert_eq!(store.register("Rex", "2021-01-01", "horse").unwrap(), 2);
    }

    #[test]
    fn empty_fields_are_reported_in_order() {
        let mut store = AnimalStore::new();
        assert_eq!(
            store.register("", "", "").unwrap_err(),
            StoreError::Validation { field: "name" }
        );
        assert_eq!(
            store.register("Rex", "", "dog").unwrap_err(),
            StoreError::Validation { field: "birth date" }
        );
        assert_eq!(
            store.register("Rex", "2020-01-01", "").unwrap_err(),
            StoreError::Validation { field: "type" }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn empty_field_wins_over_unknown_category() {
        let mut store = AnimalStore::new();
        let err = store.register("", "2020-01-01", "dragon").unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[test]
    fn unknown_category_leaves_store_unchanged() {
        let mut store = store_with_rex();
        let err = store.register("Smaug", "1000-01-01", "dragon").unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory(ref s) if s == "dragon"));
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("Smaug").is_none());
    }

    #[test]
    fn overwrite_drops_previous_commands() {
        let mut store = store_with_rex();
        store.add_command("Rex", "sit").unwrap();
        store.register("Rex", "2022-02-02", "Camel").unwrap();
        let rex = store.find_by_name("Rex").unwrap();
        assert!(rex.commands.is_empty());
        assert_eq!(rex.category, Category::Camel);
        assert_eq!(rex.birth_date, "2022-02-02");
    }

    #[test]
    fn lookup_is_exact_match() {
        let store = store_with_rex();
        assert!(store.find_by_name("rex").is_none());
        assert!(store.find_by_name("Rex ").is_none());
        assert!(store.find_by_name("Rex").is_some());
    }

    #[test]
    fn add_command_to_missing_animal_is_not_found() {
        let mut store = store_with_rex();
        let err = store.add_command("Ghost", "boo").unwrap_err();
        assert_eq!(err, StoreError::NotFound(AnimalName::from("Ghost")));
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("Rex").unwrap().commands.is_empty());
    }

    #[test]
    fn add_command_keeps_duplicates_in_order() {
        let mut store = store_with_rex();
        for cmd in ["sit", "paw", "sit"] {
            store.add_command("Rex", cmd).unwrap();
        }
        assert_eq!(
            store.find_by_name("Rex").unwrap().commands,
            vec!["sit", "paw", "sit"]
        );
    }

    #[test]
    fn counts_split_by_classification() {
        let mut store = AnimalStore::new();
        store.register("Rex", "2020-01-01", "Dog").unwrap();
        store.register("Nibbles", "2023-03-03", "Hamster").unwrap();
        store.register("Eeyore", "2015-07-07", "Donkey").unwrap();
        assert_eq!(store.count_by_classification(Classification::Pet), 2);
        assert_eq!(store.count_by_classification(Classification::PackAnimal), 1);
    }
}
