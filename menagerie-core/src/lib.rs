//! Menagerie core library: animal records, the in-memory store and its errors.
//!
//! Public API surface:
//! - [`types`]: names, categories and records
//! - [`error`]: [`StoreError`]
//! - [`store`]: [`AnimalStore`]
//! - [`counter`]: scoped [`RegistrationCounter`]

pub mod counter;
pub mod error;
pub mod store;
pub mod types;

pub use counter::RegistrationCounter;
pub use error::StoreError;
pub use store::AnimalStore;
pub use types::{AnimalName, AnimalRecord, Category, Classification};
