//! # menagerie-dump
//!
//! Full-snapshot text dump of the animal store.
//!
//! Call [`dump`] after every successful registration; it replaces the target
//! file with one line per record.

pub mod error;
pub mod writer;

pub use error::DumpError;
pub use writer::{dump, render, DEFAULT_DUMP_FILE};
