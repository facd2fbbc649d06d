//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table:
//! - contacts(id, firstName, lastName, email UNIQUE)
//!
//! [`ContactStore`] is the gateway between resolvers and the row store:
//! three async primitives (`execute`, `fetch_one`, `fetch_all`) plus the
//! typed contact operations built on them.

pub mod schema;
pub mod sqlite;

pub use sqlite::{ContactStore, ExecOutcome};
