//! # Rolodex - Contact Book GraphQL Service
//!
//! A single-resource contact store exposed through a GraphQL query/mutation
//! API backed by one SQLite table.
//!
//! Rolodex provides:
//! - A storage gateway wrapping SQLite with an async suspend-until-settled contract
//! - A Contact entity type exposed as a GraphQL object
//! - Query resolvers (`contacts`, `contact`) and mutation resolvers
//!   (`createContact`, `updateContact`, `deleteContact`)
//! - Schema assembly as the single entry point for the HTTP transport

pub mod config;
pub mod contact;
pub mod graphql;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use contact::Contact;
pub use graphql::{ContactSchema, build_schema};
pub use storage::ContactStore;

/// Result type alias for Rolodex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Rolodex operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A write violated the `email` UNIQUE constraint
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// An update or delete matched zero rows
    #[error("Contact #{0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
