//! SQLite storage gateway
//!
//! [`ContactStore`] owns the single database connection behind an
//! `Arc<tokio::sync::Mutex<_>>`. `rusqlite::Connection` is `!Sync`, so the
//! async-aware mutex is what lets resolver tasks share it: each storage call
//! suspends on the lock and resumes once its statement has settled, without
//! blocking the runtime. Writes autocommit; there is no batching across
//! calls.

use std::path::Path;
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params_from_iter};
use tokio::sync::Mutex;

use super::schema;
use crate::contact::Contact;
use crate::{Error, Result};

/// SQLite-backed storage gateway for contacts
#[derive(Clone)]
pub struct ContactStore {
    conn: Arc<Mutex<Connection>>,
}

/// Outcome of a write statement
#[derive(Debug, Clone, Copy)]
pub struct ExecOutcome {
    /// Rows changed by the statement
    pub rows_affected: usize,
    /// Rowid assigned by the most recent INSERT on this connection
    pub last_insert_id: i64,
}

impl ContactStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Initialize the database schema (idempotent)
    fn initialize_schema(conn: &Connection) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Gateway Primitives ==========

    /// Run a write statement with no expected row result.
    ///
    /// Returns the affected-row count together with the rowid assigned by
    /// the most recent insert, read under the same lock hold so a
    /// concurrent insert can never slip in between.
    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecOutcome> {
        let conn = self.conn.lock().await;
        let rows_affected = conn
            .execute(sql, params_from_iter(params))
            .map_err(map_sqlite_error)?;
        Ok(ExecOutcome {
            rows_affected,
            last_insert_id: conn.last_insert_rowid(),
        })
    }

    /// Run a query expected to yield at most one row.
    ///
    /// A miss is `Ok(None)`, not an error.
    pub async fn fetch_one<T, F>(&self, sql: &str, params: Vec<Value>, map: F) -> Result<Option<T>>
    where
        T: Send,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T> + Send,
    {
        let conn = self.conn.lock().await;
        conn.query_row(sql, params_from_iter(params), map)
            .optional()
            .map_err(Into::into)
    }

    /// Run a query yielding any number of rows, in the storage's natural
    /// scan order.
    ///
    /// A failure on any row propagates; a failed query never degrades into
    /// an empty result.
    pub async fn fetch_all<T, F>(&self, sql: &str, params: Vec<Value>, map: F) -> Result<Vec<T>>
    where
        T: Send,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T> + Send,
    {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(params), map)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }

    // ========== Contact Operations ==========

    /// Insert a new contact, returning it with the storage-assigned id
    pub async fn insert_contact(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Contact> {
        let outcome = self
            .execute(
                "INSERT INTO contacts (firstName, lastName, email) VALUES (?1, ?2, ?3)",
                vec![
                    Value::from(first_name.to_owned()),
                    Value::from(last_name.to_owned()),
                    Value::from(email.to_owned()),
                ],
            )
            .await?;
        Ok(Contact::new(
            outcome.last_insert_id,
            first_name,
            last_name,
            email,
        ))
    }

    /// Get a contact by id, or `None` when no row matches
    pub async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        self.fetch_one(
            "SELECT id, firstName, lastName, email FROM contacts WHERE id = ?1",
            vec![Value::from(id)],
            row_to_contact,
        )
        .await
    }

    /// List all contacts in natural scan order
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.fetch_all(
            "SELECT id, firstName, lastName, email FROM contacts",
            vec![],
            row_to_contact,
        )
        .await
    }

    /// Overwrite every mutable field of the contact with the given id.
    ///
    /// The id itself is immutable. Errors with [`Error::NotFound`] when no
    /// row matches.
    pub async fn update_contact(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<()> {
        let outcome = self
            .execute(
                "UPDATE contacts SET firstName = ?1, lastName = ?2, email = ?3 WHERE id = ?4",
                vec![
                    Value::from(first_name.to_owned()),
                    Value::from(last_name.to_owned()),
                    Value::from(email.to_owned()),
                    Value::from(id),
                ],
            )
            .await?;
        if outcome.rows_affected == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    /// Permanently remove the contact with the given id.
    ///
    /// Errors with [`Error::NotFound`] when no row matches.
    pub async fn delete_contact(&self, id: i64) -> Result<()> {
        let outcome = self
            .execute(
                "DELETE FROM contacts WHERE id = ?1",
                vec![Value::from(id)],
            )
            .await?;
        if outcome.rows_affected == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

/// Helper to convert a row to a Contact
fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
    })
}

/// Normalize a rusqlite failure into the crate error type.
///
/// The only constraint in the schema is the UNIQUE index on `email`, so a
/// constraint failure maps to [`Error::UniqueViolation`].
fn map_sqlite_error(err: rusqlite::Error) -> Error {
    if let rusqlite::Error::SqliteFailure(ref code, ref message) = err {
        if code.code == rusqlite::ErrorCode::ConstraintViolation {
            let detail = message
                .clone()
                .unwrap_or_else(|| "constraint violation".to_owned());
            return Error::UniqueViolation(detail);
        }
    }
    Error::Storage(err)
}
